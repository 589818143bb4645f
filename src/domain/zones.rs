use chrono_tz::Tz;

/// Country label to IANA zone table shown in the zone selector.
/// Extendable without behavior change; the first entry is the default.
pub const ZONES: &[(&str, Tz)] = &[
    ("Iran", chrono_tz::Asia::Tehran),
    ("USA", chrono_tz::America::New_York),
    ("UK", chrono_tz::Europe::London),
    ("Germany", chrono_tz::Europe::Berlin),
    ("Japan", chrono_tz::Asia::Tokyo),
];

/// Index of the zone selected at startup
pub const DEFAULT_ZONE: usize = 0;

/// Zone for a selector index; out-of-range falls back to the default
pub fn zone(index: usize) -> Tz {
    ZONES
        .get(index)
        .map(|(_, tz)| *tz)
        .unwrap_or(ZONES[DEFAULT_ZONE].1)
}

/// Country label for a selector index
pub fn zone_label(index: usize) -> &'static str {
    ZONES
        .get(index)
        .map(|(label, _)| *label)
        .unwrap_or(ZONES[DEFAULT_ZONE].0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_table() {
        assert_eq!(ZONES.len(), 5);
        assert_eq!(zone_label(DEFAULT_ZONE), "Iran");
        assert_eq!(zone(DEFAULT_ZONE), chrono_tz::Asia::Tehran);
    }

    #[test]
    fn test_out_of_range_falls_back_to_default() {
        assert_eq!(zone(99), zone(DEFAULT_ZONE));
        assert_eq!(zone_label(99), zone_label(DEFAULT_ZONE));
    }
}
