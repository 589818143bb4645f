use super::files::{load_json, save_json};
use crate::domain::Task;
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// Daily totals keyed by ISO calendar date ("YYYY-MM-DD")
pub type History = BTreeMap<String, u64>;

/// The opaque default for the pomodoro backlog file
pub fn empty_backlog() -> Value {
    Value::Array(Vec::new())
}

/// Load a JSON file, substituting `default` for a missing file and — with a
/// warning on stderr — for one that exists but does not parse. Corruption is
/// recoverable: the app starts from the default instead of aborting.
pub fn load_or_default<T, P>(path: P, default: T) -> T
where
    T: DeserializeOwned + Clone,
    P: AsRef<Path>,
{
    match load_json(path, default.clone()) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("Warning: {}; starting from default", err);
            default
        }
    }
}

/// Persist the full task collection
pub fn save_tasks<P: AsRef<Path>>(path: P, tasks: &[Task]) -> Result<()> {
    save_json(path, &tasks)
}

/// Persist the daily history map
pub fn save_history<P: AsRef<Path>>(path: P, history: &History) -> Result<()> {
    save_json(path, history)
}

/// Persist the opaque pomodoro backlog exactly as loaded
pub fn save_backlog<P: AsRef<Path>>(path: P, backlog: &Value) -> Result<()> {
    save_json(path, backlog)
}
