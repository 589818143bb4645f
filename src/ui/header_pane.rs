use crate::app::AppState;
use crate::domain::format_elapsed;
use crate::ui::styles::{border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header: daily countdown and the running total
pub fn render_header_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("⏰ {}", app.countdown_label),
            default_style(),
        )),
        Line::from(Span::styled(
            format!("📊 Total tracked: {}", format_elapsed(app.total_elapsed())),
            default_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Stint ", title_style())),
    );

    f.render_widget(paragraph, area);
}
