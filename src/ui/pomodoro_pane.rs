use crate::app::AppState;
use crate::ui::styles::{border_style, hint_style, pomodoro_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the pomodoro countdown view
pub fn render_pomodoro_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mut lines = Vec::new();

    // Push the readout toward the vertical middle
    let padding = (area.height.saturating_sub(6) / 2) as usize;
    for _ in 0..padding {
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(Span::styled(
        app.pomodoro.display(),
        pomodoro_style(),
    )));
    lines.push(Line::raw(""));

    let state = if app.pomodoro.running {
        "counting down"
    } else {
        "ready"
    };
    lines.push(Line::from(Span::styled(
        state.to_string(),
        hint_style(),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Pomodoro ", title_style())),
        );

    f.render_widget(paragraph, area);
}
