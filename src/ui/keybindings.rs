use crate::app::AppState;
use crate::domain::View;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.view {
        View::Tasks => {
            " ↑/↓ select · enter run/pause · space done · a add · e edit · d delete · r reset · R reset all · z country · tab pomodoro · q quit"
        }
        View::Pomodoro => " s start · r reset · tab tasks · q quit",
    };

    let paragraph = Paragraph::new(Span::styled(hints, hint_style()));
    f.render_widget(paragraph, area);
}
