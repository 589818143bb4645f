pub mod header_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod pomodoro_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::{UiMode, View};
use header_pane::render_header_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::{render_confirm_modal, render_zone_selector};
use pomodoro_pane::render_pomodoro_pane;
use ratatui::Frame;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &mut AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_header_pane(f, app, layout.header_area);

    match app.view {
        View::Tasks => render_list_pane(f, app, layout.content_area),
        View::Pomodoro => render_pomodoro_pane(f, app, layout.content_area),
    }

    render_keybindings(f, app, layout.keybindings_area);

    // Modals on top of everything else
    if app.confirm.is_some() {
        render_confirm_modal(f, app, size);
    }
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
    if app.ui_mode == UiMode::SelectingZone {
        render_zone_selector(f, app, size);
    }
}
