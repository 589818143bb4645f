use crate::app::AppState;
use crate::domain::{UiMode, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events; returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_input_form_mode(app, key),
        UiMode::ConfirmDelete => handle_confirm_mode(app, key),
        UiMode::SelectingZone => handle_zone_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.view {
        View::Tasks => handle_tasks_view(app, key),
        View::Pomodoro => handle_pomodoro_view(app, key),
    }
}

/// Handle keys in the tasks view
fn handle_tasks_view(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Toggle run/pause
        KeyCode::Enter => {
            app.toggle_run_pause();
            Ok(false)
        }

        // Toggle the done checkbox
        KeyCode::Char(' ') => {
            app.toggle_done();
            Ok(false)
        }

        // Add / edit / delete
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_task();
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.request_delete();
            Ok(false)
        }

        // Reset selected / all
        KeyCode::Char('r') => {
            app.reset_selected();
            Ok(false)
        }
        KeyCode::Char('R') => {
            app.reset_all();
            Ok(false)
        }

        // Zone selector
        KeyCode::Char('z') | KeyCode::Char('Z') => {
            app.open_zone_selector();
            Ok(false)
        }

        // Switch to the pomodoro view
        KeyCode::Tab => {
            app.switch_view();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the pomodoro view
fn handle_pomodoro_view(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.pomodoro.start();
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.pomodoro.reset();
            Ok(false)
        }
        KeyCode::Tab => {
            app.switch_view();
            Ok(false)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),
        _ => Ok(false),
    }
}

/// Handle keys while the add/edit input form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while the delete confirmation is open
fn handle_confirm_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.confirm_delete();
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_delete();
            Ok(false)
        }
        _ => Ok(false),
    }
}

/// Handle keys while the zone selector is open
fn handle_zone_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up => {
            app.zone_cursor_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.zone_cursor_down();
            Ok(false)
        }
        KeyCode::Enter => {
            app.choose_zone();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_zone_selector();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{empty_backlog, History};
    use crossterm::event::KeyModifiers;

    fn create_test_app() -> AppState {
        let tasks = vec![crate::domain::Task::new("Task 1".to_string())];
        AppState::new(tasks, History::new(), empty_backlog())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
        assert!(handle_key(&mut app, press(KeyCode::Esc)).unwrap());
        assert!(!handle_key(&mut app, press(KeyCode::Char('x'))).unwrap());
    }

    #[test]
    fn test_enter_toggles_run_pause() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert!(app.tasks[0].running);

        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert!(!app.tasks[0].running);
    }

    #[test]
    fn test_add_flow_through_form() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        for c in "New".chars() {
            handle_key(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.tasks[1].title, "New");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_add_flow_cancelled_is_noop() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('x'))).unwrap();
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_denied_leaves_list() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);

        handle_key(&mut app, press(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert!(!app.needs_save);
    }

    #[test]
    fn test_delete_confirmed_removes() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('d'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char('y'))).unwrap();
        assert!(app.tasks.is_empty());
        assert!(app.needs_save);
    }

    #[test]
    fn test_pomodoro_view_keys() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Tab)).unwrap();
        assert_eq!(app.view, View::Pomodoro);

        handle_key(&mut app, press(KeyCode::Char('s'))).unwrap();
        assert!(app.pomodoro.running);

        handle_key(&mut app, press(KeyCode::Char('r'))).unwrap();
        assert!(!app.pomodoro.running);
        assert_eq!(app.pomodoro.display(), "25:00");

        handle_key(&mut app, press(KeyCode::Tab)).unwrap();
        assert_eq!(app.view, View::Tasks);
    }

    #[test]
    fn test_zone_selector_flow() {
        let mut app = create_test_app();

        handle_key(&mut app, press(KeyCode::Char('z'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::SelectingZone);

        handle_key(&mut app, press(KeyCode::Down)).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.zone_index, 1);
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
