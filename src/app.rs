use crate::countdown::{self, DayTick};
use crate::domain::{zone, zone_label, Pomodoro, Task, UiMode, View, DEFAULT_ZONE, ZONES};
use crate::persistence::{self, History};
use crate::ticker::{Interval, MINUTE, SECOND};
use anyhow::Result;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde_json::Value;
use std::time::Instant;
use uuid::Uuid;

/// Modal state for the delete confirmation prompt
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub task_id: Uuid,
    pub message: String,
}

/// Input form state for adding or renaming a task
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub title: String,
    /// Target task when renaming; None when adding
    pub editing: Option<Uuid>,
}

/// Main application state
pub struct AppState {
    pub tasks: Vec<Task>,
    pub history: History,
    /// Opaque backlog round-tripped to pomodoro_tasks.json on exit
    pub pomodoro_backlog: Value,
    pub pomodoro: Pomodoro,
    pub view: View,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    /// Selected entry in the zone table
    pub zone_index: usize,
    /// Highlight inside the zone selector modal
    pub zone_cursor: usize,
    pub confirm: Option<ConfirmState>,
    pub input_form: Option<InputFormState>,
    pub countdown_label: String,
    pub needs_save: bool,
    pub history_needs_save: bool,
    second_tick: Interval,
    countdown_tick: Interval,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, history: History, pomodoro_backlog: Value) -> Self {
        let now = Instant::now();
        let mut app = Self {
            tasks,
            history,
            pomodoro_backlog,
            pomodoro: Pomodoro::default(),
            view: View::Tasks,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            zone_index: DEFAULT_ZONE,
            zone_cursor: DEFAULT_ZONE,
            confirm: None,
            input_form: None,
            countdown_label: String::new(),
            needs_save: false,
            history_needs_save: false,
            second_tick: Interval::new(SECOND, now),
            countdown_tick: Interval::new(MINUTE, now),
        };

        // Prime the header before the first draw
        app.refresh_countdown(Utc::now());
        app
    }

    /// Advance all interval-driven state; called once per loop iteration
    pub fn tick(&mut self) {
        self.tick_at(Instant::now(), Utc::now());
    }

    fn tick_at(&mut self, now: Instant, now_utc: DateTime<Utc>) {
        if self.second_tick.poll(now) {
            // One shared tick; each task's running flag is its armed bit
            let mut advanced = false;
            for task in &mut self.tasks {
                if task.tick() {
                    advanced = true;
                }
            }
            if advanced {
                self.needs_save = true;
            }
            self.pomodoro.tick();
        }

        if self.countdown_tick.poll(now) {
            self.refresh_countdown(now_utc);
        }
    }

    /// Recompute the daily countdown for the selected zone.
    /// On rollover the total is snapshotted into history and the label is
    /// left untouched for that refresh.
    pub fn refresh_countdown(&mut self, now: DateTime<Utc>) {
        match countdown::check_day(zone(self.zone_index), now) {
            DayTick::Remaining(remaining) => {
                self.countdown_label = format!(
                    "Time left today ({}): {}",
                    zone_label(self.zone_index),
                    countdown::format_remaining(remaining)
                );
            }
            DayTick::Rollover => {
                self.record_rollover(Local::now().date_naive());
            }
        }
    }

    /// Snapshot the current total into history for the given date.
    /// A later rollover on the same date overwrites the earlier value.
    pub fn record_rollover(&mut self, date: NaiveDate) {
        self.history.insert(date.to_string(), self.total_elapsed());
        self.history_needs_save = true;
    }

    /// Sum of elapsed seconds over the collection; recomputed on demand
    pub fn total_elapsed(&self) -> u64 {
        self.tasks.iter().map(|t| t.elapsed).sum()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn selected_task_mut(&mut self) -> Option<&mut Task> {
        self.tasks.get_mut(self.selected_index)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    /// Append a task; titles that trim to empty are ignored
    pub fn add_task(&mut self, title: &str) {
        let title = title.trim();
        if title.is_empty() {
            return;
        }
        self.tasks.push(Task::new(title.to_string()));
        self.needs_save = true;
    }

    /// Toggle run/pause for the selected task
    pub fn toggle_run_pause(&mut self) {
        if let Some(task) = self.selected_task_mut() {
            task.toggle_run();
            self.needs_save = true;
        }
    }

    /// Flip the done checkbox; independent of the timer
    pub fn toggle_done(&mut self) {
        if let Some(task) = self.selected_task_mut() {
            task.toggle_done();
            self.needs_save = true;
        }
    }

    /// Clear the selected task's accumulator and pause it
    pub fn reset_selected(&mut self) {
        if let Some(task) = self.selected_task_mut() {
            task.reset();
            self.needs_save = true;
        }
    }

    /// Reset every task in one persisted batch
    pub fn reset_all(&mut self) {
        for task in &mut self.tasks {
            task.reset();
        }
        self.needs_save = true;
    }

    /// Open the input form for a new task
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState {
            title: String::new(),
            editing: None,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    /// Open the input form prefilled with the selected task's title
    pub fn start_edit_task(&mut self) {
        if let Some(task) = self.selected_task() {
            self.input_form = Some(InputFormState {
                title: task.title.clone(),
                editing: Some(task.id),
            });
            self.ui_mode = UiMode::EditingTask;
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.title.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.title.pop();
        }
    }

    /// Submit the input form; a title that trims to empty is a no-op
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            let title = form.title.trim();
            if !title.is_empty() {
                match form.editing {
                    Some(id) => {
                        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                            task.title = title.to_string();
                            self.needs_save = true;
                        }
                    }
                    None => self.add_task(title),
                }
            }
            self.ui_mode = UiMode::Normal;
        }
    }

    /// A cancelled dialog is a no-op
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Open the yes/no confirmation for the selected task
    pub fn request_delete(&mut self) {
        if let Some(task) = self.selected_task() {
            self.confirm = Some(ConfirmState {
                task_id: task.id,
                message: format!("Delete '{}'?", task.title),
            });
            self.ui_mode = UiMode::ConfirmDelete;
        }
    }

    /// Confirmed delete: remove the task and persist
    pub fn confirm_delete(&mut self) {
        if let Some(confirm) = self.confirm.take() {
            if let Some(index) = self.tasks.iter().position(|t| t.id == confirm.task_id) {
                self.tasks.remove(index);
                self.needs_save = true;
            }
            self.clamp_selection();
        }
        self.ui_mode = UiMode::Normal;
    }

    /// Denied confirmation: list and files untouched
    pub fn cancel_delete(&mut self) {
        self.confirm = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Open the zone selector with the cursor on the current zone
    pub fn open_zone_selector(&mut self) {
        self.zone_cursor = self.zone_index;
        self.ui_mode = UiMode::SelectingZone;
    }

    pub fn zone_cursor_up(&mut self) {
        if self.zone_cursor > 0 {
            self.zone_cursor -= 1;
        }
    }

    pub fn zone_cursor_down(&mut self) {
        if self.zone_cursor + 1 < ZONES.len() {
            self.zone_cursor += 1;
        }
    }

    /// Apply the highlighted zone; recomputes the countdown immediately,
    /// outside the 60-second cadence
    pub fn choose_zone(&mut self) {
        self.zone_index = self.zone_cursor;
        self.ui_mode = UiMode::Normal;
        self.refresh_countdown(Utc::now());
    }

    pub fn cancel_zone_selector(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Switch between the tasks and pomodoro views; entering the pomodoro
    /// view re-initializes the countdown to its default
    pub fn switch_view(&mut self) {
        self.view = match self.view {
            View::Tasks => {
                self.pomodoro = Pomodoro::default();
                View::Pomodoro
            }
            View::Pomodoro => View::Tasks,
        };
    }

    /// Persist the task collection
    pub fn save_tasks(&mut self) -> Result<()> {
        let path = persistence::tasks_file()?;
        persistence::save_tasks(path, &self.tasks)?;
        self.needs_save = false;
        Ok(())
    }

    /// Persist the daily history
    pub fn save_history(&mut self) -> Result<()> {
        let path = persistence::history_file()?;
        persistence::save_history(path, &self.history)?;
        self.history_needs_save = false;
        Ok(())
    }

    /// Final save on exit: tasks, history, and the opaque pomodoro backlog
    pub fn save_on_exit(&mut self) -> Result<()> {
        self.save_tasks()?;
        self.save_history()?;
        let path = persistence::pomodoro_file()?;
        persistence::save_backlog(path, &self.pomodoro_backlog)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::empty_backlog;
    use std::time::Duration;

    fn create_test_app() -> AppState {
        let tasks = vec![
            Task::new("Task 1".to_string()),
            Task::new("Task 2".to_string()),
        ];
        AppState::new(tasks, History::new(), empty_backlog())
    }

    #[test]
    fn test_app_state_new() {
        let app = create_test_app();
        assert_eq!(app.tasks.len(), 2);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.view, View::Tasks);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.zone_index, DEFAULT_ZONE);
        assert!(!app.needs_save);
    }

    #[test]
    fn test_move_selection() {
        let mut app = create_test_app();

        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        // Can't go past the end
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        // Can't go below 0
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_add_task() {
        let mut app = create_test_app();
        app.add_task("Write report");

        assert_eq!(app.tasks.len(), 3);
        assert_eq!(app.tasks[2].title, "Write report");
        assert!(!app.tasks[2].done);
        assert_eq!(app.tasks[2].elapsed, 0);
        assert!(!app.tasks[2].running);
        assert!(app.needs_save);
    }

    #[test]
    fn test_add_task_ignores_empty_title() {
        let mut app = create_test_app();
        app.add_task("");
        app.add_task("   ");

        assert_eq!(app.tasks.len(), 2);
        assert!(!app.needs_save);
    }

    #[test]
    fn test_edit_task_via_form() {
        let mut app = create_test_app();
        app.start_edit_task();
        assert_eq!(app.ui_mode, UiMode::EditingTask);

        if let Some(form) = &mut app.input_form {
            form.title = "Renamed".to_string();
        }
        app.submit_input_form();

        assert_eq!(app.tasks[0].title, "Renamed");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.needs_save);
    }

    #[test]
    fn test_edit_task_empty_title_is_noop() {
        let mut app = create_test_app();
        app.start_edit_task();
        if let Some(form) = &mut app.input_form {
            form.title = "  ".to_string();
        }
        app.submit_input_form();

        assert_eq!(app.tasks[0].title, "Task 1");
        assert!(!app.needs_save);
    }

    #[test]
    fn test_cancel_input_form_is_noop() {
        let mut app = create_test_app();
        app.start_add_task();
        app.input_form_add_char('x');
        app.cancel_input_form();

        assert_eq!(app.tasks.len(), 2);
        assert!(app.input_form.is_none());
        assert!(!app.needs_save);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = create_test_app();
        app.request_delete();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);

        // Denied: list length unchanged, nothing marked for writing
        app.cancel_delete();
        assert_eq!(app.tasks.len(), 2);
        assert!(!app.needs_save);
        assert_eq!(app.ui_mode, UiMode::Normal);

        // Confirmed: task removed and marked for writing
        app.request_delete();
        app.confirm_delete();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "Task 2");
        assert!(app.needs_save);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = create_test_app();
        app.move_selection_down();

        app.request_delete();
        app.confirm_delete();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_done_independent_of_running() {
        let mut app = create_test_app();
        app.toggle_run_pause();
        app.toggle_done();

        assert!(app.tasks[0].done);
        assert!(app.tasks[0].running);
    }

    #[test]
    fn test_reset_selected() {
        let mut app = create_test_app();
        app.tasks[0].running = true;
        app.tasks[0].elapsed = 42;

        app.reset_selected();
        assert_eq!(app.tasks[0].elapsed, 0);
        assert!(!app.tasks[0].running);
        assert!(app.needs_save);
    }

    #[test]
    fn test_reset_all() {
        let mut app = create_test_app();
        app.tasks[0].elapsed = 10;
        app.tasks[0].running = true;
        app.tasks[1].elapsed = 15;
        app.tasks[1].done = true;

        app.reset_all();
        for task in &app.tasks {
            assert_eq!(task.elapsed, 0);
            assert!(!task.running);
        }
        // Unrelated fields untouched
        assert!(app.tasks[1].done);
    }

    #[test]
    fn test_total_elapsed() {
        let mut app = create_test_app();
        assert_eq!(app.total_elapsed(), 0);

        app.tasks[0].elapsed = 10;
        app.tasks[1].elapsed = 15;
        assert_eq!(app.total_elapsed(), 25);
    }

    #[test]
    fn test_shared_tick_advances_only_running_tasks() {
        let mut app = create_test_app();
        app.toggle_run_pause();
        app.needs_save = false;

        let now = Instant::now() + Duration::from_secs(2);
        app.tick_at(now, Utc::now());

        assert_eq!(app.tasks[0].elapsed, 1);
        assert_eq!(app.tasks[1].elapsed, 0);
        assert!(app.needs_save);
    }

    #[test]
    fn test_tick_without_running_tasks_marks_nothing() {
        let mut app = create_test_app();

        let now = Instant::now() + Duration::from_secs(2);
        app.tick_at(now, Utc::now());

        assert_eq!(app.total_elapsed(), 0);
        assert!(!app.needs_save);
    }

    #[test]
    fn test_record_rollover_sums_all_tasks() {
        let mut app = create_test_app();
        app.tasks[0].elapsed = 10;
        app.tasks[1].elapsed = 15;

        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        app.record_rollover(date);

        assert_eq!(app.history.get("2024-06-01"), Some(&25));
        assert!(app.history_needs_save);
    }

    #[test]
    fn test_rollover_same_date_overwrites() {
        let mut app = create_test_app();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        app.tasks[0].elapsed = 10;
        app.record_rollover(date);
        app.tasks[1].elapsed = 20;
        app.record_rollover(date);

        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history.get("2024-06-01"), Some(&30));
    }

    #[test]
    fn test_switch_view_reinitializes_pomodoro() {
        let mut app = create_test_app();
        app.switch_view();
        assert_eq!(app.view, View::Pomodoro);

        app.pomodoro.start();
        for _ in 0..5 {
            app.pomodoro.tick();
        }

        app.switch_view();
        app.switch_view();
        assert_eq!(app.pomodoro.display(), "25:00");
        assert!(!app.pomodoro.running);
    }

    #[test]
    fn test_choose_zone_recomputes_label() {
        let mut app = create_test_app();
        app.open_zone_selector();
        assert_eq!(app.ui_mode, UiMode::SelectingZone);

        app.zone_cursor_down();
        app.zone_cursor_down();
        app.zone_cursor_down();
        app.choose_zone();

        assert_eq!(app.zone_index, 3);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.countdown_label.contains("Germany"));
    }

    #[test]
    fn test_zone_cursor_stays_in_table() {
        let mut app = create_test_app();
        app.open_zone_selector();

        app.zone_cursor_up();
        assert_eq!(app.zone_cursor, 0);

        for _ in 0..10 {
            app.zone_cursor_down();
        }
        assert_eq!(app.zone_cursor, ZONES.len() - 1);
    }
}
