use crate::app::AppState;
use crate::domain::{format_elapsed, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, paused_style, running_style, selected_style,
    title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the task list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task);
            let style = if idx == app.selected_index {
                selected_style()
            } else if task.done {
                done_style()
            } else {
                default_style()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let date = Local::now().format("%a %b %d");
    let title = format!(" Tasks ({}) ", date);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// Create a single row for a task
/// Format: [x] Write report  1h 2m 3s (RUNNING)
fn create_task_line(task: &Task) -> Line<'static> {
    let mut spans = Vec::new();

    let checkbox = if task.done { "[x] " } else { "[ ] " };
    spans.push(Span::raw(checkbox.to_string()));

    spans.push(Span::raw(task.title.clone()));
    spans.push(Span::raw("  ".to_string()));

    spans.push(Span::raw(format_elapsed(task.elapsed)));
    spans.push(Span::raw(" ".to_string()));

    if task.running {
        spans.push(Span::styled("(RUNNING)".to_string(), running_style()));
    } else {
        spans.push(Span::styled("(PAUSED)".to_string(), paused_style()));
    }

    Line::from(spans)
}
