mod app;
mod countdown;
mod domain;
mod input;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    empty_backlog, ensure_data_dir, history_file, load_or_default, pomodoro_file, tasks_file,
    History,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "stint")]
#[command(about = "A terminal task list with per-task time tracking and a pomodoro countdown", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    run_tui()
}

fn run_tui() -> Result<()> {
    // Ensure the data directory exists and show which one we're using
    let data_dir = ensure_data_dir()?;
    eprintln!("Using data directory: {}", data_dir.display());

    // Load state; missing files start empty, corrupt ones warn and fall back
    let tasks = load_or_default(tasks_file()?, Vec::new());
    let history = load_or_default(history_file()?, History::new());
    let backlog = load_or_default(pomodoro_file()?, empty_backlog());

    let mut app = AppState::new(tasks, history, backlog);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit (tasks, history, and the opaque pomodoro backlog)
    if let Err(e) = app.save_on_exit() {
        eprintln!("Error saving state: {}", e);
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with a timeout so timers keep ticking
        if event::poll(poll_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance timers and the daily countdown
        app.tick();

        // Persist anything the last action or tick dirtied
        if app.needs_save {
            app.save_tasks()?;
        }
        if app.history_needs_save {
            app.save_history()?;
        }
    }
}
