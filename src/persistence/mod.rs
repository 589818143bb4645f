pub mod files;
pub mod store;

pub use files::{
    atomic_write, ensure_data_dir, get_data_dir, history_file, load_json, pomodoro_file,
    save_json, tasks_file, StoreError,
};
pub use store::{
    empty_backlog, load_or_default, save_backlog, save_history, save_tasks, History,
};
