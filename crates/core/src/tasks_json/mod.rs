//! The persisted task list (`.cppbuild/tasks.json`)

pub mod jsonc;
mod store;

pub use store::{TASKS_FILE, TASKS_VERSION, TaskListStore};
