use anyhow::{Context, Result};
use cppbuild_core::TaskListStore;
use std::path::Path;

use crate::display::print_persisted_tasks;

pub fn tasks_command(workspace: &Path) -> Result<()> {
    let store = TaskListStore::for_workspace(workspace);
    let tasks = store
        .json_tasks()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    if tasks.is_empty() {
        println!("No build tasks in {}", store.path().display());
        return Ok(());
    }

    println!("📋 Build tasks in {}:", store.path().display());
    print_persisted_tasks(&tasks);
    Ok(())
}
