use anyhow::{Context, Result};
use std::path::Path;

use crate::utils::{active_context, load_provider};

pub fn ensure_command(workspace: &Path, file: &Path, label: &str) -> Result<()> {
    let context = active_context(file, workspace)?;
    let mut provider = load_provider(workspace, Some(context))?;

    provider
        .ensure_build_task_exists(label)
        .with_context(|| format!("Failed to add '{}' to the task list", label))?;

    if let Some(store) = provider.task_list() {
        println!("✅ '{}' is in {}", label, store.path().display());
    }
    Ok(())
}
