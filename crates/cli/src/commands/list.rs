use anyhow::{Context, Result};
use cppbuild_core::LabelStyle;
use std::path::Path;
use tracing::debug;

use crate::display::print_tasks;
use crate::utils::{active_context, load_provider};

pub fn list_command(workspace: &Path, file: &Path, json: bool, prefixed: bool) -> Result<()> {
    let context = active_context(file, workspace)?;
    let mut provider = load_provider(workspace, Some(context))?;

    let style = if prefixed {
        LabelStyle::SourcePrefixed
    } else {
        LabelStyle::Plain
    };
    let tasks = provider.tasks(style);
    debug!("Synthesized {} task(s) for {:?}", tasks.len(), file);

    if json {
        let output = serde_json::to_string_pretty(&tasks).context("Failed to serialize tasks")?;
        println!("{}", output);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("❌ No build tasks for {}", file.display());
        println!("   The file is not a C/C++ source, or no compiler was found");
        return Ok(());
    }

    println!("🔍 Build tasks for {}:", file.display());
    print_tasks(&tasks);
    Ok(())
}
