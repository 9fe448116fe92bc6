use anyhow::{Context, Result};
use cppbuild_core::command::{ResolvedCommand, VariableResolver};
use cppbuild_core::executor::marker_path;
use cppbuild_core::{
    ActiveContext, BuildExecutor, BuildSession, BuildTaskDescriptor, BuildTaskProvider,
    LabelStyle, TaskProvider,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::display::TerminalSink;
use crate::utils::{active_context, load_provider};

pub fn run_command(
    workspace: &Path,
    file: &Path,
    label: Option<&str>,
    dry_run: bool,
    watch: bool,
) -> Result<()> {
    let context = active_context(file, workspace)?;
    let mut provider = load_provider(workspace, Some(context.clone()))?;
    let task = select_task(&mut provider, label)?
        .with_context(|| format!("No build task available for {}", file.display()))?;

    debug!("Selected task '{}'", task.label);

    if dry_run {
        let resolver = VariableResolver::new(&context);
        let command = ResolvedCommand::resolve(&task, &resolver);
        println!("{}", command.to_shell_command());
        println!("Working directory: {}", command.working_dir.display());
        return Ok(());
    }

    if watch {
        return watch_task(workspace, task, context);
    }

    let sink = TerminalSink::new();
    let outcome = BuildExecutor::system()
        .execute(&task, &context, &sink)
        .with_context(|| format!("Failed to run '{}'", task.label))?;

    if !outcome.is_success() {
        std::process::exit(1);
    }

    Ok(())
}

/// Pick a task by label, or the default persisted task, or the first synthesized one
fn select_task(
    provider: &mut BuildTaskProvider,
    label: Option<&str>,
) -> Result<Option<BuildTaskDescriptor>> {
    if let Some(label) = label {
        let task = provider
            .find_task(label)
            .context("Failed to read the task list")?;
        return match task {
            Some(task) => Ok(Some(task)),
            None => anyhow::bail!("No build task labelled '{}'", label),
        };
    }

    let persisted = provider
        .json_tasks()
        .context("Failed to read the task list")?;
    if let Some(default) = persisted.iter().find(|task| task.is_default) {
        info!("Using default task '{}'", default.definition.label);
        return Ok(provider.resolve_task(&default.definition));
    }

    Ok(provider.tasks(LabelStyle::Plain).into_iter().next())
}

fn watch_task(workspace: &Path, task: BuildTaskDescriptor, context: ActiveContext) -> Result<()> {
    let marker = marker_path(workspace);
    println!(
        "👀 Rebuilding '{}' whenever {} changes (Ctrl+C to stop)",
        task.label,
        marker.display()
    );

    let session = BuildSession::open(
        BuildExecutor::system(),
        task,
        Arc::new(context),
        Arc::new(TerminalSink::new()),
        marker,
    )
    .context("Failed to start watching")?;
    session.wait();
    Ok(())
}
