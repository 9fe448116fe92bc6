use std::fs;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::command::{ResolvedCommand, VariableResolver};
use crate::error::{Error, Result};
use crate::interfaces::{BuildSink, ContextSource, ExitKind, ProcessRunner};
use crate::services::SystemProcessRunner;
use crate::types::BuildTaskDescriptor;
use crate::utils::classify_source;

pub const END_OF_LINE: &str = "\r\n";
pub const STARTING_NOTICE: &str = "Starting build...";
pub const BUILD_SUCCEEDED_NOTICE: &str = "Build finished successfully.";
pub const BUILD_FAILED_NOTICE: &str = "Build finished with error(s).";
pub const BUILD_TERMINATED_NOTICE: &str = "Build run was terminated.";
pub const NOT_A_SOURCE_NOTICE: &str =
    "Cannot build because the active file is not a C or C++ source file.";

/// Code passed to [`BuildSink::on_close`] after every build.
///
/// The sink's exit code never carries the build result; that is reported
/// through the notices and the returned [`BuildOutcome`].
pub const CLOSE_EXIT_CODE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    Succeeded,
    Failed,
}

impl BuildOutcome {
    pub fn is_success(self) -> bool {
        self == BuildOutcome::Succeeded
    }
}

/// Runs build tasks through a [`ProcessRunner`]
#[derive(Clone)]
pub struct BuildExecutor {
    runner: Arc<dyn ProcessRunner>,
}

impl BuildExecutor {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    /// Executor backed by real child processes
    pub fn system() -> Self {
        Self::new(Arc::new(SystemProcessRunner))
    }

    /// Run `task` once.
    ///
    /// The sink receives exactly one `on_close(CLOSE_EXIT_CODE)`, as the last
    /// event, whatever happens. A missing active context is an
    /// `InvariantViolation`; compiler failures are a `BuildOutcome::Failed`.
    pub fn execute(
        &self,
        task: &BuildTaskDescriptor,
        source: &dyn ContextSource,
        sink: &dyn BuildSink,
    ) -> Result<BuildOutcome> {
        let result = self.run_build(task, source, sink);
        sink.on_close(CLOSE_EXIT_CODE);
        result
    }

    fn run_build(
        &self,
        task: &BuildTaskDescriptor,
        source: &dyn ContextSource,
        sink: &dyn BuildSink,
    ) -> Result<BuildOutcome> {
        emit_line(sink, STARTING_NOTICE);

        let context = source.active_context().ok_or_else(|| {
            Error::InvariantViolation(format!(
                "no active workspace context when launching '{}'",
                task.label
            ))
        })?;

        if task.uses_active_file() && classify_source(context.file()).is_none() {
            emit_line(sink, NOT_A_SOURCE_NOTICE);
            return Ok(BuildOutcome::Failed);
        }

        let resolver = VariableResolver::new(&context);
        let command = ResolvedCommand::resolve(task, &resolver);

        if let Some(output_dir) = command.output_dir() {
            if !output_dir.exists() {
                debug!("Creating output directory {:?}", output_dir);
                if let Err(err) = fs::create_dir_all(&output_dir) {
                    warn!("Failed to create output directory {:?}: {}", output_dir, err);
                }
            }
        }

        let shell_command = command.to_shell_command();
        info!("Running: {}", shell_command);
        info!("Working directory: {}", command.working_dir.display());
        emit_line(sink, &shell_command);

        let output = match self
            .runner
            .run(command.executable(), &command.args, &command.working_dir)
        {
            Ok(output) => output,
            Err(err) => {
                warn!("Failed to spawn {}: {}", command.executable(), err);
                emit_text(sink, &err.to_string());
                emit_line(sink, "");
                emit_line(sink, BUILD_FAILED_NOTICE);
                return Ok(BuildOutcome::Failed);
            }
        };

        emit_text(sink, &output.stdout);
        emit_text(sink, &output.stderr);
        emit_line(sink, "");

        let outcome = match output.status {
            ExitKind::Success => {
                emit_line(sink, BUILD_SUCCEEDED_NOTICE);
                BuildOutcome::Succeeded
            }
            ExitKind::Failed(code) => {
                debug!("Compiler exited with status {}", code);
                emit_line(sink, BUILD_FAILED_NOTICE);
                BuildOutcome::Failed
            }
            ExitKind::Terminated => {
                emit_line(sink, BUILD_TERMINATED_NOTICE);
                emit_line(sink, BUILD_FAILED_NOTICE);
                BuildOutcome::Failed
            }
        };

        info!("Build '{}' finished: {:?}", task.label, outcome);
        Ok(outcome)
    }
}

fn emit_line(sink: &dyn BuildSink, line: &str) {
    sink.on_output(&format!("{line}{END_OF_LINE}"));
}

/// Forward process output line by line, normalizing line endings to `\r\n`.
/// A trailing partial line is forwarded without a terminator.
fn emit_text(sink: &dyn BuildSink, text: &str) {
    if text.is_empty() {
        return;
    }
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if lines.peek().is_some() {
            emit_line(sink, line);
        } else if !line.is_empty() {
            sink.on_output(line);
        }
    }
}
