use std::path::{Path, PathBuf};

use super::VariableResolver;
use crate::types::BuildTaskDescriptor;

/// Double-quote a command token that contains a space and is not quoted yet
pub fn quote_command(command: &str) -> String {
    if !command.starts_with('"') && command.contains(' ') {
        format!("\"{command}\"")
    } else {
        command.to_string()
    }
}

/// A build task with every placeholder substituted, ready to spawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl ResolvedCommand {
    pub fn resolve(task: &BuildTaskDescriptor, resolver: &VariableResolver<'_>) -> Self {
        let working_dir = if task.working_directory.is_empty() {
            resolver.resolve("${fileDirname}")
        } else {
            resolver.resolve(&task.working_directory)
        };

        Self {
            program: resolver.resolve(&task.command),
            args: resolver.resolve_all(&task.args),
            working_dir: PathBuf::from(working_dir),
        }
    }

    /// Program path without surrounding quotes
    pub fn executable(&self) -> &str {
        self.program.trim_matches('"')
    }

    /// The binary the compiler is asked to write (`-o <path>` or `/Fe:<path>`)
    pub fn output_path(&self) -> Option<&str> {
        let mut args = self.args.iter();
        while let Some(arg) = args.next() {
            if arg == "-o" || arg == "/Fe:" || arg == "/Fe" {
                return args.next().map(String::as_str);
            }
            if let Some(rest) = arg.strip_prefix("/Fe") {
                return Some(rest.trim_start_matches(':'));
            }
        }
        None
    }

    /// Directory that must exist before the compiler writes its output
    pub fn output_dir(&self) -> Option<PathBuf> {
        let output = Path::new(self.output_path()?);
        let parent = output.parent().filter(|p| !p.as_os_str().is_empty())?;
        if parent.is_absolute() {
            Some(parent.to_path_buf())
        } else {
            Some(self.working_dir.join(parent))
        }
    }

    /// Command line as echoed to the terminal
    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') && !arg.starts_with('"') {
                cmd.push_str(&format!("\"{arg}\""));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }
}
