//! Process execution boundary

use std::io;
use std::path::Path;

/// How the child process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    Success,
    Failed(i32),
    /// Killed by a signal, no exit code
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: ExitKind,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == ExitKind::Success
    }
}

/// Runs a program to completion and collects its output.
///
/// An `Err` means the process could not be spawned at all.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, program: &str, args: &[String], working_dir: &Path) -> io::Result<ProcessOutput>;
}
