use std::io;
use std::path::Path;
use std::process::Command;
use tracing::debug;

use crate::interfaces::{ExitKind, ProcessOutput, ProcessRunner};

/// Runs builds with `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[String], working_dir: &Path) -> io::Result<ProcessOutput> {
        debug!("Spawning {} {:?} in {:?}", program, args, working_dir);

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()?;

        let status = if output.status.success() {
            ExitKind::Success
        } else {
            match output.status.code() {
                Some(code) => ExitKind::Failed(code),
                None => ExitKind::Terminated,
            }
        };

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status,
        })
    }
}
