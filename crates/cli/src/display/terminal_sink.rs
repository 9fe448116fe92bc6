use cppbuild_core::BuildSink;
use std::io::{self, Write};
use tracing::debug;

/// Mirrors build output to stdout
#[derive(Debug, Default)]
pub struct TerminalSink;

impl TerminalSink {
    pub fn new() -> Self {
        Self
    }
}

impl BuildSink for TerminalSink {
    fn on_output(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        // Nothing useful can be done when stdout is gone
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn on_close(&self, code: i32) {
        debug!("Build terminal closed with code {}", code);
    }
}
