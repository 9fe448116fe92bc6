//! Terminal-like output sink

/// Receives build output as it is produced.
///
/// `on_close` is called exactly once per build, after all output.
pub trait BuildSink: Send + Sync {
    /// A chunk of text; complete lines end with `\r\n`
    fn on_output(&self, chunk: &str);

    /// The build has finished and no more output follows
    fn on_close(&self, exit_code: i32);
}
