pub mod formatter;
pub mod terminal_sink;

pub use formatter::{print_persisted_tasks, print_tasks};
pub use terminal_sink::TerminalSink;
