//! Host-facing interfaces
//!
//! The editor host is represented only through these traits: compiler
//! discovery, the active file, process execution, the terminal-like output
//! sink and task provision. Any host adapter can implement them.

pub mod build_sink;
pub mod compiler_discovery;
pub mod context_source;
pub mod process_runner;
pub mod task_provider;

pub use build_sink::BuildSink;
pub use compiler_discovery::CompilerDiscovery;
pub use context_source::ContextSource;
pub use process_runner::{ExitKind, ProcessOutput, ProcessRunner};
pub use task_provider::TaskProvider;
