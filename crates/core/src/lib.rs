//! cppbuild - build tasks for the active C or C++ source file
//!
//! This crate provides functionality to:
//! - Synthesize one build task per discovered compiler for a source file
//! - Run a build task as a child process and stream its output into a sink
//! - Re-run a build when a marker file under the workspace changes
//! - Merge a selected task into the persisted task list
pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod interfaces;
pub mod provider;
pub mod services;
pub mod synth;
pub mod tasks_json;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Settings;
pub use executor::{BuildExecutor, BuildOutcome, BuildSession};
pub use interfaces::{BuildSink, CompilerDiscovery, ContextSource, ProcessRunner, TaskProvider};
pub use provider::BuildTaskProvider;
pub use synth::TaskSynthesizer;
pub use tasks_json::TaskListStore;
