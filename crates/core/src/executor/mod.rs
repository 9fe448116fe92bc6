//! Build execution
//!
//! [`BuildExecutor`] runs one task to completion and mirrors its output into
//! a [`BuildSink`](crate::interfaces::BuildSink). [`BuildSession`] keeps
//! rebuilding whenever the workspace marker file changes.

mod build;
mod session;
mod watcher;

pub use build::{
    BUILD_FAILED_NOTICE, BUILD_SUCCEEDED_NOTICE, BUILD_TERMINATED_NOTICE, BuildExecutor,
    BuildOutcome, CLOSE_EXIT_CODE, END_OF_LINE, NOT_A_SOURCE_NOTICE, STARTING_NOTICE,
};
pub use session::BuildSession;
pub use watcher::{MARKER_FILE, MarkerWatcher, marker_path};
