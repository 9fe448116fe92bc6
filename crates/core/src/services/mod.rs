//! Default implementations of the host interfaces
//!
//! These back the command-line host: PATH scanning for compilers,
//! `std::process` execution and an in-memory output sink.

pub mod buffer_sink;
pub mod path_discovery;
pub mod system_process;

pub use buffer_sink::{BufferSink, SinkEvent};
pub use path_discovery::{CombinedDiscovery, PathScanDiscovery};
pub use system_process::SystemProcessRunner;
