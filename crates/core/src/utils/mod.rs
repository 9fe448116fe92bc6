pub mod file_type;
pub mod path;
pub mod serde_helpers;

pub use file_type::{classify_source, is_header_extension};
