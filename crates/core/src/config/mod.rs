//! Configuration management for cppbuild

mod settings;

pub use settings::{COMPILER_PATH_ENV, SETTINGS_FILE, Settings};
