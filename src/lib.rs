//! Umbrella crate for the cppbuild workspace.
//!
//! Re-exports `cppbuild-core` so the integration tests under `tests/` can
//! exercise the whole library through one path.
pub use cppbuild_core::*;
