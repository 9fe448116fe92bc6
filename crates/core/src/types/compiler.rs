use serde::{Deserialize, Serialize};
use std::path::Path;

use super::HostPlatform;
use crate::utils::path::basename;

/// File name of the MSVC compiler driver
pub const MSVC_COMPILER: &str = "cl.exe";

/// A compiler found by discovery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerDescriptor {
    pub path: String,
    pub is_c: bool,
}

impl CompilerDescriptor {
    pub fn new(path: impl Into<String>, is_c: bool) -> Self {
        Self {
            path: path.into(),
            is_c,
        }
    }

    /// Basename of the executable, used in task labels
    pub fn display_name(&self) -> &str {
        basename(&self.path)
    }

    pub fn is_msvc(&self) -> bool {
        self.display_name() == MSVC_COMPILER
    }
}

/// Compiler configured explicitly by the user, with extra arguments
/// appended after the generated ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCompiler {
    pub compiler_path: String,
    pub compiler_name: String,
    pub additional_args: Vec<String>,
}

impl UserCompiler {
    pub fn new(compiler_path: &str, additional_args: Vec<String>) -> Self {
        let compiler_path = compiler_path.trim().to_string();
        let compiler_name = basename(&compiler_path).to_string();
        Self {
            compiler_path,
            compiler_name,
            additional_args,
        }
    }

    /// Returns the override when it can be used on `host`.
    ///
    /// POSIX absolute paths are rejected on Windows hosts and the path must
    /// name an existing file.
    pub fn validated(&self, host: HostPlatform) -> Option<UserCompiler> {
        if self.compiler_path.is_empty() {
            return None;
        }
        if host.is_windows() && self.compiler_path.starts_with('/') {
            return None;
        }

        let mut compiler = self.clone();
        if host.is_windows() {
            compiler.compiler_path = compiler.compiler_path.replace("\\\\", "\\");
        }

        if Path::new(&compiler.compiler_path).is_file() {
            Some(compiler)
        } else {
            None
        }
    }
}
