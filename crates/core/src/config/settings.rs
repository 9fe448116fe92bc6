use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::tasks_json::jsonc;
use crate::types::{CompilerDescriptor, UserCompiler};

/// Settings location relative to the workspace root
pub const SETTINGS_FILE: &str = ".cppbuild/settings.json";

/// Overrides `compilerPath` from the settings file
pub const COMPILER_PATH_ENV: &str = "CPPBUILD_COMPILER_PATH";

/// Workspace settings.
///
/// Layered as: defaults, then `.cppbuild/settings.json`, then the
/// `CPPBUILD_COMPILER_PATH` environment variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Compiler the user prefers; offered after the known compilers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler_path: Option<String>,

    /// Extra arguments appended to the `compiler_path` task only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compiler_args: Vec<String>,

    /// Compilers to offer in addition to those found on `PATH`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub known_compilers: Vec<CompilerDescriptor>,

    /// Whether to scan `PATH` for compilers
    #[serde(default = "default_scan_path")]
    pub scan_path: bool,
}

fn default_scan_path() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compiler_path: None,
            compiler_args: Vec::new(),
            known_compilers: Vec::new(),
            scan_path: true,
        }
    }
}

impl Settings {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let value = jsonc::parse(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        serde_json::from_value(value)
            .map_err(|e| Error::ConfigError(format!("Invalid settings in {}: {e}", path.display())))
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize settings: {e}")))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents + "\n")?;
        Ok(())
    }

    pub fn settings_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join(SETTINGS_FILE)
    }

    /// Settings for a workspace with every layer applied
    pub fn load_for_workspace(workspace_root: &Path) -> Result<Self> {
        let path = Self::settings_path(workspace_root);
        let settings = if path.exists() {
            debug!("Loading settings from {:?}", path);
            Self::load_from_file(&path)?
        } else {
            debug!("No settings at {:?}, using defaults", path);
            Self::default()
        };
        Ok(settings.with_compiler_override(std::env::var(COMPILER_PATH_ENV).ok()))
    }

    /// Apply an environment-provided compiler path; blank values are ignored
    pub fn with_compiler_override(mut self, compiler_path: Option<String>) -> Self {
        if let Some(path) = compiler_path.filter(|p| !p.trim().is_empty()) {
            debug!("Compiler path overridden by {}: {}", COMPILER_PATH_ENV, path);
            self.compiler_path = Some(path);
        }
        self
    }

    /// The configured override, before validation against the host
    pub fn user_compiler(&self) -> Option<UserCompiler> {
        let path = self.compiler_path.as_deref()?;
        if path.trim().is_empty() {
            return None;
        }
        Some(UserCompiler::new(path, self.compiler_args.clone()))
    }
}
