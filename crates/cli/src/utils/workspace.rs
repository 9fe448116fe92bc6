use anyhow::{Context, Result};
use cppbuild_core::{ActiveContext, BuildTaskProvider, HostPlatform, Settings};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Canonical workspace folder, defaulting to the current directory
pub fn workspace_root(workspace: Option<&Path>) -> Result<PathBuf> {
    let root = match workspace {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    root.canonicalize()
        .with_context(|| format!("Failed to canonicalize workspace {}", root.display()))
}

/// Active context for `file`; relative paths are taken from the current directory
pub fn active_context(file: &Path, workspace: &Path) -> Result<ActiveContext> {
    let file = if file.is_absolute() {
        file.to_path_buf()
    } else {
        env::current_dir()
            .context("Failed to get current directory")?
            .join(file)
    };
    // The file does not have to exist yet
    let file = file.canonicalize().unwrap_or(file);

    debug!("Active file {:?} in workspace {:?}", file, workspace);
    ActiveContext::resolve(&file, workspace).with_context(|| {
        format!(
            "{} is not inside the workspace {}",
            file.display(),
            workspace.display()
        )
    })
}

/// Provider configured from the workspace settings
pub fn load_provider(workspace: &Path, context: Option<ActiveContext>) -> Result<BuildTaskProvider> {
    let settings = Settings::load_for_workspace(workspace)
        .with_context(|| format!("Failed to load settings for {}", workspace.display()))?;

    Ok(BuildTaskProvider::from_settings(&settings, HostPlatform::current()).with_context(context))
}
