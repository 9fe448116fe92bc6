use std::path::{Path, PathBuf};

/// The active source file together with the workspace folder that owns it.
///
/// Stands in for the editor's "active document" so synthesis and execution
/// take it as an explicit argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveContext {
    file: PathBuf,
    workspace_folder: PathBuf,
}

impl ActiveContext {
    /// Returns `None` when `file` is not inside `workspace_folder`.
    pub fn resolve(file: impl Into<PathBuf>, workspace_folder: impl Into<PathBuf>) -> Option<Self> {
        let file = file.into();
        let workspace_folder = workspace_folder.into();
        if !file.starts_with(&workspace_folder) || file == workspace_folder {
            return None;
        }
        Some(Self {
            file,
            workspace_folder,
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn workspace_folder(&self) -> &Path {
        &self.workspace_folder
    }
}
