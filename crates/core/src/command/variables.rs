//! `${...}` placeholder substitution against the active context

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::types::ActiveContext;
use crate::utils::file_type::extension_of;

static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(env:)?([A-Za-z_][A-Za-z0-9_]*)\}").expect("variable pattern is valid")
});

/// Substitutes `${file}`, `${fileDirname}`, `${fileBasename}`,
/// `${fileBasenameNoExtension}`, `${fileExtname}`, `${workspaceFolder}`,
/// `${workspaceFolderBasename}` and `${env:NAME}`.
///
/// Each input is expanded in a single pass; values containing `${...}` are
/// not expanded again. Unknown placeholders are left untouched.
pub struct VariableResolver<'a> {
    context: &'a ActiveContext,
}

impl<'a> VariableResolver<'a> {
    pub fn new(context: &'a ActiveContext) -> Self {
        Self { context }
    }

    pub fn resolve(&self, input: &str) -> String {
        VARIABLE
            .replace_all(input, |caps: &Captures| {
                let name = &caps[2];
                if caps.get(1).is_some() {
                    return std::env::var(name).unwrap_or_default();
                }
                self.lookup(name).unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    pub fn resolve_all(&self, inputs: &[String]) -> Vec<String> {
        inputs.iter().map(|input| self.resolve(input)).collect()
    }

    fn lookup(&self, name: &str) -> Option<String> {
        let file = self.context.file();
        let workspace = self.context.workspace_folder();
        let value = match name {
            "file" => file.display().to_string(),
            "fileDirname" => file.parent()?.display().to_string(),
            "fileBasename" => file.file_name()?.to_string_lossy().into_owned(),
            "fileBasenameNoExtension" => file.file_stem()?.to_string_lossy().into_owned(),
            "fileExtname" => extension_of(file).unwrap_or_default(),
            "workspaceFolder" => workspace.display().to_string(),
            "workspaceFolderBasename" => workspace.file_name()?.to_string_lossy().into_owned(),
            _ => return None,
        };
        Some(value)
    }
}
