use serde::{Deserialize, Serialize};

use super::MSVC_COMPILER;
use crate::utils::path::basename;

/// Task type recorded in the persisted task list
pub const TASK_TYPE: &str = "cppbuild";

/// Language class of the active source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLanguage {
    C,
    Cpp,
    /// `.C` is used for both languages
    CAndCpp,
}

impl SourceLanguage {
    pub fn includes_c(self) -> bool {
        matches!(self, SourceLanguage::C | SourceLanguage::CAndCpp)
    }

    pub fn includes_cpp(self) -> bool {
        matches!(self, SourceLanguage::Cpp | SourceLanguage::CAndCpp)
    }
}

/// Whether labels carry the `C/C++: ` source prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    Plain,
    SourcePrefixed,
}

/// One invocable build for a (file, compiler) pair.
///
/// `args` and `working_directory` keep their `${...}` placeholders; they are
/// substituted when the build launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTaskDescriptor {
    pub label: String,
    pub command: String,
    pub args: Vec<String>,
    pub working_directory: String,
    pub language: SourceLanguage,
    pub detail: String,
}

impl BuildTaskDescriptor {
    pub fn is_msvc(&self) -> bool {
        basename(self.command.trim_matches('"')) == MSVC_COMPILER
    }

    /// True when an argument refers to the active file
    pub fn uses_active_file(&self) -> bool {
        self.args.iter().any(|arg| arg.contains("${file}"))
    }

    pub fn problem_matcher(&self) -> &'static str {
        if self.is_msvc() { "$msCompile" } else { "$gcc" }
    }

    /// Persisted form of this task
    pub fn to_definition(&self) -> TaskDefinition {
        TaskDefinition {
            task_type: TASK_TYPE.to_string(),
            label: self.label.clone(),
            command: self.command.clone(),
            args: self.args.clone(),
            options: Some(TaskOptions {
                cwd: Some(self.working_directory.clone()),
            }),
            problem_matcher: vec![self.problem_matcher().to_string()],
            group: None,
            detail: Some(self.detail.clone()),
        }
    }
}

/// A task record as stored in `tasks.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    #[serde(rename = "type")]
    pub task_type: String,
    pub label: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<TaskOptions>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "crate::utils::serde_helpers::one_or_many"
    )]
    pub problem_matcher: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<TaskGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

/// Either `"build"` or `{ "kind": "build", "isDefault": true }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskGroup {
    Kind(String),
    Detailed {
        kind: String,
        #[serde(rename = "isDefault", default)]
        is_default: bool,
    },
}

impl TaskGroup {
    /// The group marker attached to tasks written by `ensure_build_task_exists`
    pub fn default_build() -> Self {
        TaskGroup::Detailed {
            kind: "build".to_string(),
            is_default: true,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, TaskGroup::Detailed { is_default: true, .. })
    }
}

/// A `cppbuild` task read back from the task list
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTask {
    pub definition: TaskDefinition,
    pub is_default: bool,
}
