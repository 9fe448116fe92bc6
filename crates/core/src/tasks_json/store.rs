use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::jsonc;
use crate::error::{Error, Result};
use crate::types::{PersistedTask, TASK_TYPE, TaskDefinition};

/// Task list location relative to the workspace root
pub const TASKS_FILE: &str = ".cppbuild/tasks.json";

/// Schema version written into the task list
pub const TASKS_VERSION: &str = "2.0.0";

/// Reads and appends to the persisted task list.
///
/// Reading tolerates comments; writing serializes strict JSON, so comments
/// and formatting in the file are lost whenever a task is appended.
#[derive(Debug, Clone)]
pub struct TaskListStore {
    path: PathBuf,
}

impl TaskListStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_workspace(workspace_root: &Path) -> Self {
        Self::new(workspace_root.join(TASKS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The whole document; an absent or blank file reads as `{}`.
    pub fn read_raw(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            debug!("No task list at {:?}", self.path);
            return Ok(Map::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        let value = jsonc::parse(&contents).map_err(|e| {
            warn!("Failed to parse {:?}: {}", self.path, e);
            Error::TaskListParseError
        })?;

        let Value::Object(document) = value else {
            warn!("Task list {:?} is not a JSON object", self.path);
            return Err(Error::TaskListParseError);
        };

        if document.get("tasks").is_some_and(|tasks| !tasks.is_array()) {
            warn!("'tasks' in {:?} is not an array", self.path);
            return Err(Error::TaskListParseError);
        }

        Ok(document)
    }

    /// Persisted `cppbuild` tasks; records of other types are skipped
    pub fn json_tasks(&self) -> Result<Vec<PersistedTask>> {
        let document = self.read_raw()?;
        let Some(Value::Array(records)) = document.get("tasks") else {
            return Ok(Vec::new());
        };

        let mut tasks = Vec::new();
        for record in records {
            let is_ours = record.get("type").and_then(Value::as_str) == Some(TASK_TYPE);
            let has_label = record.get("label").and_then(Value::as_str).is_some();
            if !is_ours || !has_label {
                continue;
            }

            match serde_json::from_value::<TaskDefinition>(record.clone()) {
                Ok(definition) => {
                    let is_default = definition.group.as_ref().is_some_and(|g| g.is_default());
                    tasks.push(PersistedTask {
                        definition,
                        is_default,
                    });
                }
                Err(e) => warn!("Skipping malformed task record: {}", e),
            }
        }

        Ok(tasks)
    }

    pub fn contains_label(document: &Map<String, Value>, label: &str) -> bool {
        document
            .get("tasks")
            .and_then(Value::as_array)
            .is_some_and(|tasks| {
                tasks
                    .iter()
                    .any(|task| task.get("label").and_then(Value::as_str) == Some(label))
            })
    }

    /// Append `definition` to `document`, stamp the schema version and write
    /// the whole document back. Existing records are kept as they were read.
    pub fn append(&self, mut document: Map<String, Value>, definition: &TaskDefinition) -> Result<()> {
        let record = serde_json::to_value(definition)?;

        let tasks = document
            .entry("tasks")
            .or_insert_with(|| Value::Array(Vec::new()));
        match tasks {
            Value::Array(records) => records.push(record),
            _ => return Err(Error::TaskListParseError),
        }
        document.insert("version".to_string(), Value::String(TASKS_VERSION.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&Value::Object(document))?;
        fs::write(&self.path, contents + "\n")?;

        info!("Added task '{}' to {}", definition.label, self.path.display());
        Ok(())
    }
}
