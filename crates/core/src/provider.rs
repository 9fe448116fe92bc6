//! The task provider a host talks to
//!
//! Bundles discovery, the configured compiler override, the active context
//! and the synthesizer, and implements the ensure-task-exists merge.

use tracing::{debug, info};

use crate::command::quote_command;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::interfaces::{CompilerDiscovery, TaskProvider};
use crate::services::{CombinedDiscovery, PathScanDiscovery};
use crate::synth::{TaskSynthesizer, normalize_label};
use crate::tasks_json::TaskListStore;
use crate::types::{
    ActiveContext, BuildTaskDescriptor, HostPlatform, LabelStyle, PersistedTask, SourceLanguage,
    TASK_TYPE, TaskDefinition, TaskGroup, UserCompiler,
};
use crate::utils::classify_source;

pub struct BuildTaskProvider {
    synthesizer: TaskSynthesizer,
    discovery: Box<dyn CompilerDiscovery>,
    user_compiler: Option<UserCompiler>,
    context: Option<ActiveContext>,
}

impl BuildTaskProvider {
    pub fn new(host: HostPlatform, discovery: impl CompilerDiscovery + 'static) -> Self {
        Self {
            synthesizer: TaskSynthesizer::new(host),
            discovery: Box::new(discovery),
            user_compiler: None,
            context: None,
        }
    }

    /// Provider wired from workspace settings: configured compilers first,
    /// then `PATH` when scanning is enabled.
    pub fn from_settings(settings: &Settings, host: HostPlatform) -> Self {
        let mut discovery = CombinedDiscovery::new().with_source(settings.known_compilers.clone());
        if settings.scan_path {
            discovery = discovery.with_source(PathScanDiscovery::from_env());
        }
        Self::new(host, discovery).with_user_compiler(settings.user_compiler())
    }

    pub fn with_user_compiler(mut self, user_compiler: Option<UserCompiler>) -> Self {
        self.user_compiler = user_compiler;
        self
    }

    pub fn with_context(mut self, context: Option<ActiveContext>) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> Option<&ActiveContext> {
        self.context.as_ref()
    }

    pub fn tasks(&mut self, style: LabelStyle) -> Vec<BuildTaskDescriptor> {
        let known = self.discovery.known_compilers();
        self.synthesizer.synthesize(
            self.context.as_ref(),
            &known,
            self.user_compiler.as_ref(),
            style,
        )
    }

    /// Task list of the active workspace
    pub fn task_list(&self) -> Option<TaskListStore> {
        self.context
            .as_ref()
            .map(|context| TaskListStore::for_workspace(context.workspace_folder()))
    }

    pub fn json_tasks(&self) -> Result<Vec<PersistedTask>> {
        match self.task_list() {
            Some(store) => store.json_tasks(),
            None => Ok(Vec::new()),
        }
    }

    /// Find a task by label among synthesized tasks (plain or prefixed
    /// labels), then among persisted ones.
    pub fn find_task(&mut self, label: &str) -> Result<Option<BuildTaskDescriptor>> {
        for style in [LabelStyle::Plain, LabelStyle::SourcePrefixed] {
            if let Some(task) = self.tasks(style).into_iter().find(|t| t.label == label) {
                return Ok(Some(task));
            }
        }

        let persisted = self.json_tasks()?;
        Ok(persisted
            .iter()
            .find(|task| task.definition.label == label)
            .and_then(|task| self.resolve_task(&task.definition)))
    }

    /// Make sure a task labelled `label` is in the task list.
    ///
    /// A no-op when the label is already present. Otherwise the label must
    /// name a task synthesized with prefixed labels; it is appended as the
    /// default build task and the file is rewritten, dropping comments.
    pub fn ensure_build_task_exists(&mut self, label: &str) -> Result<()> {
        let store = self.task_list().ok_or_else(|| {
            Error::InvariantViolation("no workspace folder for the task list".to_string())
        })?;

        let document = store.read_raw()?;
        if TaskListStore::contains_label(&document, label) {
            debug!("Task '{}' already in {}", label, store.path().display());
            return Ok(());
        }

        let normalized = normalize_label(label);
        let selected = self
            .tasks(LabelStyle::SourcePrefixed)
            .into_iter()
            .find(|task| task.label == normalized)
            .ok_or_else(|| {
                Error::InvariantViolation(format!("no build task matches label '{label}'"))
            })?;

        let mut definition = selected.to_definition();
        definition.label = label.to_string();
        definition.group = Some(TaskGroup::default_build());

        info!("Persisting build task '{}'", label);
        store.append(document, &definition)
    }
}

impl TaskProvider for BuildTaskProvider {
    fn provide_tasks(&mut self) -> Vec<BuildTaskDescriptor> {
        self.tasks(LabelStyle::Plain)
    }

    fn resolve_task(&self, definition: &TaskDefinition) -> Option<BuildTaskDescriptor> {
        if definition.task_type != TASK_TYPE {
            return None;
        }

        let language = self
            .context
            .as_ref()
            .and_then(|context| classify_source(context.file()))
            .unwrap_or(SourceLanguage::Cpp);
        let working_directory = definition
            .options
            .as_ref()
            .and_then(|options| options.cwd.clone())
            .unwrap_or_else(|| "${fileDirname}".to_string());
        let command = quote_command(&definition.command);

        Some(BuildTaskDescriptor {
            label: definition.label.clone(),
            detail: definition
                .detail
                .clone()
                .unwrap_or_else(|| format!("compiler: {command}")),
            command,
            args: definition.args.clone(),
            working_directory,
            language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompilerDescriptor;
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::TempDir;

    fn provider(temp: &TempDir, file: &str) -> BuildTaskProvider {
        let compilers = vec![
            CompilerDescriptor::new("/usr/bin/g++", false),
            CompilerDescriptor::new("/usr/bin/clang++", false),
        ];
        let context = ActiveContext::resolve(temp.path().join(file), temp.path());
        BuildTaskProvider::new(HostPlatform::Unix, compilers).with_context(context)
    }

    #[test]
    fn test_provide_tasks_uses_plain_labels() {
        let temp = TempDir::new().unwrap();
        let mut provider = provider(&temp, "main.cpp");
        let labels: Vec<_> = provider.provide_tasks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["g++ build active file", "clang++ build active file"]);
    }

    #[test]
    fn test_ensure_appends_default_build_task() {
        let temp = TempDir::new().unwrap();
        let mut provider = provider(&temp, "main.cpp");

        provider.ensure_build_task_exists("C/C++: g++ build active file").unwrap();

        let store = provider.task_list().unwrap();
        let written: Value = serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(written["version"], "2.0.0");
        assert_eq!(
            written["tasks"][0],
            json!({
                "type": "cppbuild",
                "label": "C/C++: g++ build active file",
                "command": "/usr/bin/g++",
                "args": ["-g", "${file}", "-o", "${fileDirname}/${fileBasenameNoExtension}"],
                "options": { "cwd": "/usr/bin" },
                "problemMatcher": ["$gcc"],
                "group": { "kind": "build", "isDefault": true },
                "detail": "compiler: /usr/bin/g++"
            })
        );
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let mut provider = provider(&temp, "main.cpp");
        let label = "C/C++: clang++ build active file";

        provider.ensure_build_task_exists(label).unwrap();
        let path = provider.task_list().unwrap().path().to_path_buf();
        let first = fs::read_to_string(&path).unwrap();

        provider.ensure_build_task_exists(label).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
        assert_eq!(provider.json_tasks().unwrap().len(), 1);
    }

    #[test]
    fn test_ensure_keeps_versioned_label() {
        let temp = TempDir::new().unwrap();
        let mut provider = provider(&temp, "main.cpp");

        provider
            .ensure_build_task_exists("C/C++: g++ build active file ver(1)")
            .unwrap();
        let tasks = provider.json_tasks().unwrap();
        assert_eq!(tasks[0].definition.label, "C/C++: g++ build active file ver(1)");
        assert!(tasks[0].is_default);
    }

    #[test]
    fn test_ensure_unknown_label_is_invariant_violation() {
        let temp = TempDir::new().unwrap();
        let mut provider = provider(&temp, "main.cpp");

        let err = provider.ensure_build_task_exists("cl.exe build active file").unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
        assert!(!provider.task_list().unwrap().path().exists());
    }

    #[test]
    fn test_ensure_reports_parse_failure_without_writing() {
        let temp = TempDir::new().unwrap();
        let mut provider = provider(&temp, "main.cpp");
        let path = provider.task_list().unwrap().path().to_path_buf();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ \"tasks\": [ oops ").unwrap();

        let err = provider
            .ensure_build_task_exists("C/C++: g++ build active file")
            .unwrap_err();
        assert!(matches!(err, Error::TaskListParseError));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ \"tasks\": [ oops ");
    }

    #[test]
    fn test_ensure_without_context_fails() {
        let mut provider = BuildTaskProvider::new(HostPlatform::Unix, Vec::new());
        assert!(matches!(
            provider.ensure_build_task_exists("anything"),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_resolve_task_from_definition() {
        let temp = TempDir::new().unwrap();
        let provider = provider(&temp, "main.c");

        let definition: TaskDefinition = serde_json::from_value(json!({
            "type": "cppbuild",
            "label": "custom",
            "command": "/opt/my tools/gcc",
            "args": ["${file}"]
        }))
        .unwrap();
        let task = provider.resolve_task(&definition).unwrap();
        assert_eq!(task.command, "\"/opt/my tools/gcc\"");
        assert_eq!(task.working_directory, "${fileDirname}");
        assert_eq!(task.language, SourceLanguage::C);

        let mut foreign = definition.clone();
        foreign.task_type = "shell".to_string();
        assert!(provider.resolve_task(&foreign).is_none());
    }

    #[test]
    fn test_find_task_falls_back_to_persisted() {
        let temp = TempDir::new().unwrap();
        let mut provider = provider(&temp, "main.cpp");
        let store = provider.task_list().unwrap();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            r#"{ "tasks": [ { "type": "cppbuild", "label": "release", "command": "g++", "args": ["-O2", "${file}"] } ] }"#,
        )
        .unwrap();

        assert_eq!(
            provider.find_task("C/C++: g++ build active file").unwrap().unwrap().command,
            "/usr/bin/g++"
        );
        assert_eq!(provider.find_task("release").unwrap().unwrap().args[0], "-O2");
        assert!(provider.find_task("missing").unwrap().is_none());
    }
}
