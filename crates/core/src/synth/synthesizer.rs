use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::command::quote_command;
use crate::types::{
    ActiveContext, BuildTaskDescriptor, CompilerDescriptor, HostPlatform, LabelStyle, MSVC_COMPILER,
    SourceLanguage, UserCompiler,
};
use crate::utils::classify_source;
use crate::utils::path::{basename, dirname};

pub const LABEL_SUFFIX: &str = "build active file";
pub const SOURCE_PREFIX: &str = "C/C++: ";

/// Label for a task built with the compiler named `compiler_name`
pub fn task_label(compiler_name: &str, style: LabelStyle) -> String {
    let prefix = match style {
        LabelStyle::SourcePrefixed => SOURCE_PREFIX,
        LabelStyle::Plain => "",
    };
    format!("{prefix}{compiler_name} {LABEL_SUFFIX}")
}

/// Drop a trailing `ver(...)` annotation from a label
pub fn normalize_label(label: &str) -> &str {
    match label.find("ver(") {
        Some(idx) => label[..idx].trim(),
        None => label,
    }
}

/// Builds task descriptors and remembers the ones it has built.
///
/// A descriptor with the same label, command, args and language as a cached
/// one is returned from the cache, so synthesizing twice against an
/// unchanged environment yields identical tasks.
#[derive(Debug, Default)]
pub struct TaskSynthesizer {
    host: HostPlatform,
    cache: HashMap<String, BuildTaskDescriptor>,
}

impl TaskSynthesizer {
    pub fn new(host: HostPlatform) -> Self {
        Self {
            host,
            cache: HashMap::new(),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn synthesize(
        &mut self,
        context: Option<&ActiveContext>,
        known_compilers: &[CompilerDescriptor],
        user_compiler: Option<&UserCompiler>,
        style: LabelStyle,
    ) -> Vec<BuildTaskDescriptor> {
        let Some(context) = context else {
            debug!("No active file, nothing to synthesize");
            return Vec::new();
        };

        let Some(language) = classify_source(context.file()) else {
            return Vec::new();
        };

        let user_compiler = user_compiler.and_then(|user| user.validated(self.host));
        let compilers = self.filter_compilers(language, known_compilers, user_compiler.as_ref());

        if compilers.is_empty() && user_compiler.is_none() {
            warn!(
                event = "no_compiler_found",
                "No compiler found for {}",
                context.file().display()
            );
            return Vec::new();
        }

        let mut tasks = Vec::with_capacity(compilers.len() + 1);
        for compiler in compilers {
            tasks.push(self.build_task(&compiler.path, &[], language, style));
        }
        if let Some(user) = user_compiler {
            tasks.push(self.build_task(&user.compiler_path, &user.additional_args, language, style));
        }

        debug!("Synthesized {} task(s) for {}", tasks.len(), context.file().display());
        tasks
    }

    /// Known compilers usable for `language` on this host.
    ///
    /// Drops compilers sharing the override's basename, POSIX paths on a
    /// Windows host, every `cl.exe` after the first (none when the override
    /// is `cl.exe`), and repeated basenames so labels stay unique.
    pub fn filter_compilers<'a>(
        &self,
        language: SourceLanguage,
        known_compilers: &'a [CompilerDescriptor],
        user_compiler: Option<&UserCompiler>,
    ) -> Vec<&'a CompilerDescriptor> {
        let mut seen = HashSet::new();
        if let Some(user) = user_compiler {
            seen.insert(user.compiler_name.as_str());
        }

        let mut filtered = Vec::new();
        for info in known_compilers {
            let matches_language =
                (language.includes_cpp() && !info.is_c) || (language.includes_c() && info.is_c);
            if !matches_language {
                continue;
            }
            if self.host.is_windows() && info.path.starts_with('/') {
                debug!("Skipping {} on a Windows host", info.path);
                continue;
            }
            if !seen.insert(info.display_name()) {
                continue;
            }
            filtered.push(info);
        }

        filtered
    }

    fn build_task(
        &mut self,
        compiler_path: &str,
        extra_args: &[String],
        language: SourceLanguage,
        style: LabelStyle,
    ) -> BuildTaskDescriptor {
        let compiler_name = basename(compiler_path);
        let output = format!(
            "${{fileDirname}}{}${{fileBasenameNoExtension}}",
            self.host.separator()
        );

        let (command, mut args, working_directory) = if compiler_name == MSVC_COMPILER {
            (
                compiler_name.to_string(),
                vec![
                    "/Zi".to_string(),
                    "/EHsc".to_string(),
                    "/Fe:".to_string(),
                    format!("{output}.exe"),
                    "${file}".to_string(),
                ],
                "${workspaceFolder}".to_string(),
            )
        } else {
            (
                compiler_path.to_string(),
                vec![
                    "-g".to_string(),
                    "${file}".to_string(),
                    "-o".to_string(),
                    format!("{output}{}", self.host.exe_suffix()),
                ],
                dirname(compiler_path).to_string(),
            )
        };
        args.extend(extra_args.iter().cloned());

        let command = quote_command(&command);
        let label = task_label(compiler_name, style);

        if let Some(cached) = self.cache.get(&label) {
            if cached.command == command && cached.args == args && cached.language == language {
                return cached.clone();
            }
        }

        let task = BuildTaskDescriptor {
            label,
            detail: format!("compiler: {command}"),
            command,
            args,
            working_directory,
            language,
        };
        self.cache.insert(task.label.clone(), task.clone());
        task
    }
}
