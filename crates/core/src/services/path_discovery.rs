//! Compiler discovery by scanning search directories

use regex::Regex;
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::{debug, warn};

use crate::interfaces::CompilerDiscovery;
use crate::types::CompilerDescriptor;

/// Matches compiler drivers, optionally with a target prefix
/// (`x86_64-linux-gnu-gcc`), a version suffix (`clang++-17`) or `.exe`.
static COMPILER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[\w.]+-)*?(gcc|g\+\+|cc|c\+\+|clang|clang\+\+|cl)(?:-\d+(?:\.\d+)*)?(?:\.exe)?$")
        .expect("compiler name pattern is valid")
});

/// Language flags for a compiler file name; `cl` drives both languages
pub fn compiler_kinds(file_name: &str) -> &'static [bool] {
    let Some(caps) = COMPILER_NAME.captures(file_name) else {
        return &[];
    };
    match &caps[1] {
        "gcc" | "cc" | "clang" => &[true],
        "g++" | "c++" | "clang++" => &[false],
        "cl" if file_name.ends_with(".exe") => &[false, true],
        _ => &[],
    }
}

/// Finds compilers in a list of directories, by default those on `PATH`
#[derive(Debug, Clone, Default)]
pub struct PathScanDiscovery {
    search_dirs: Vec<PathBuf>,
}

impl PathScanDiscovery {
    pub fn new(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }

    pub fn from_env() -> Self {
        let search_dirs = env::var_os("PATH")
            .map(|path| env::split_paths(&path).collect())
            .unwrap_or_default();
        Self::new(search_dirs)
    }
}

impl CompilerDiscovery for PathScanDiscovery {
    fn known_compilers(&self) -> Vec<CompilerDescriptor> {
        let search_path = match env::join_paths(&self.search_dirs) {
            Ok(search_path) => search_path,
            Err(err) => {
                warn!("Unusable compiler search path: {}", err);
                return Vec::new();
            }
        };

        // Executables on the search path whose file name looks like a compiler
        let matches = match which::which_re_in(&*COMPILER_NAME, Some(search_path)) {
            Ok(matches) => matches,
            Err(err) => {
                debug!("Compiler lookup failed: {}", err);
                return Vec::new();
            }
        };

        let mut found = Vec::new();
        let mut seen = HashSet::new();
        for path in matches {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            for &is_c in compiler_kinds(name) {
                let path = path.display().to_string();
                if seen.insert((path.clone(), is_c)) {
                    found.push(CompilerDescriptor::new(path, is_c));
                }
            }
        }

        debug!("Discovered {} compiler(s)", found.len());
        found
    }
}

/// Chains several discovery sources, dropping repeated entries
#[derive(Default)]
pub struct CombinedDiscovery {
    sources: Vec<Box<dyn CompilerDiscovery>>,
}

impl CombinedDiscovery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl CompilerDiscovery + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl CompilerDiscovery for CombinedDiscovery {
    fn known_compilers(&self) -> Vec<CompilerDescriptor> {
        let mut compilers: Vec<CompilerDescriptor> = Vec::new();
        for source in &self.sources {
            for compiler in source.known_compilers() {
                if !compilers.contains(&compiler) {
                    compilers.push(compiler);
                }
            }
        }
        compilers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_compiler_kinds() {
        assert_eq!(compiler_kinds("gcc"), &[true]);
        assert_eq!(compiler_kinds("g++"), &[false]);
        assert_eq!(compiler_kinds("clang++-17"), &[false]);
        assert_eq!(compiler_kinds("x86_64-linux-gnu-gcc-13"), &[true]);
        assert_eq!(compiler_kinds("gcc.exe"), &[true]);
        assert_eq!(compiler_kinds("cl.exe"), &[false, true]);

        for name in ["gcc-ar", "clang-format", "c++filt", "ccache", "cl", "ld"] {
            assert!(compiler_kinds(name).is_empty(), "{name}");
        }
    }

    #[cfg(unix)]
    fn write_executable(path: &std::path::Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::write(path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_scans_search_dirs() {
        let temp = TempDir::new().unwrap();
        for name in ["gcc", "g++", "clang-format", "ls"] {
            write_executable(&temp.path().join(name));
        }
        // Neither directories nor non-executable files count
        fs::create_dir(temp.path().join("cc")).unwrap();
        fs::write(temp.path().join("clang"), "").unwrap();

        let discovery = PathScanDiscovery::new(vec![temp.path().to_path_buf(), temp.path().to_path_buf()]);
        let mut compilers = discovery.known_compilers();
        compilers.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(compilers.len(), 2);
        assert_eq!(compilers[0].display_name(), "g++");
        assert!(!compilers[0].is_c);
        assert_eq!(compilers[1].display_name(), "gcc");
        assert!(compilers[1].is_c);
    }

    #[cfg(unix)]
    #[test]
    fn test_finds_prefixed_and_versioned_drivers() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_executable(&first.path().join("x86_64-linux-gnu-g++"));
        write_executable(&second.path().join("gcc-13"));
        write_executable(&second.path().join("gcc-ar"));

        let discovery = PathScanDiscovery::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        let names: Vec<_> = discovery
            .known_compilers()
            .iter()
            .map(|c| (c.display_name().to_string(), c.is_c))
            .collect();
        assert_eq!(
            names,
            vec![("x86_64-linux-gnu-g++".to_string(), false), ("gcc-13".to_string(), true)]
        );
    }

    #[test]
    fn test_empty_search_path_finds_nothing() {
        assert!(PathScanDiscovery::new(Vec::new()).known_compilers().is_empty());
    }

    #[test]
    fn test_combined_discovery_keeps_order_and_dedupes() {
        let discovery = CombinedDiscovery::new()
            .with_source(vec![CompilerDescriptor::new("/opt/bin/g++", false)])
            .with_source(vec![
                CompilerDescriptor::new("/usr/bin/g++", false),
                CompilerDescriptor::new("/opt/bin/g++", false),
            ]);

        let paths: Vec<_> = discovery.known_compilers().into_iter().map(|c| c.path).collect();
        assert_eq!(paths, vec!["/opt/bin/g++", "/usr/bin/g++"]);
    }
}
