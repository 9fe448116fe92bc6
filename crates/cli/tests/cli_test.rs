use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Workspace with a source file and two fake compilers, PATH scanning disabled
fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("main.cpp"), "int main() { return 0; }\n").unwrap();
    fs::write(temp.path().join("main.h"), "#pragma once\n").unwrap();
    fs::create_dir_all(temp.path().join(".cppbuild")).unwrap();
    fs::write(
        temp.path().join(".cppbuild/settings.json"),
        r#"{
    // compilers are fixed so the output does not depend on the host
    "scanPath": false,
    "knownCompilers": [
        { "path": "/usr/bin/g++", "isC": false },
        { "path": "/usr/bin/clang++", "isC": false },
        { "path": "/usr/bin/gcc", "isC": true },
    ]
}"#,
    )
    .unwrap();
    temp
}

fn cppbuild(workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cppbuild").unwrap();
    cmd.current_dir(workspace).env_remove("CPPBUILD_COMPILER_PATH");
    cmd
}

#[test]
fn test_list_shows_one_task_per_cpp_compiler() {
    let temp = workspace();
    cppbuild(temp.path())
        .args(["list", "main.cpp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. g++ build active file"))
        .stdout(predicate::str::contains("2. clang++ build active file"))
        .stdout(predicate::str::contains("gcc build active file").not());
}

#[test]
fn test_list_prefixed_json() {
    let temp = workspace();
    let output = cppbuild(temp.path())
        .args(["list", "main.cpp", "--json", "--prefixed"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let tasks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 2);
    assert_eq!(tasks[0]["label"], "C/C++: g++ build active file");
    assert_eq!(tasks[0]["args"][0], "-g");
    assert_eq!(tasks[0]["working_directory"], "/usr/bin");
}

#[test]
fn test_list_header_has_no_tasks() {
    let temp = workspace();
    cppbuild(temp.path())
        .args(["list", "main.h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No build tasks"));
}

#[test]
fn test_list_rejects_file_outside_workspace() {
    let temp = workspace();
    let other = TempDir::new().unwrap();
    fs::write(other.path().join("a.cpp"), "").unwrap();

    cppbuild(temp.path())
        .args(["list"])
        .arg(other.path().join("a.cpp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not inside the workspace"));
}

#[test]
fn test_ensure_then_tasks() {
    let temp = workspace();
    cppbuild(temp.path())
        .args(["ensure", "main.cpp", "C/C++: clang++ build active file"])
        .assert()
        .success();
    cppbuild(temp.path())
        .args(["ensure", "main.cpp", "C/C++: clang++ build active file"])
        .assert()
        .success();

    let written = fs::read_to_string(temp.path().join(".cppbuild/tasks.json")).unwrap();
    assert_eq!(written.matches("clang++ build active file").count(), 1);

    cppbuild(temp.path())
        .arg("tasks")
        .assert()
        .success()
        .stdout(predicate::str::contains("C/C++: clang++ build active file ⭐ (default)"));
}

#[test]
fn test_ensure_unknown_label_fails() {
    let temp = workspace();
    cppbuild(temp.path())
        .args(["ensure", "main.cpp", "C/C++: cl.exe build active file"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no build task matches label"));
    assert!(!temp.path().join(".cppbuild/tasks.json").exists());
}

#[test]
fn test_ensure_reports_unparseable_task_list() {
    let temp = workspace();
    let tasks_path = temp.path().join(".cppbuild/tasks.json");
    fs::write(&tasks_path, "{ not json").unwrap();

    cppbuild(temp.path())
        .args(["ensure", "main.cpp", "C/C++: g++ build active file"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to parse json file, possibly due to comments or trailing commas.",
        ));
    assert_eq!(fs::read_to_string(&tasks_path).unwrap(), "{ not json");
}

#[test]
fn test_run_dry_run_prints_resolved_command() {
    let temp = workspace();
    let root = temp.path().canonicalize().unwrap();

    cppbuild(temp.path())
        .args(["run", "main.cpp", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "/usr/bin/g++ -g {} -o {}",
            root.join("main.cpp").display(),
            root.join("main").display()
        )))
        .stdout(predicate::str::contains("Working directory: /usr/bin"));
}

#[test]
fn test_run_unknown_label_fails() {
    let temp = workspace();
    cppbuild(temp.path())
        .args(["run", "main.cpp", "--label", "nope", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No build task labelled 'nope'"));
}

#[cfg(unix)]
#[test]
fn test_run_reports_failed_build() {
    let temp = workspace();
    fs::write(
        temp.path().join(".cppbuild/tasks.json"),
        r#"{
    "version": "2.0.0",
    "tasks": [
        {
            "type": "cppbuild",
            "label": "broken",
            "command": "sh",
            "args": ["-c", "echo oops >&2; exit 3", "${file}"],
            "options": { "cwd": "${workspaceFolder}" },
            "group": { "kind": "build", "isDefault": true }
        }
    ]
}"#,
    )
    .unwrap();

    cppbuild(temp.path())
        .args(["run", "main.cpp"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Starting build..."))
        .stdout(predicate::str::contains("oops"))
        .stdout(predicate::str::contains("Build finished with error(s)."));
}

#[test]
fn test_init_writes_settings_once() {
    let temp = TempDir::new().unwrap();
    cppbuild(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created settings"));
    assert!(temp.path().join(".cppbuild/settings.json").exists());

    cppbuild(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to overwrite"));
}
