use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{ensure_command, init_command, list_command, run_command, tasks_command};
use crate::utils::workspace_root;

#[derive(Parser, Debug)]
#[command(name = "cppbuild")]
#[command(version, about = "Build the active C or C++ file", long_about = None)]
#[command(
    after_help = "ENVIRONMENT:\n    RUST_LOG=debug                   Enable debug logging\n    CPPBUILD_COMPILER_PATH=<path>    Offer this compiler in addition to discovered ones"
)]
pub struct Cli {
    /// Workspace folder (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the build tasks available for a source file
    #[command(visible_alias = "l")]
    List {
        /// Source file inside the workspace
        file: PathBuf,

        /// Print the tasks as JSON
        #[arg(long)]
        json: bool,

        /// Use `C/C++: ` prefixed labels, as written to the task list
        #[arg(short, long)]
        prefixed: bool,
    },
    /// Build a source file
    #[command(visible_alias = "r")]
    Run {
        /// Source file inside the workspace
        file: PathBuf,

        /// Label of the task to run (defaults to the default task, then the first one)
        #[arg(short, long)]
        label: Option<String>,

        /// Print the resolved command without executing it
        #[arg(short, long)]
        dry_run: bool,

        /// Rebuild whenever `.cppbuild/rebuild` changes
        #[arg(long)]
        watch: bool,
    },
    /// Add a build task to the task list unless it is already there
    Ensure {
        /// Source file the task is synthesized for
        file: PathBuf,

        /// Task label, e.g. "C/C++: g++ build active file"
        label: String,
    },
    /// Show the build tasks stored in the task list
    Tasks,
    /// Create `.cppbuild/settings.json`
    Init {
        /// Overwrite existing settings
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Execute the selected command against the workspace
    pub fn execute(self) -> Result<()> {
        let workspace = workspace_root(self.workspace.as_deref())?;

        match self.command {
            Commands::List {
                file,
                json,
                prefixed,
            } => list_command(&workspace, &file, json, prefixed),
            Commands::Run {
                file,
                label,
                dry_run,
                watch,
            } => run_command(&workspace, &file, label.as_deref(), dry_run, watch),
            Commands::Ensure { file, label } => ensure_command(&workspace, &file, &label),
            Commands::Tasks => tasks_command(&workspace),
            Commands::Init { force } => init_command(&workspace, force),
        }
    }
}
