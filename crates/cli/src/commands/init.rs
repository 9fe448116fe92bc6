use anyhow::{Context, Result};
use cppbuild_core::Settings;
use std::path::Path;
use tracing::info;

pub fn init_command(workspace: &Path, force: bool) -> Result<()> {
    let settings_path = Settings::settings_path(workspace);

    if settings_path.exists() && !force {
        println!("❌ Settings already exist at: {}", settings_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    info!("Writing default settings to {:?}", settings_path);
    Settings::default()
        .save_to_file(&settings_path)
        .with_context(|| format!("Failed to write settings to {}", settings_path.display()))?;

    println!("✅ Created settings: {}", settings_path.display());
    println!("\n📌 Set \"compilerPath\" to add your own compiler,");
    println!("   or \"knownCompilers\" to list compilers that are not on PATH.");
    Ok(())
}
