use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::cli::Invocation;
use crate::cli::commands::rename::rename_module;
use crate::config::Settings;
use crate::models::{ConfigFileOutcome, PropagationReport, ScaffoldReport};
use crate::scaffold::{CONFIG_PATH, scaffold_project};
use crate::toolchain::ToolchainStatus;

/// Check the toolchain, scaffold the project, then rename the module
///
/// Nothing on disk is touched unless the toolchain check succeeds.
pub fn handle_init(
    invocation: &Invocation,
    root: &Path,
) -> Result<(ScaffoldReport, PropagationReport)> {
    let settings = Settings::load_from_dir(root).context("Failed to load settings")?;

    println!("🎯 Initializing Go project '{}'", invocation.new_module);

    check_toolchain(&settings)?;

    let scaffold = scaffold_project(root)
        .with_context(|| format!("Failed to scaffold project under {}", root.display()))?;
    print_scaffold(&scaffold);

    let report = rename_module(&settings, invocation, root)?;

    print_next_steps(&settings, root);
    Ok((scaffold, report))
}

fn check_toolchain(settings: &Settings) -> Result<()> {
    let toolchain = settings.toolchain();
    match toolchain.check()? {
        ToolchainStatus::Available { version } => {
            println!("✅ Go toolchain detected: {}", version);
            Ok(())
        }
        ToolchainStatus::Failed { detail } => {
            println!("❌ Go toolchain check failed: {}", detail);
            bail!("toolchain `{}` is not usable", toolchain.binary)
        }
        ToolchainStatus::Missing => {
            println!("❌ Go toolchain not found. Install Go from https://go.dev/dl/");
            bail!("toolchain `{}` not found", toolchain.binary)
        }
    }
}

fn print_scaffold(report: &ScaffoldReport) {
    for dir in &report.created_dirs {
        println!("📁 Created {}", dir.display());
    }
    if !report.existing_dirs.is_empty() {
        println!("📁 {} directories already present", report.existing_dirs.len());
    }
    match report.config_file {
        ConfigFileOutcome::Written => println!("✅ Wrote default {}", CONFIG_PATH),
        ConfigFileOutcome::KeptExisting => {
            println!("ℹ️  {} already exists, left unchanged", CONFIG_PATH)
        }
    }
}

fn print_next_steps(settings: &Settings, root: &Path) {
    println!("\n🎉 Project initialized successfully!");
    println!("\n🚀 Next steps:");
    println!("   1. Fill in database.password and jwt.secret in {}", CONFIG_PATH);
    if root.join(&settings.module_file).exists() {
        println!("   2. Run 'go mod tidy' to sync dependencies");
    } else {
        println!("   2. Run 'go mod init <module>' then 'go mod tidy'");
    }
    println!("   3. Run 'go run ./cmd/api' to start the server");
}
