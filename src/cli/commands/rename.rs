use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::Invocation;
use crate::cli::utils::report_lines;
use crate::config::Settings;
use crate::models::{PropagationReport, Rewrite};
use crate::propagator::propagate;

/// Replace the configured old module path with the invocation's new one under `root`
pub fn handle_rename(invocation: &Invocation, root: &Path) -> Result<PropagationReport> {
    let settings = Settings::load_from_dir(root).context("Failed to load settings")?;
    let report = rename_module(&settings, invocation, root)?;
    println!("🎉 Replacement complete!");
    Ok(report)
}

/// Shared by `modkit-rename` and the final step of `modkit-init`
pub fn rename_module(
    settings: &Settings,
    invocation: &Invocation,
    root: &Path,
) -> Result<PropagationReport> {
    let rewrite = Rewrite::new(settings.old_module()?, invocation.new_module.clone());

    println!("🔁 Replacing module path...");
    println!("   From: {}", rewrite.from);
    println!("   To:   {}", rewrite.to);

    let options = settings.propagation_options(root);
    let report = propagate(&rewrite, &options)
        .with_context(|| format!("Failed to propagate module path under {}", root.display()))?;

    let module_file = options.module_file.display().to_string();
    for line in report_lines(&report, &module_file, &options.source_suffix) {
        println!("{}", line);
    }

    Ok(report)
}
