use crate::models::{FileOutcome, ModuleFileOutcome, PropagationReport};

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        format!("1 {}", word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Human-readable lines for a propagation report
pub fn report_lines(report: &PropagationReport, module_file: &str, suffix: &str) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.module_file {
        ModuleFileOutcome::Updated { .. } => lines.push(format!("✅ Updated {}", module_file)),
        ModuleFileOutcome::Missing => {
            lines.push(format!("⚠️  Warning: {} not found", module_file))
        }
        ModuleFileOutcome::Failed { reason } => {
            lines.push(format!("❌ Could not update {}: {}", module_file, reason))
        }
    }

    for failure in report.failures() {
        if let FileOutcome::Failed { path, reason } = failure {
            lines.push(format!("❌ Error processing {}: {}", path.display(), reason));
        }
    }

    lines.push(format!(
        "✅ Updated {}",
        pluralize(&format!("{} file", suffix), report.updated_count())
    ));
    lines.push(format!(
        "   {} replaced",
        pluralize("occurrence", report.total_replacements())
    ));
    lines
}
