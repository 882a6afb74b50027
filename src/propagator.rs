use crate::models::{FileOutcome, ModuleFileOutcome, PropagationReport, Rewrite};
use crate::replacer::replace_in_file;
use crate::{ModkitError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

pub const MODULE_FILE: &str = "go.mod";
pub const SOURCE_SUFFIX: &str = ".go";

/// Where to look and what to match during propagation
#[derive(Debug, Clone)]
pub struct PropagationOptions {
    pub root: PathBuf,
    pub module_file: PathBuf,
    pub source_suffix: String,
}

impl PropagationOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            module_file: PathBuf::from(MODULE_FILE),
            source_suffix: SOURCE_SUFFIX.to_string(),
        }
    }

    pub fn with_module_file(mut self, module_file: impl Into<PathBuf>) -> Self {
        self.module_file = module_file.into();
        self
    }

    pub fn with_source_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.source_suffix = suffix.into();
        self
    }

    fn module_file_path(&self) -> PathBuf {
        self.root.join(&self.module_file)
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.is_file()
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.ends_with(&self.source_suffix))
                .unwrap_or(false)
    }
}

/// Rewrite the module path in the module file and every source file under the root
///
/// Failures on individual files are logged and recorded in the report; they never
/// stop the walk. Only an unusable root directory is an error.
pub fn propagate(rewrite: &Rewrite, options: &PropagationOptions) -> Result<PropagationReport> {
    if !options.root.is_dir() {
        return Err(ModkitError::Configuration(format!(
            "{} is not a directory",
            options.root.display()
        )));
    }

    let module_file = rewrite_module_file(rewrite, options);
    let sources = rewrite_sources(rewrite, options);

    let report = PropagationReport {
        module_file,
        sources,
    };
    info!(
        updated = report.updated_count(),
        failed = report.failures().count(),
        "propagation finished"
    );
    Ok(report)
}

fn rewrite_module_file(rewrite: &Rewrite, options: &PropagationOptions) -> ModuleFileOutcome {
    let path = options.module_file_path();
    if !path.exists() {
        warn!(path = %path.display(), "module file not found, skipping");
        return ModuleFileOutcome::Missing;
    }

    match replace_in_file(&path, rewrite.from.as_str(), rewrite.to.as_str()) {
        Ok(replacements) => ModuleFileOutcome::Updated { replacements },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to rewrite module file");
            ModuleFileOutcome::Failed { reason: e.to_string() }
        }
    }
}

fn rewrite_sources(rewrite: &Rewrite, options: &PropagationOptions) -> Vec<FileOutcome> {
    let module_file = options.module_file_path();
    let mut outcomes = Vec::new();

    for entry in WalkDir::new(&options.root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| options.root.clone());
                warn!(path = %path.display(), error = %e, "failed to read directory entry");
                outcomes.push(FileOutcome::Failed {
                    path,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        if path == module_file || !options.is_source_file(path) {
            continue;
        }

        let outcome = match replace_in_file(path, rewrite.from.as_str(), rewrite.to.as_str()) {
            Ok(replacements) => FileOutcome::Updated {
                path: path.to_path_buf(),
                replacements,
            },
            Err(e) => {
                if e.is_decoding() {
                    warn!(path = %path.display(), "not valid UTF-8, skipping");
                } else {
                    warn!(path = %path.display(), error = %e, "failed to rewrite source file");
                }
                FileOutcome::Failed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}
