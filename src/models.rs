use std::fmt;
use std::path::PathBuf;

/// The hardcoded module path that fresh checkouts of the backend template carry.
pub const DEFAULT_OLD_MODULE: &str = "github.com/YXRRXY/autoAuth";

/// A Go module path, treated as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath(String);

impl ModulePath {
    pub fn new(path: impl Into<String>) -> crate::Result<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(crate::ModkitError::InvalidModulePath(
                "module path cannot be empty".to_string(),
            ));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An old/new module path pair to propagate through a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub from: ModulePath,
    pub to: ModulePath,
}

impl Rewrite {
    pub fn new(from: ModulePath, to: ModulePath) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Updated { path: PathBuf, replacements: usize },
    Failed { path: PathBuf, reason: String },
}

impl FileOutcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Updated { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, FileOutcome::Updated { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModuleFileOutcome {
    Updated { replacements: usize },
    Missing,
    Failed { reason: String },
}

/// Everything a propagation run did, in traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationReport {
    pub module_file: ModuleFileOutcome,
    pub sources: Vec<FileOutcome>,
}

impl PropagationReport {
    /// Number of source files rewritten successfully. The module file is not counted.
    pub fn updated_count(&self) -> usize {
        self.sources.iter().filter(|o| o.is_updated()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.sources.iter().filter(|o| !o.is_updated())
    }

    pub fn total_replacements(&self) -> usize {
        let module = match self.module_file {
            ModuleFileOutcome::Updated { replacements } => replacements,
            _ => 0,
        };
        module
            + self
                .sources
                .iter()
                .map(|o| match o {
                    FileOutcome::Updated { replacements, .. } => *replacements,
                    FileOutcome::Failed { .. } => 0,
                })
                .sum::<usize>()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigFileOutcome {
    Written,
    KeptExisting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldReport {
    pub created_dirs: Vec<PathBuf>,
    pub existing_dirs: Vec<PathBuf>,
    pub config_file: ConfigFileOutcome,
}
