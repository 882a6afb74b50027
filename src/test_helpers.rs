//! Test helpers for creating hermetic Go project trees
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::TestProject;
//!
//! let project = TestProject::with_go_module("github.com/YXRRXY/autoAuth").unwrap();
//! let imports = ["github.com/YXRRXY/autoAuth/pkg/utils"];
//! project.add_file("cmd/api/main.go", &go_source("main", &imports)).unwrap();
//! // Now test your functionality with project.root()
//! ```

use crate::{ModkitError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Go project builder rooted in a temporary directory
pub struct TestProject {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl TestProject {
    /// Create a new empty test project in a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new().map_err(|e| {
            ModkitError::Configuration(format!("Failed to create temp directory: {}", e))
        })?;
        let project_root = temp_dir.path().to_path_buf();

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with a `go.mod` declaring `module`
    pub fn with_go_module(module: &str) -> Result<Self> {
        let project = Self::new()?;
        project.add_file("go.mod", &go_mod(module))?;
        Ok(project)
    }

    /// Create a test project with some of the backend directories already present
    pub fn with_go_layout(dirs: &[&str]) -> Result<Self> {
        let project = Self::new()?;
        for dir in dirs {
            fs::create_dir_all(project.path(dir))?;
        }
        Ok(project)
    }

    /// Write a file relative to the project root, creating parent directories
    pub fn add_file(&self, relative_path: &str, content: &str) -> Result<PathBuf> {
        let file_path = self.project_root.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, content)?;

        Ok(file_path)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.path(relative_path)).unwrap_or_default()
    }

    pub fn root(&self) -> &Path {
        &self.project_root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.join(relative)
    }
}

pub fn go_mod(module: &str) -> String {
    format!("module {}\n\ngo 1.21\n", module)
}

/// Go source file in `package` importing each path in `imports`
pub fn go_source(package: &str, imports: &[&str]) -> String {
    let mut content = format!("package {}\n\nimport (\n", package);
    for import in imports {
        content.push_str(&format!("\t\"{}\"\n", import));
    }
    content.push_str(")\n");
    content
}
