//! Go backend project skeleton
//!
//! Creates the fixed directory layout of the backend template and drops a default
//! `config/config.yaml` with placeholder values. Existing directories and an existing
//! config file are left exactly as they are.

use crate::Result;
use crate::models::{ConfigFileOutcome, ScaffoldReport};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directories of the backend layout, relative to the project root
pub const PROJECT_DIRS: &[&str] = &[
    "cmd/api",
    "config",
    "internal/api/handlers",
    "internal/config",
    "internal/dal/model",
    "internal/dal/query",
    "internal/service",
    "pkg/utils",
];

pub const CONFIG_PATH: &str = "config/config.yaml";

/// Default application configuration written for a fresh project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
    pub jwt: JwtSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    pub port: u16,
    pub mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub dbname: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JwtSection {
    pub secret: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            server: ServerSection {
                port: 8080,
                mode: "debug".to_string(),
            },
            // password and secret are left blank for the operator to fill in
            database: DatabaseSection {
                host: "localhost".to_string(),
                port: 3306,
                username: "root".to_string(),
                password: String::new(),
                dbname: "auto_auth".to_string(),
            },
            jwt: JwtSection {
                secret: String::new(),
            },
        }
    }
}

/// Create the project directories, then the default config file if absent
pub fn scaffold_project(root: &Path) -> Result<ScaffoldReport> {
    let (created_dirs, existing_dirs) = create_project_dirs(root)?;
    let config_file =
        write_default_config(&root.join(CONFIG_PATH), &ScaffoldConfig::default())?;

    Ok(ScaffoldReport {
        created_dirs,
        existing_dirs,
        config_file,
    })
}

fn create_project_dirs(root: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut created = Vec::new();
    let mut existing = Vec::new();

    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        if path.is_dir() {
            existing.push(PathBuf::from(dir));
            continue;
        }
        fs::create_dir_all(&path)?;
        debug!(path = %path.display(), "created directory");
        created.push(PathBuf::from(dir));
    }

    Ok((created, existing))
}

/// Write `config` as YAML to `path` unless a file is already there
pub fn write_default_config(path: &Path, config: &ScaffoldConfig) -> Result<ConfigFileOutcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let yaml = serde_yaml::to_string(config)?;
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            info!(path = %path.display(), "config file exists, leaving it untouched");
            return Ok(ConfigFileOutcome::KeptExisting);
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(yaml.as_bytes())?;

    info!(path = %path.display(), "wrote default config");
    Ok(ConfigFileOutcome::Written)
}
