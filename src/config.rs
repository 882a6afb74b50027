use crate::models::{DEFAULT_OLD_MODULE, ModulePath};
use crate::propagator::{MODULE_FILE, PropagationOptions, SOURCE_SUFFIX};
use crate::toolchain::Toolchain;
use crate::{ModkitError, Result};
use config::{Config as ConfigBuilder, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "modkit.toml";
pub const ENV_PREFIX: &str = "MODKIT";

/// Tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Module path searched for in the tree
    pub old_module: String,
    pub module_file: PathBuf,
    pub source_suffix: String,
    /// Binary checked before scaffolding
    pub toolchain: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            old_module: DEFAULT_OLD_MODULE.to_string(),
            module_file: PathBuf::from(MODULE_FILE),
            source_suffix: SOURCE_SUFFIX.to_string(),
            toolchain: "go".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from multiple sources with precedence:
    /// 1. Environment variables (MODKIT_*)
    /// 2. modkit.toml file (if exists)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&std::env::current_dir()?)
    }

    /// Load settings from a specific directory, reading the process environment
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load_with_env(dir, None)
    }

    /// Load settings from a specific directory with an explicit environment map.
    /// `None` reads the process environment.
    pub fn load_with_env(dir: &Path, env: Option<Map<String, String>>) -> Result<Self> {
        let mut builder = ConfigBuilder::builder();

        let settings_file = dir.join(SETTINGS_FILE);
        if settings_file.exists() {
            builder = builder.add_source(File::from(settings_file));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).source(env));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.old_module.is_empty() {
            return Err(ModkitError::Configuration("old_module must not be empty".to_string()));
        }
        if self.module_file.as_os_str().is_empty() {
            return Err(ModkitError::Configuration("module_file must not be empty".to_string()));
        }
        if self.source_suffix.is_empty() {
            return Err(ModkitError::Configuration("source_suffix must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn old_module(&self) -> Result<ModulePath> {
        ModulePath::new(self.old_module.clone())
    }

    pub fn propagation_options(&self, root: impl Into<PathBuf>) -> PropagationOptions {
        PropagationOptions::new(root)
            .with_module_file(&self.module_file)
            .with_source_suffix(&self.source_suffix)
    }

    pub fn toolchain(&self) -> Toolchain {
        Toolchain::new(&self.toolchain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.old_module, "github.com/YXRRXY/autoAuth");
        assert_eq!(settings.module_file, PathBuf::from("go.mod"));
        assert_eq!(settings.source_suffix, ".go");
        assert_eq!(settings.toolchain, "go");
    }

    #[test]
    fn test_load_no_settings_file() -> Result<()> {
        let temp_dir = TempDir::new()?;

        let settings = Settings::load_with_env(temp_dir.path(), env(&[]))?;

        assert_eq!(settings, Settings::default());
        Ok(())
    }

    #[test]
    fn test_load_from_toml_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write(
            temp_dir.path().join(SETTINGS_FILE),
            r#"
old_module = "gitlab.com/acme/starter"
toolchain = "go1.22"
"#,
        )?;

        let settings = Settings::load_with_env(temp_dir.path(), env(&[]))?;

        assert_eq!(settings.old_module, "gitlab.com/acme/starter");
        assert_eq!(settings.toolchain, "go1.22");
        // Untouched keys keep defaults
        assert_eq!(settings.source_suffix, ".go");
        Ok(())
    }

    #[test]
    fn test_precedence_env_over_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write(
            temp_dir.path().join(SETTINGS_FILE),
            "old_module = \"file.example/mod\"\nsource_suffix = \".gotmpl\"\n",
        )?;

        let settings = Settings::load_with_env(
            temp_dir.path(),
            env(&[("MODKIT_OLD_MODULE", "env.example/mod")]),
        )?;

        assert_eq!(settings.old_module, "env.example/mod");
        assert_eq!(settings.source_suffix, ".gotmpl");
        Ok(())
    }

    #[test]
    fn test_empty_old_module_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        write(temp_dir.path().join(SETTINGS_FILE), "old_module = \"\"\n")?;

        let result = Settings::load_with_env(temp_dir.path(), env(&[]));

        assert!(matches!(result, Err(ModkitError::Configuration(_))));
        Ok(())
    }

    #[test]
    fn test_empty_module_file_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;

        let result =
            Settings::load_with_env(temp_dir.path(), env(&[("MODKIT_MODULE_FILE", "")]));

        assert!(matches!(
            result,
            Err(ModkitError::Configuration(msg)) if msg.contains("module_file")
        ));
        Ok(())
    }

    #[test]
    fn test_propagation_options_from_settings() {
        let settings = Settings {
            module_file: PathBuf::from("tools.mod"),
            source_suffix: ".gotmpl".to_string(),
            ..Settings::default()
        };

        let options = settings.propagation_options("/tmp/project");

        assert_eq!(options.root, PathBuf::from("/tmp/project"));
        assert_eq!(options.module_file, PathBuf::from("tools.mod"));
        assert_eq!(options.source_suffix, ".gotmpl");
    }
}
