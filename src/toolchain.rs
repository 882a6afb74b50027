use crate::{ModkitError, Result};
use regex::Regex;
use std::io::ErrorKind;
use std::process::Command;
use std::sync::LazyLock;
use tracing::debug;

static GO_RELEASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bgo\d+(?:\.\d+)*(?:(?:rc|beta)\d+)?").expect("valid release pattern")
});

#[derive(Debug, Clone, PartialEq)]
pub enum ToolchainStatus {
    /// Ran and exited zero
    Available { version: String },
    /// Ran but exited non-zero
    Failed { detail: String },
    /// Not on PATH
    Missing,
}

impl ToolchainStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, ToolchainStatus::Available { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Toolchain {
    pub binary: String,
    pub version_arg: String,
}

impl Toolchain {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            version_arg: "version".to_string(),
        }
    }

    /// Run `<binary> version` and classify the result
    pub fn check(&self) -> Result<ToolchainStatus> {
        debug!(binary = %self.binary, arg = %self.version_arg, "checking toolchain");

        let output = match Command::new(&self.binary).arg(&self.version_arg).output() {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ToolchainStatus::Missing),
            Err(e) => {
                return Err(ModkitError::Toolchain(format!(
                    "failed to run {} {}: {}",
                    self.binary, self.version_arg, e
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = match stderr.trim() {
                "" => format!("{} exited with {}", self.binary, output.status),
                msg => format!("{} exited with {}: {}", self.binary, output.status, msg),
            };
            return Ok(ToolchainStatus::Failed { detail });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(ToolchainStatus::Available {
            version: extract_version(&stdout),
        })
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::new("go")
    }
}

/// Pull the release token out of `go version` output, or fall back to the first line
pub fn extract_version(output: &str) -> String {
    if let Some(m) = GO_RELEASE.find(output) {
        return m.as_str().to_string();
    }
    match output.lines().next().map(str::trim) {
        Some(line) if !line.is_empty() => line.to_string(),
        _ => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_version() {
        assert_eq!(extract_version("go version go1.22.1 linux/amd64\n"), "go1.22.1");
        assert_eq!(extract_version("go version go1.23rc1 darwin/arm64"), "go1.23rc1");
        assert_eq!(extract_version("go version go1.21 windows/amd64"), "go1.21");
    }

    #[test]
    fn test_extract_version_fallback() {
        assert_eq!(extract_version("tinygo 0.30.0\nmore"), "tinygo 0.30.0");
        assert_eq!(extract_version(""), "unknown");
        assert_eq!(extract_version("   \n"), "unknown");
    }

    #[test]
    fn test_missing_binary() {
        let toolchain = Toolchain::new("modkit-no-such-toolchain-binary");
        assert_eq!(toolchain.check().unwrap(), ToolchainStatus::Missing);
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_available() {
        let outcome = Toolchain::new("true").check().unwrap();
        assert_eq!(
            outcome,
            ToolchainStatus::Available {
                version: "unknown".to_string()
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_failed() {
        let outcome = Toolchain::new("false").check().unwrap();
        assert!(matches!(outcome, ToolchainStatus::Failed { .. }));
        assert!(!outcome.is_available());
    }
}
