pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod propagator;
pub mod replacer;
pub mod scaffold;
pub mod toolchain;

#[cfg(test)]
mod test_helpers;

pub use config::Settings;
pub use error::{ModkitError, Result};
pub use models::{
    ConfigFileOutcome, DEFAULT_OLD_MODULE, FileOutcome, ModuleFileOutcome, ModulePath,
    PropagationReport, Rewrite, ScaffoldReport,
};
pub use propagator::{PropagationOptions, propagate};
pub use replacer::replace_in_file;
pub use scaffold::scaffold_project;
pub use toolchain::{Toolchain, ToolchainStatus};
