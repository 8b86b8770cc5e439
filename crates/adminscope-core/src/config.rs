//! Configuration for an analysis run.
//!
//! This module defines the `Config` struct: where the API description is read
//! from and where the report is written. The defaults match the layout of the
//! application being audited, so a run with no configuration at all reads
//! `storage/api-docs/api-docs.json` and writes `admin_endpoints_analysis.json`
//! relative to the working directory. A configuration can also be loaded from
//! a YAML file and adjusted with command-line overrides.
//!
//! # Examples
//!
//! ```no_run
//! use adminscope_core::config::Config;
//!
//! // Defaults
//! let config = Config::default();
//! assert_eq!(config.output_path, "admin_endpoints_analysis.json");
//!
//! // Or explicit paths
//! let config = Config::new("docs/openapi.json", "out/admin.json");
//! ```

// Internal imports (std, crate)
use std::path::Path;

use crate::Error;

// External imports (alphabetized)
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Default location of the generated API description
pub const DEFAULT_INPUT_PATH: &str = "storage/api-docs/api-docs.json";

/// Default location of the written report
pub const DEFAULT_OUTPUT_PATH: &str = "admin_endpoints_analysis.json";

/// Configuration for an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the OpenAPI document
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// Path the JSON report is written to
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

impl Config {
    /// Create a new Config with explicit paths
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Replace paths that were given explicitly
    pub fn with_overrides(mut self, input: Option<String>, output: Option<String>) -> Self {
        if let Some(input) = input {
            self.input_path = input;
        }
        if let Some(output) = output {
            self.output_path = output;
        }
        self
    }

    /// Reject empty paths
    pub fn validate(&self) -> crate::Result<()> {
        if self.input_path.trim().is_empty() {
            return Err(Error::config("input_path must not be empty"));
        }
        if self.output_path.trim().is_empty() {
            return Err(Error::config("output_path must not be empty"));
        }
        Ok(())
    }
}

fn default_input_path() -> String {
    DEFAULT_INPUT_PATH.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}
