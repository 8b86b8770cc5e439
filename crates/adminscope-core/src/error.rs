//! Error handling for the adminscope library.
//!
//! `Error` covers the ways an analysis run can fail: reading the document or
//! writing the report (`Io`), parsing the document or a configuration file
//! (`Json`, `Yaml`, `OpenApi`) and rejecting a configuration (`Config`).
//!
//! The input document fails a run only when it cannot be read or cannot be
//! parsed into a mapping. Shape problems inside the
//! document (missing `paths`, odd path items) are skipped, not reported here.
//!
//! # Examples
//!
//! ```
//! use adminscope_core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::openapi("document root is not a mapping"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

/// Result type for adminscope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for adminscope operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input document could not be interpreted as an API description
    #[error("OpenAPI error: {0}")]
    OpenApi(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new OpenAPI error
    pub fn openapi<S: Into<String>>(msg: S) -> Self {
        Self::OpenApi(msg.into())
    }
}
