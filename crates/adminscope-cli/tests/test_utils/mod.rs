//! Test utilities for adminscope integration tests

// Internal imports (std, crate)
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

// External imports (alphabetized)
use anyhow::Context;
use tempfile::TempDir;

/// Creates a temporary directory for test inputs and outputs
pub fn create_temp_dir() -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;
    let temp_path = temp_dir.path().to_path_buf();
    Ok((temp_dir, temp_path))
}

/// Writes a document at the default input location under `dir`
pub fn write_default_input(dir: &Path, content: &str) -> anyhow::Result<PathBuf> {
    let input = dir.join("storage").join("api-docs").join("api-docs.json");
    fs::create_dir_all(input.parent().context("input has no parent")?)?;
    fs::write(&input, content)?;
    Ok(input)
}

/// A small helpdesk API with a mix of admin and public endpoints
pub fn sample_openapi_json() -> &'static str {
    r#"{
  "openapi": "3.0.0",
  "info": { "title": "Helpdesk API", "version": "1.0.0" },
  "paths": {
    "/api/auth/login": {
      "post": { "summary": "Login", "description": "Used by the platform admin console" }
    },
    "/api/company-requests/{id}/approve": {
      "post": {
        "summary": "Aprobar solicitud de compañía",
        "tags": ["Company Requests"],
        "security": [{ "bearerAuth": [] }]
      }
    },
    "/api/companies/{id}": {
      "get": { "summary": "Show company" },
      "put": { "summary": "Update company" },
      "x-audit": { "tags": ["internal"] }
    },
    "/api/users/{id}/roles": {
      "post": { "summary": "Assign role" }
    },
    "/api/announcements": {
      "get": { "summary": "List announcements" },
      "post": { "summary": "Publish", "description": "Requires PLATFORM_ADMIN" }
    },
    "/api/tickets": {
      "get": { "summary": "List tickets" }
    }
  },
  "components": {}
}"#
}

/// Runs the adminscope binary in `dir` with the given arguments
pub fn run_adminscope(dir: &Path, args: &[&str]) -> anyhow::Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_adminscope"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .context("Failed to run adminscope binary")
}

/// Reads and parses a JSON report
pub fn read_report(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report at {}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}
