//! Console summary and persisted report.
//!
//! The persisted form is pretty-printed JSON:
//!
//! ```text
//! {
//!   "categories": { "<label>": [EndpointRecord, ...], ... },
//!   "total_endpoints": <integer>
//! }
//! ```
//!
//! Every category label is present, in priority order. Non-ASCII text is
//! written as-is.

// Internal imports (std, crate)
use std::fmt;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::categorize::CategoryMap;

// External imports (alphabetized)
use serde::Serialize;
use tempfile::NamedTempFile;

/// Categorized administrator endpoints
#[derive(Debug, Serialize)]
pub struct Report {
    pub categories: CategoryMap,
    pub total_endpoints: usize,
}

impl Report {
    pub fn new(categories: CategoryMap) -> Self {
        let total_endpoints = categories.values().map(Vec::len).sum();
        Self {
            categories,
            total_endpoints,
        }
    }

    /// Human-readable summary: the total, then each non-empty category with
    /// one line per endpoint.
    pub fn render_summary(&self) -> String {
        self.to_string()
    }

    /// Serialize the report as it is written to disk.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Write the report, replacing any previous file.
    ///
    /// The content goes to a uniquely named temporary file in the target
    /// directory and is persisted over the target, so a failed run never
    /// leaves a truncated report or a stray temporary file behind.
    pub async fn write_to<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let path = path.as_ref().to_path_buf();
        let content = self.to_json_pretty()?;

        let written = path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&written, &content))
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))??;

        log::info!("Wrote report to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total administrator endpoints: {}", self.total_endpoints)?;
        for (category, records) in &self.categories {
            if records.is_empty() {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "{} ({})", category, records.len())?;
            for record in records {
                writeln!(f, "  [{}] {}", record.method_list(), record.path)?;
            }
        }
        Ok(())
    }
}

fn write_atomic(path: &Path, content: &str) -> crate::Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent.to_path_buf()
        }
        None => PathBuf::from("."),
    };

    // Dropping the temp file on any early return removes it
    let mut temp_file = NamedTempFile::new_in(&dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
