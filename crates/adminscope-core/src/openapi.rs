//! OpenAPI document loading and operation extraction.
//!
//! This module loads an API description from disk and exposes the pieces the
//! relevance filter needs: the `paths` mapping in document order and, for each
//! path item, the operations declared under the five HTTP methods we inspect.
//! Lookups are best effort. Anything that does not have the expected shape is
//! skipped rather than treated as an error.
//!
//! # Examples
//!
//! ```no_run
//! use adminscope_core::openapi::OpenApiContext;
//! use adminscope_core::error::Result;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let spec = OpenApiContext::from_file("storage/api-docs/api-docs.json").await?;
//!
//! if let Some(title) = spec.title() {
//!     println!("API Title: {}", title);
//! }
//! for (path, item) in spec.path_items() {
//!     for (method, op) in adminscope_core::openapi::operations_in(item) {
//!         println!("{} {} - {}", method, path, op.summary);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::Path;

use crate::Error;

// External imports (alphabetized)
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use tokio::fs;

/// A loaded API description
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct OpenApiContext {
    /// The raw JSON value of the document; the root is always a mapping
    pub json: JsonValue,
}

impl OpenApiContext {
    /// Load a document from a file (supports both JSON and YAML)
    pub async fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await?;
        let json = Self::parse_content(&content).map_err(|e| {
            Error::openapi(format!(
                "Failed to parse OpenAPI document at {}: {}",
                path.display(),
                e
            ))
        })?;
        log::debug!("Parsed OpenAPI document from {}", path.display());
        Self::from_json(json)
    }

    /// Wrap an already parsed document. The root must be a mapping.
    pub fn from_json(json: JsonValue) -> crate::Result<Self> {
        if !json.is_object() {
            return Err(Error::openapi("document root is not a mapping"));
        }
        Ok(Self { json })
    }

    /// Parse content as either JSON or YAML
    pub fn parse_content(content: &str) -> Result<JsonValue, String> {
        // Try to parse as JSON first
        let json_err = match serde_json::from_str(content) {
            Ok(json) => return Ok(json),
            Err(e) => e,
        };

        // Plain scalars are valid YAML, so only accept a mapping from the fallback
        match serde_yaml::from_str::<JsonValue>(content) {
            Ok(json) if json.is_object() => Ok(json),
            _ => Err(format!("content is neither valid JSON nor YAML ({})", json_err)),
        }
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<&str> {
        self.json.get("info")?.get("title")?.as_str()
    }

    /// Get the version of the API
    pub fn version(&self) -> Option<&str> {
        self.json.get("info")?.get("version")?.as_str()
    }

    /// Whether the document carries a `components` section
    pub fn has_components(&self) -> bool {
        self.json.get("components").is_some_and(JsonValue::is_object)
    }

    /// Path items in document order.
    ///
    /// A missing or non-mapping `paths` yields nothing. Path items that are not
    /// mappings are skipped.
    pub fn path_items(&self) -> impl Iterator<Item = (&str, &Map<String, JsonValue>)> {
        let paths = match self.json.get("paths") {
            Some(JsonValue::Object(paths)) => Some(paths),
            Some(_) => {
                log::warn!("'paths' is not a mapping; treating document as empty");
                None
            }
            None => {
                log::warn!("document has no 'paths'; treating document as empty");
                None
            }
        };

        paths.into_iter().flatten().filter_map(|(path, item)| match item {
            JsonValue::Object(item) => Some((path.as_str(), item)),
            _ => {
                log::debug!("Skipping non-mapping path item at {}", path);
                None
            }
        })
    }
}

/// Operations declared on a path item, in document order.
///
/// Only the five inspected HTTP methods are returned. Other keys such as
/// `parameters`, `summary` or `x-*` extensions are ignored.
pub fn operations_in(
    item: &Map<String, JsonValue>,
) -> impl Iterator<Item = (HttpMethod, Operation)> + '_ {
    item.iter().filter_map(|(key, value)| {
        let method = HttpMethod::from_key(key)?;
        match value.as_object() {
            Some(op) => Some((method, Operation::from_json(op))),
            None => {
                log::debug!("Skipping non-mapping '{}' operation", key);
                None
            }
        }
    })
}

/// HTTP methods considered when scanning a path item
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// Lowercase key as it appears in the document
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }

    /// Match a path item key exactly; `GET` or `head` are not methods we inspect.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == key)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

/// The subset of an operation object carried into the report.
///
/// Values are copied as the document wrote them; only absent fields get
/// defaults (`""` for text, empty sequences and maps, `null` request body).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Operation {
    /// A short summary of what the operation does.
    pub summary: JsonValue,
    /// A verbose explanation of the operation behavior.
    pub description: JsonValue,
    /// Tags used for logical grouping of operations.
    pub tags: Vec<JsonValue>,
    /// Parameters as declared, `$ref`s left unresolved.
    pub parameters: Vec<JsonValue>,
    /// The request body, if any.
    #[serde(rename = "requestBody")]
    pub request_body: Option<JsonValue>,
    /// Responses keyed by status code.
    pub responses: Map<String, JsonValue>,
    /// Security requirement objects.
    pub security: Vec<JsonValue>,
}

impl Default for Operation {
    fn default() -> Self {
        Self {
            summary: JsonValue::String(String::new()),
            description: JsonValue::String(String::new()),
            tags: Vec::new(),
            parameters: Vec::new(),
            request_body: None,
            responses: Map::new(),
            security: Vec::new(),
        }
    }
}

impl Operation {
    /// Extract the reported fields from an operation object.
    pub fn from_json(op: &Map<String, JsonValue>) -> Self {
        let text = |key: &str| {
            op.get(key)
                .cloned()
                .unwrap_or_else(|| JsonValue::String(String::new()))
        };
        let array = |key: &str| {
            op.get(key)
                .and_then(JsonValue::as_array)
                .cloned()
                .unwrap_or_default()
        };

        Self {
            summary: text("summary"),
            description: text("description"),
            tags: array("tags"),
            parameters: array("parameters"),
            request_body: op.get("requestBody").cloned(),
            responses: op
                .get("responses")
                .and_then(JsonValue::as_object)
                .cloned()
                .unwrap_or_default(),
            security: array("security"),
        }
    }
}

/// Text of a scalar field for keyword scanning: strings as-is, anything else
/// as compact JSON.
pub fn scan_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
