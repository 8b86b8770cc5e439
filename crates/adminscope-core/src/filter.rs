//! Relevance filtering for administrator endpoints.
//!
//! An operation is relevant when its metadata mentions the platform
//! administrator role, or when its path contains one of a fixed set of
//! administration keywords. Each method is judged on its own; a path is
//! reported when at least one of its methods is relevant, and only the
//! relevant methods are carried into its [`EndpointRecord`].

use indexmap::IndexMap;
use serde::Serialize;

use crate::openapi::{operations_in, scan_text, HttpMethod, OpenApiContext, Operation};

/// Markers searched for in the lowercased operation text.
pub const ADMIN_MARKERS: [&str; 2] = ["platform_admin", "platform admin"];

/// Substrings searched for in the lowercased path.
pub const PATH_KEYWORDS: [&str; 8] = [
    "company-requests",
    "/companies",
    "/users",
    "/roles",
    "platform_admin",
    "status",
    "approve",
    "reject",
];

/// A path together with its administrator-relevant methods
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EndpointRecord {
    pub path: String,
    pub methods: IndexMap<HttpMethod, Operation>,
}

impl EndpointRecord {
    /// Uppercased method names in document order, e.g. `GET, POST`
    pub fn method_list(&self) -> String {
        self.methods
            .keys()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Decide whether a single operation is administrator-relevant.
pub fn is_admin_relevant(path: &str, op: &Operation) -> bool {
    let path_lower = path.to_lowercase();
    if PATH_KEYWORDS.iter().any(|kw| path_lower.contains(kw)) {
        return true;
    }

    let haystack = searchable_text(path, op);
    ADMIN_MARKERS.iter().any(|marker| haystack.contains(marker))
}

/// Lowercased concatenation of path, description, summary, tags and security.
fn searchable_text(path: &str, op: &Operation) -> String {
    // Compact JSON for sequences; serializing plain JSON values cannot fail
    let tags = serde_json::to_string(&op.tags).unwrap_or_default();
    let security = serde_json::to_string(&op.security).unwrap_or_default();
    [
        path.to_string(),
        scan_text(&op.description),
        scan_text(&op.summary),
        tags,
        security,
    ]
    .join(" ")
    .to_lowercase()
}

/// Collect administrator-relevant endpoints from a document, in document order.
pub fn select_endpoints(ctx: &OpenApiContext) -> Vec<EndpointRecord> {
    let mut records = Vec::new();
    for (path, item) in ctx.path_items() {
        let methods: IndexMap<HttpMethod, Operation> = operations_in(item)
            .filter(|(_, op)| is_admin_relevant(path, op))
            .collect();

        if methods.is_empty() {
            continue;
        }
        log::debug!("Relevant: {} [{}]", path, methods.len());
        records.push(EndpointRecord {
            path: path.to_string(),
            methods,
        });
    }
    log::info!("Selected {} administrator endpoints", records.len());
    records
}
