//! Bucketing of endpoint records into report categories.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::filter::EndpointRecord;

/// Report category, declared in matching priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Authentication")]
    Authentication,
    #[serde(rename = "Company Requests")]
    CompanyRequests,
    #[serde(rename = "Company Management")]
    CompanyManagement,
    #[serde(rename = "User Management")]
    UserManagement,
    #[serde(rename = "Role Management")]
    RoleManagement,
    #[serde(rename = "Announcements")]
    Announcements,
    #[serde(rename = "Help Center")]
    HelpCenter,
    #[serde(rename = "Content Management")]
    ContentManagement,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Authentication,
        Category::CompanyRequests,
        Category::CompanyManagement,
        Category::UserManagement,
        Category::RoleManagement,
        Category::Announcements,
        Category::HelpCenter,
        Category::ContentManagement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Authentication => "Authentication",
            Category::CompanyRequests => "Company Requests",
            Category::CompanyManagement => "Company Management",
            Category::UserManagement => "User Management",
            Category::RoleManagement => "Role Management",
            Category::Announcements => "Announcements",
            Category::HelpCenter => "Help Center",
            Category::ContentManagement => "Content Management",
        }
    }

    /// First matching rule wins; anything unmatched is content management.
    pub fn classify(path: &str) -> Self {
        if path.contains("/auth/") {
            Category::Authentication
        } else if path.contains("/company-requests") {
            Category::CompanyRequests
        } else if path.contains("/companies") {
            Category::CompanyManagement
        } else if path.contains("/users") && !path.contains("/roles") {
            Category::UserManagement
        } else if path.contains("/roles") {
            Category::RoleManagement
        } else if path.contains("/announcements") {
            Category::Announcements
        } else if path.contains("/help-center") {
            Category::HelpCenter
        } else {
            Category::ContentManagement
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every category, in priority order, with its records in input order
pub type CategoryMap = IndexMap<Category, Vec<EndpointRecord>>;

/// Assign each record to exactly one category.
///
/// All categories are present in the result, empty or not.
pub fn categorize(records: Vec<EndpointRecord>) -> CategoryMap {
    let mut buckets: CategoryMap = Category::ALL.into_iter().map(|c| (c, Vec::new())).collect();
    for record in records {
        let category = Category::classify(&record.path);
        log::debug!("{} -> {}", record.path, category);
        buckets.entry(category).or_default().push(record);
    }
    buckets
}
