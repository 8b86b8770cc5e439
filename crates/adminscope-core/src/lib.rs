//! Adminscope Core Library
//!
//! This library finds the administrator-relevant endpoints of an OpenAPI
//! document, groups them into report categories and renders the result as a
//! console summary and a JSON report.

pub mod analyze;
pub mod categorize;
pub mod config;
pub mod error;
pub mod filter;
pub mod openapi;
pub mod report;

pub use crate::{
    analyze::{analyze, analyze_document},
    categorize::{categorize, Category, CategoryMap},
    config::Config,
    error::{Error, Result},
    filter::{is_admin_relevant, select_endpoints, EndpointRecord},
    openapi::{HttpMethod, OpenApiContext, Operation},
    report::Report,
};
