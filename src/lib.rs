//! A Rust client for the data.world REST API.
//!
//! This library covers the resource surface of the API - datasets,
//! projects, files, queries, streams, insights, webhooks and more -
//! through a blocking [`Client`](client::Client) plus one module of free
//! functions per resource family. A companion binary, `dwcli`, exposes
//! the same operations on the command line.

#![warn(unused_crate_dependencies)]

/// Blocking HTTP client for the data.world API
pub mod client;

/// Connection settings and base URL resolution
pub mod config;

/// Error type shared across the crate
pub mod error;

/// Request and response body types
pub mod models;

/// Traversal of paged listings
pub mod pagination;

/// Progress reporting utilities
pub(crate) mod progress;

/// Endpoint descriptions and body encoding
pub mod request;

/// Operations of the REST API, one module per resource family
pub mod api {
    /// Dataset operations
    pub mod datasets;
    /// DOI associations for datasets
    pub mod dois;
    /// File operations within a dataset
    pub mod files;
    /// Insight operations within a project
    pub mod insights;
    /// Project operations
    pub mod projects;
    /// Saved queries and ad-hoc SQL/SPARQL execution
    pub mod queries;
    /// Append-only streams
    pub mod streams;
    /// User profiles and their resources
    pub mod users;
    /// Webhook subscriptions
    pub mod webhooks;
}

/// Commonly used types and functions
pub mod prelude {
    pub use super::api::{
        datasets, dois, files, insights, projects, queries, streams, users, webhooks,
    };
    pub use super::client::Client;
    pub use super::config::ClientConfig;
    pub use super::error::{Error, Result};
    pub use super::pagination::{Page, PagingPolicy};
    pub use super::request::NO_BODY;
}

/// Command-line interface functionality
pub mod cli {
    /// Authentication commands
    pub mod auth;
    /// Base CLI functionality
    pub mod base;
    /// Dataset commands
    pub mod dataset;
    /// File commands
    pub mod file;
    /// Project commands
    pub mod project;
    /// Query commands
    pub mod query;
    /// Stream commands
    pub mod stream;
    /// User commands
    pub mod user;
    /// Webhook commands
    pub mod webhook;
}

/// Test utilities
#[cfg(test)]
mod test_utils;
