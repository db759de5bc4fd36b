//! Group directory backends.
//!
//! The dashboard and the CLI talk to a `GroupDirectory`: either the HTTP
//! client speaking to the directory server, or an in-memory directory
//! backed by the built-in demo dataset.

pub mod http;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{FilterState, GroupRecord};

/// A filtered, paginated group-listing request.
///
/// `phone` is `None` when no phone restriction applies; a `Some` value
/// must resolve to a known phone number or the request fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupQuery {
    pub phone: Option<String>,
    pub search: String,
    pub project: String,
    pub labels: Vec<String>,
    pub page: usize,
    pub page_size: usize,
}

impl GroupQuery {
    pub fn new(filter: &FilterState, page: usize, page_size: usize) -> Self {
        GroupQuery {
            phone: filter.phone_restriction().map(|p| p.to_string()),
            search: filter.search.clone(),
            project: filter.project.clone(),
            labels: filter.labels.clone(),
            page,
            page_size,
        }
    }
}

/// Pagination metadata reported alongside a page of groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// One page of matching groups plus the full matching count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPage {
    pub groups: Vec<GroupRecord>,
    pub pagination: PageInfo,
}

/// Common interface for group directory backends
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// Fetch one page of groups matching the query
    async fn list_groups(&self, query: &GroupQuery) -> Result<GroupPage>;

    /// Fetch the distinct project names across the whole collection
    async fn list_projects(&self) -> Result<Vec<String>>;

    /// Fetch the distinct labels across the whole collection
    async fn list_labels(&self) -> Result<Vec<String>>;

    /// Fetch the known phone numbers, in creation order
    async fn list_phones(&self) -> Result<Vec<String>>;
}

/// Shared handle passed into the dashboard and commands.
pub type SharedDirectory = Arc<dyn GroupDirectory>;
