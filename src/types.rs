use serde::{Deserialize, Serialize};

/// Sentinel phone selector meaning "no phone restriction".
pub const PHONE_ALL: &str = "all";

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Fixed page-size choices exposed by the dashboard and the CLI.
pub const PAGE_SIZE_CHOICES: &[usize] = &[5, 10, 25, 50];

/// One WhatsApp group's metadata row, as served by the directory backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub member_count: u32,
    pub phone_id: i64,
    pub created_at: String,
    pub updated_at: String,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// The user-controlled filter criteria. Empty string / empty list means
/// "no filter" for search, project, and labels; the phone selector uses
/// the `all` sentinel instead of an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub phone: String,
    pub search: String,
    pub project: String,
    pub labels: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            phone: PHONE_ALL.to_string(),
            search: String::new(),
            project: String::new(),
            labels: Vec::new(),
        }
    }
}

impl FilterState {
    /// The phone restriction to send to the backend, or `None` when the
    /// selector is the `all` sentinel (or unset).
    pub fn phone_restriction(&self) -> Option<&str> {
        if self.phone.is_empty() || self.phone == PHONE_ALL {
            None
        } else {
            Some(&self.phone)
        }
    }

    pub fn has_active_filters(&self) -> bool {
        self.phone_restriction().is_some()
            || !self.search.is_empty()
            || !self.project.is_empty()
            || !self.labels.is_empty()
    }
}

/// Page position plus the server-reported total for the current filter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        PaginationState {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl PaginationState {
    pub fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }

    /// First and last 1-based row numbers visible on the current page,
    /// for the "Showing X to Y of Z groups" line.
    pub fn visible_range(&self) -> (usize, usize) {
        let start = (self.page - 1) * self.page_size + 1;
        let end = (self.page * self.page_size).min(self.total);
        (start, end)
    }
}

/// The next entry in the fixed page-size cycle. Unknown sizes restart the
/// cycle at the first choice.
pub fn next_page_size(current: usize) -> usize {
    match PAGE_SIZE_CHOICES.iter().position(|&s| s == current) {
        Some(idx) => PAGE_SIZE_CHOICES[(idx + 1) % PAGE_SIZE_CHOICES.len()],
        None => PAGE_SIZE_CHOICES[0],
    }
}

/// Distinct filter-option values aggregated over the whole collection,
/// independent of the current filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupSets {
    pub projects: Vec<String>,
    pub labels: Vec<String>,
    pub phones: Vec<String>,
}
