//! Pagination state and the query/response shapes of list endpoints.
//!
//! `page` is a zero-based page index. List endpoints take a row offset, which
//! is derived as `page * limit` when the query string is built.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Page size for regular table views
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Page size used by pickers that load a whole collection at once
pub const FETCH_ALL_PAGE_SIZE: u64 = 10_000;

/// Pagination window and the total reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based page index
    pub page: u64,
    /// Page size
    pub limit: u64,
    /// Total rows reported by the last applied response
    pub count: u64,
}

impl Pagination {
    pub fn new(limit: u64) -> Self {
        Self {
            page: 0,
            limit,
            count: 0,
        }
    }

    /// Number of pages needed to show `count` rows
    pub fn total_pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.count.div_ceil(self.limit)
    }

    /// Whether a page after the current one exists
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Parameters handed to a list fetch function
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub filters: Map<String, Value>,
}

impl ListQuery {
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page,
            limit,
            filters: Map::new(),
        }
    }

    /// Add a filter field
    #[must_use]
    pub fn with_filter<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Row offset sent to the server
    pub fn row_offset(&self) -> u64 {
        self.page.saturating_mul(self.limit)
    }

    /// Query string pairs: `offset`, `limit`, then the filters
    ///
    /// Null and empty-string filters are omitted, arrays are joined with
    /// commas and nested objects are sent as JSON text.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("offset".to_string(), self.row_offset().to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];

        for (key, value) in &self.filters {
            if let Some(text) = query_value(value) {
                pairs.push((key.clone(), text));
            }
        }

        pairs
    }
}

fn query_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(query_value).collect();
            (!parts.is_empty()).then(|| parts.join(","))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

/// One page of a list endpoint response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64) -> Self {
        Self { count, results }
    }
}
