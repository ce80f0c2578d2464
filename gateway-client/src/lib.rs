//! Gateway Client - API gateway management console client library
//!
//! This crate provides the data layer of the gateway console: an HTTP client
//! whose failures pass through a central error interceptor, typed calls for
//! the management API resources, and a paginated list controller that keeps
//! rows and pagination state in sync with a caller-owned filter.

// Core modules
pub mod config;
pub mod error;
pub mod pagination;
pub mod traits;

// Cross-cutting surfaces
pub mod events;
pub mod navigation;
pub mod notify;

// Main functionality modules
pub mod api;
pub mod http;
pub mod interceptor;
pub mod list;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export main types for convenience
pub use config::{ConsoleConfig, ConsoleConfigBuilder};
pub use error::{ApiResult, ConsoleError, RequestError, Result};
pub use events::{ConsoleEvent, EventBus, LoginRequired};
pub use http::{ApiClient, RequestConfig};
pub use interceptor::{ErrorInterceptor, RequestFailure};
pub use list::{
    FetchOutcome, Filter, ListController, ListOptions, ListState, MountedList, ResponseOrdering,
};
pub use navigation::{login_redirect_url, Navigator};
pub use notify::{Notification, Notifier, Theme};
pub use pagination::{ListQuery, Page, Pagination, DEFAULT_PAGE_SIZE, FETCH_ALL_PAGE_SIZE};
pub use traits::ListFetcher;
