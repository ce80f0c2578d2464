use crate::error::{RequestError, Result};
use crate::pagination::{ListQuery, Page};
use std::future::Future;

/// Trait for list-fetching functions driven by a [`crate::list::ListController`]
///
/// `context_id` names the owning resource (usually a gateway id) and may be
/// empty for top-level lists.
pub trait ListFetcher<T>: Send + Sync {
    fn fetch(
        &self,
        context_id: &str,
        query: ListQuery,
    ) -> impl Future<Output = std::result::Result<Page<T>, RequestError>> + Send;
}

impl<T, F, Fut> ListFetcher<T> for F
where
    F: Fn(String, ListQuery) -> Fut + Send + Sync,
    Fut: Future<Output = std::result::Result<Page<T>, RequestError>> + Send,
{
    fn fetch(
        &self,
        context_id: &str,
        query: ListQuery,
    ) -> impl Future<Output = std::result::Result<Page<T>, RequestError>> + Send {
        self(context_id.to_string(), query)
    }
}

/// Trait for configuration validation
pub trait ConfigValidator: Send + Sync {
    type Config;

    /// Validate configuration
    fn validate(&self, config: &Self::Config) -> Result<()>;
}
