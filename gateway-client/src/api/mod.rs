//! Typed calls for the management API resources.
//!
//! List endpoints share one shape: `offset`/`limit` plus filter fields in the
//! query string and `{count, results}` in the envelope's `data`. Each
//! resource module offers a `lister` that plugs its list endpoint into a
//! [`crate::list::ListController`].

pub mod access_logs;
pub mod gateways;
pub mod permissions;
pub mod plugins;
pub mod releases;
pub mod stages;

use crate::error::ApiResult;
use crate::http::{ApiClient, RequestConfig};
use crate::pagination::{ListQuery, Page};
use crate::traits::ListFetcher;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Fetch one page from a list endpoint
pub async fn list_page<T: DeserializeOwned>(
    client: &ApiClient,
    path: &str,
    query: &ListQuery,
) -> ApiResult<Page<T>> {
    client
        .get(path, &query.to_query_pairs(), RequestConfig::global())
        .await
}

/// List endpoint bound to a client, usable as a [`ListFetcher`]
///
/// `route` maps the controller's context id to the endpoint path.
pub struct ResourceList<T> {
    client: ApiClient,
    route: fn(&str) -> String,
    _rows: PhantomData<fn() -> T>,
}

impl<T> ResourceList<T> {
    pub fn new(client: &ApiClient, route: fn(&str) -> String) -> Self {
        Self {
            client: client.clone(),
            route,
            _rows: PhantomData,
        }
    }

    pub fn path(&self, context_id: &str) -> String {
        (self.route)(context_id)
    }
}

impl<T> Clone for ResourceList<T> {
    fn clone(&self) -> Self {
        Self::new(&self.client, self.route)
    }
}

impl<T> ListFetcher<T> for ResourceList<T>
where
    T: DeserializeOwned + Send + Sync,
{
    async fn fetch(&self, context_id: &str, query: ListQuery) -> ApiResult<Page<T>> {
        list_page(&self.client, &self.path(context_id), &query).await
    }
}
