use crate::api::{list_page, ResourceList};
use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::list::Filter;
use crate::pagination::{ListQuery, Page};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One request recorded by the gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessLog {
    pub request_id: String,
    /// Unix timestamp in seconds
    pub timestamp: i64,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub http_path: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub app_code: String,
    /// Total request time in milliseconds
    #[serde(default)]
    pub request_duration: u64,
    #[serde(default)]
    pub error: String,
}

impl AccessLog {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

fn route(gateway_id: &str) -> String {
    format!("gateways/{}/logs/", gateway_id)
}

pub fn lister(client: &ApiClient) -> ResourceList<AccessLog> {
    ResourceList::new(client, route)
}

const TIME_START: &str = "time_start";
const TIME_END: &str = "time_end";

/// Add the `time_start`/`time_end` filters for a time window
pub fn with_time_range(query: ListQuery, start: DateTime<Utc>, end: DateTime<Utc>) -> ListQuery {
    query
        .with_filter(TIME_START, start.timestamp())
        .with_filter(TIME_END, end.timestamp())
}

/// Set the time window on a list filter, returning whether it changed
pub fn set_time_range(filter: &Filter, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    filter.update(|criteria| {
        criteria.insert(TIME_START.to_string(), start.timestamp().into());
        criteria.insert(TIME_END.to_string(), end.timestamp().into());
    })
}

pub async fn list_access_logs(
    client: &ApiClient,
    gateway_id: u64,
    query: &ListQuery,
) -> ApiResult<Page<AccessLog>> {
    list_page(client, &route(&gateway_id.to_string()), query).await
}
