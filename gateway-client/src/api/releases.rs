use crate::api::{list_page, ResourceList};
use crate::error::ApiResult;
use crate::http::{ApiClient, RequestConfig};
use crate::pagination::{ListQuery, Page};
use serde::{Deserialize, Serialize};

/// One entry of a gateway's release history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseHistory {
    pub id: u64,
    #[serde(default)]
    pub stage_names: Vec<String>,
    #[serde(default)]
    pub resource_version_display: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// Body of a publish call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishRequest {
    pub stage_id: u64,
    pub resource_version_id: u64,
    #[serde(default)]
    pub comment: String,
}

fn history_route(gateway_id: &str) -> String {
    format!("gateways/{}/releases/histories/", gateway_id)
}

pub fn lister(client: &ApiClient) -> ResourceList<ReleaseHistory> {
    ResourceList::new(client, history_route)
}

pub async fn list_release_histories(
    client: &ApiClient,
    gateway_id: u64,
    query: &ListQuery,
) -> ApiResult<Page<ReleaseHistory>> {
    list_page(client, &history_route(&gateway_id.to_string()), query).await
}

/// Release a resource version to a stage
pub async fn publish_release(
    client: &ApiClient,
    gateway_id: u64,
    request: &PublishRequest,
) -> ApiResult<ReleaseHistory> {
    client
        .post(
            &format!("gateways/{}/releases/", gateway_id),
            request,
            RequestConfig::global(),
        )
        .await
}
