use crate::api::{list_page, ResourceList};
use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::pagination::{ListQuery, Page};
use serde::{Deserialize, Serialize};

/// A deployment stage of a gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: u8,
    /// Version currently released to this stage
    #[serde(default)]
    pub release_version: Option<String>,
}

fn route(gateway_id: &str) -> String {
    format!("gateways/{}/stages/", gateway_id)
}

/// List fetcher for the stages of the gateway named by the context id
pub fn lister(client: &ApiClient) -> ResourceList<Stage> {
    ResourceList::new(client, route)
}

pub async fn list_stages(
    client: &ApiClient,
    gateway_id: u64,
    query: &ListQuery,
) -> ApiResult<Page<Stage>> {
    list_page(client, &route(&gateway_id.to_string()), query).await
}
