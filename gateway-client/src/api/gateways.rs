use crate::api::{list_page, ResourceList};
use crate::error::ApiResult;
use crate::http::{ApiClient, RequestConfig};
use crate::pagination::{ListQuery, Page};
use serde::{Deserialize, Serialize};

/// An API gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 1 when the gateway is enabled
    #[serde(default)]
    pub status: u8,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub maintainers: Vec<String>,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_time: Option<String>,
}

impl Gateway {
    pub fn is_active(&self) -> bool {
        self.status == 1
    }
}

/// Body of gateway create and update calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayPayload {
    pub name: String,
    pub description: String,
    pub maintainers: Vec<String>,
    pub is_public: bool,
}

fn route(_: &str) -> String {
    "gateways/".to_string()
}

/// List fetcher for gateways; the context id is ignored
pub fn lister(client: &ApiClient) -> ResourceList<Gateway> {
    ResourceList::new(client, route)
}

pub async fn list_gateways(client: &ApiClient, query: &ListQuery) -> ApiResult<Page<Gateway>> {
    list_page(client, &route(""), query).await
}

pub async fn get_gateway(client: &ApiClient, id: u64) -> ApiResult<Gateway> {
    client
        .get(&format!("gateways/{}/", id), &[], RequestConfig::global())
        .await
}

pub async fn create_gateway(client: &ApiClient, payload: &GatewayPayload) -> ApiResult<Gateway> {
    client.post("gateways/", payload, RequestConfig::global()).await
}

pub async fn update_gateway(
    client: &ApiClient,
    id: u64,
    payload: &GatewayPayload,
) -> ApiResult<Gateway> {
    client
        .put(&format!("gateways/{}/", id), payload, RequestConfig::global())
        .await
}

pub async fn delete_gateway(client: &ApiClient, id: u64) -> ApiResult<()> {
    client
        .delete(&format!("gateways/{}/", id), RequestConfig::global())
        .await
}
