use crate::api::{list_page, ResourceList};
use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::pagination::{ListQuery, Page};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A plugin configuration bound to a stage or resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginBinding {
    pub id: u64,
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// `stage` or `resource`
    #[serde(default)]
    pub scope_type: String,
    #[serde(default)]
    pub scope_id: u64,
    #[serde(default)]
    pub config: Value,
}

fn route(gateway_id: &str) -> String {
    format!("gateways/{}/plugins/bindings/", gateway_id)
}

pub fn lister(client: &ApiClient) -> ResourceList<PluginBinding> {
    ResourceList::new(client, route)
}

pub async fn list_plugin_bindings(
    client: &ApiClient,
    gateway_id: u64,
    query: &ListQuery,
) -> ApiResult<Page<PluginBinding>> {
    list_page(client, &route(&gateway_id.to_string()), query).await
}
