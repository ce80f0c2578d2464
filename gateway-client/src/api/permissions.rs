use crate::api::{list_page, ResourceList};
use crate::error::ApiResult;
use crate::http::{ApiClient, RequestConfig};
use crate::pagination::{ListQuery, Page};
use serde::{Deserialize, Serialize};

/// A pending application permission request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionApply {
    pub id: u64,
    pub bk_app_code: String,
    /// `api` or `resource`
    #[serde(default)]
    pub grant_dimension: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub expire_days: u32,
    #[serde(default)]
    pub applied_by: String,
    #[serde(default)]
    pub created_time: Option<String>,
}

/// Decision on a batch of permission requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub ids: Vec<u64>,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub comment: String,
}

fn route(gateway_id: &str) -> String {
    format!("gateways/{}/permissions/app-permission-apply/", gateway_id)
}

pub fn lister(client: &ApiClient) -> ResourceList<PermissionApply> {
    ResourceList::new(client, route)
}

pub async fn list_permission_applies(
    client: &ApiClient,
    gateway_id: u64,
    query: &ListQuery,
) -> ApiResult<Page<PermissionApply>> {
    list_page(client, &route(&gateway_id.to_string()), query).await
}

/// Approve or reject permission requests in one call
pub async fn approve_permission_applies(
    client: &ApiClient,
    gateway_id: u64,
    request: &ApprovalRequest,
) -> ApiResult<()> {
    let path = format!("{}batch/", route(&gateway_id.to_string()));
    client.post(&path, request, RequestConfig::global()).await
}
