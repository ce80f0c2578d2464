//! Shared fixtures for the gateway console integration tests

use gateway_client::testing::{RecordingNavigator, RecordingNotifier};
use gateway_client::{ApiClient, ConsoleConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::MockServer;

pub const LOGIN_URL: &str = "http://login.local";
pub const SITE_URL: &str = "http://console.local";
pub const CURRENT_HREF: &str = "http://console.local/gateways/3/stages";

/// A client wired to a mock management API and recording surfaces
pub struct Console {
    pub server: MockServer,
    pub client: ApiClient,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Console {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = ConsoleConfig::builder()
            .base_url(format!("{}/api/v1", server.uri()))
            .login(LOGIN_URL, SITE_URL)
            .timeout(5)
            .build()
            .expect("test config is valid");

        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new(CURRENT_HREF));
        let client = ApiClient::with_surfaces(&config, notifier.clone(), navigator.clone())
            .expect("client builds");

        Self {
            server,
            client,
            notifier,
            navigator,
        }
    }
}

/// Successful envelope around `data`
pub fn envelope(data: Value) -> Value {
    json!({"code": 0, "message": "", "data": data})
}

/// Envelope of one list page
pub fn page_envelope(results: Value, count: u64) -> Value {
    envelope(json!({"count": count, "results": results}))
}

/// Error envelope as returned by the management API
pub fn error_envelope(code: u32, message: &str, data: Value) -> Value {
    json!({"code": code, "message": message, "data": data})
}

/// Minimal stage records named `stage-<id>`
pub fn stages(ids: &[u64]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| json!({"id": id, "name": format!("stage-{}", id)}))
            .collect(),
    )
}
