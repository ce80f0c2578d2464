use crate::config::ConsoleConfig;
use crate::error::{ApiResult, ConsoleError, RequestError, Result};
use crate::events::EventBus;
use crate::http::request::{decode_data, error_from_response, parse_body, RequestConfig};
use crate::interceptor::{ErrorInterceptor, RequestFailure};
use crate::navigation::Navigator;
use crate::notify::Notifier;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the management API
///
/// Every failed call is passed through the [`ErrorInterceptor`] before the
/// error is returned.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    interceptor: ErrorInterceptor,
}

impl ApiClient {
    /// Create a new API client with configuration and an interceptor
    pub fn new(config: &ConsoleConfig, interceptor: ErrorInterceptor) -> Result<Self> {
        url::Url::parse(&config.api.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_seconds()))
            .default_headers(Self::default_headers(config)?)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            interceptor,
        })
    }

    /// Create a client together with its interceptor and a fresh event bus
    pub fn with_surfaces(
        config: &ConsoleConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let interceptor =
            ErrorInterceptor::new(config.login.url.clone(), EventBus::new(), notifier, navigator);
        Self::new(config, interceptor)
    }

    /// Event bus the interceptor publishes on
    pub fn events(&self) -> &EventBus {
        self.interceptor.events()
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
        config: RequestConfig,
    ) -> ApiResult<T> {
        self.send(Method::GET, path, query, None, config).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        config: RequestConfig,
    ) -> ApiResult<T> {
        let body = self.encode_body(body, config)?;
        self.send(Method::POST, path, &[], Some(body), config).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        config: RequestConfig,
    ) -> ApiResult<T> {
        let body = self.encode_body(body, config)?;
        self.send(Method::PUT, path, &[], Some(body), config).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        config: RequestConfig,
    ) -> ApiResult<T> {
        let body = self.encode_body(body, config)?;
        self.send(Method::PATCH, path, &[], Some(body), config).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str, config: RequestConfig) -> ApiResult<T> {
        self.send(Method::DELETE, path, &[], None, config).await
    }

    /// Absolute URL for a path relative to the API base
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
        config: RequestConfig,
    ) -> ApiResult<T> {
        let url = self.url_for(path);
        tracing::debug!(%method, %url, "dispatching request");

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.fail(RequestError::transport(e.to_string()), config)),
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                let error = RequestError::new(status.as_u16(), format!("Failed to read response: {}", e));
                return Err(self.fail(error, config));
            }
        };
        let payload = parse_body(&bytes);

        if !status.is_success() {
            return Err(self.fail(error_from_response(status, payload), config));
        }

        decode_data(status, payload).map_err(|error| self.fail(error, config))
    }

    fn fail(&self, error: RequestError, config: RequestConfig) -> RequestError {
        self.interceptor.intercept(RequestFailure::from(error), &config)
    }

    fn encode_body<B: Serialize + ?Sized>(&self, body: &B, config: RequestConfig) -> ApiResult<Value> {
        serde_json::to_value(body).map_err(|e| {
            self.fail(
                RequestError::transport(format!("Failed to encode request body: {}", e)),
                config,
            )
        })
    }

    fn default_headers(config: &ConsoleConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(configured) = &config.api.headers {
            for (key, value) in configured {
                let name = HeaderName::from_bytes(key.as_bytes())
                    .map_err(|_| ConsoleError::invalid_config(format!("Invalid header name: {}", key)))?;
                let value = HeaderValue::from_str(value).map_err(|_| {
                    ConsoleError::invalid_config(format!("Invalid value for header {}", key))
                })?;
                headers.insert(name, value);
            }
        }

        if let Some(token) = &config.api.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ConsoleError::invalid_config("Invalid API token"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}
