use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gateway client operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Result of a single API call
pub type ApiResult<T> = std::result::Result<T, RequestError>;

/// Logical code used when a request failed before any status was received
pub const TRANSPORT_ERROR_CODE: u16 = 0;

/// Failure of a single API request
///
/// `code` is the HTTP status of the failed response, or
/// [`TRANSPORT_ERROR_CODE`] when the request never produced one. The raw
/// response payload is kept so callers can inspect structured error data.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestError {
    pub code: u16,
    pub message: String,
    pub response: Option<Value>,
}

impl RequestError {
    /// Create a new request error without a response payload
    pub fn new<S: Into<String>>(code: u16, message: S) -> Self {
        Self {
            code,
            message: message.into(),
            response: None,
        }
    }

    /// Create a request error for a transport-level failure
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::new(TRANSPORT_ERROR_CODE, message)
    }

    /// Attach the raw response payload
    #[must_use]
    pub fn with_response(mut self, response: Value) -> Self {
        self.response = Some(response);
        self
    }

    /// The `data` member of the response payload, if any
    pub fn data(&self) -> Option<&Value> {
        self.response
            .as_ref()
            .and_then(|response| response.get("data"))
            .filter(|data| !data.is_null())
    }

    pub fn is_transport(&self) -> bool {
        self.code == TRANSPORT_ERROR_CODE
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_transport() {
            write!(f, "request failed: {}", self.message)
        } else {
            write!(f, "request failed with status {}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for RequestError {}

/// Comprehensive error types for gateway console operations
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Request(#[from] RequestError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("General error: {message}")]
    General { message: String },
}

impl ConsoleError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// The underlying request error, when this error came from an API call
    pub fn as_request(&self) -> Option<&RequestError> {
        match self {
            Self::Request(err) => Some(err),
            _ => None,
        }
    }
}
