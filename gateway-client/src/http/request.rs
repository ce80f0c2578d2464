use crate::error::RequestError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Per-request options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestConfig {
    /// Show a user-visible notification when the request fails
    pub global_error: bool,
}

impl RequestConfig {
    /// Options with global error notification enabled
    pub fn global() -> Self {
        Self { global_error: true }
    }
}

/// Parse a response body leniently: empty bodies are `null` and non-JSON
/// bodies are kept as a string
pub(crate) fn parse_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Decode the `data` member of a successful envelope
pub(crate) fn decode_data<T: DeserializeOwned>(
    status: StatusCode,
    payload: Value,
) -> Result<T, RequestError> {
    let data = match payload {
        Value::Object(mut envelope) => envelope.remove("data").unwrap_or(Value::Null),
        other => other,
    };

    serde_json::from_value(data).map_err(|e| {
        RequestError::new(status.as_u16(), format!("Invalid response body: {}", e))
    })
}

/// Build the error for a non-2xx response
pub(crate) fn error_from_response(status: StatusCode, payload: Value) -> RequestError {
    let message = payload
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    let error = RequestError::new(status.as_u16(), message);
    if payload.is_null() {
        error
    } else {
        error.with_response(payload)
    }
}
