/*
[INPUT]:  Error sources (HTTP transport, gateway responses, JSON decoding)
[OUTPUT]: Structured error types shared by both client front-ends
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Main error type for the CryptAPI adapter
#[derive(Error, Debug)]
pub enum CryptApiError {
    /// Session construction rejected (empty coin, address, or callback URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// The gateway explicitly reported failure; message is verbatim
    #[error("gateway error: {message}")]
    Gateway { message: String },

    /// HTTP request failed (network, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Base URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl CryptApiError {
    /// Check if the error came from the transport rather than the gateway
    pub fn is_transport(&self) -> bool {
        matches!(self, CryptApiError::Http(_) | CryptApiError::Json(_))
    }

    /// Check if the error is a gateway-reported failure
    pub fn is_gateway(&self) -> bool {
        matches!(self, CryptApiError::Gateway { .. })
    }
}

/// Result type alias for CryptAPI operations
pub type Result<T> = std::result::Result<T, CryptApiError>;

/// Error envelope convention shared by every gateway endpoint
#[derive(Debug, Default, Deserialize)]
struct GatewayEnvelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Map the gateway's error convention onto [`CryptApiError`].
///
/// A body with `"status": "error"` fails with the body's `error` field
/// verbatim; any other decoded object is returned whole.
pub(crate) fn gateway_check(body: Value) -> Result<Value> {
    let envelope = GatewayEnvelope::deserialize(&body).unwrap_or_default();

    if envelope.status.as_deref() == Some("error") {
        let message = envelope.error.unwrap_or_default();
        warn!(message = %message, "gateway reported error");
        return Err(CryptApiError::Gateway { message });
    }

    Ok(body)
}
