//! Error types for the CoinSwitch client library.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// The main error type for all CoinSwitch client operations.
#[derive(Error, Debug)]
pub enum CoinSwitchError {
    /// The HTTP round trip failed (connect, TLS, timeout or body read).
    ///
    /// Transport failures are never retried by the client.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// CoinSwitch answered with a non-success status or a failed envelope.
    #[error("CoinSwitch API error: {0}")]
    Api(ApiError),

    /// CoinSwitch rejected the access key (HTTP 401 or 403).
    #[error("Unauthorized: {0}")]
    Unauthorized(ApiError),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {source}. Body: {body}")]
    Decode {
        /// Raw response body, kept for diagnosis
        body: String,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Request parameters could not be encoded for the wire.
    #[error("Invalid request parameters: {0}")]
    InvalidParams(String),
}

impl From<reqwest::Error> for CoinSwitchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.into())
    }
}

impl CoinSwitchError {
    /// Build the error matching a non-success HTTP response.
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        let error = ApiError::from_body(status.as_u16(), body);
        if error.is_unauthorized() {
            Self::Unauthorized(error)
        } else {
            Self::Api(error)
        }
    }

    /// HTTP status code carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) | Self::Unauthorized(err) => Some(err.status),
            Self::Transport(reqwest_middleware::Error::Reqwest(err)) => {
                err.status().map(|s| s.as_u16())
            }
            _ => None,
        }
    }

    /// Check if the server rejected the credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Check if the transport gave up waiting for the server.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(reqwest_middleware::Error::Reqwest(err)) => err.is_timeout(),
            _ => false,
        }
    }
}

/// Error reported by the CoinSwitch API.
///
/// The server's `code` and `message` are filled in when the body is a JSON
/// error object; the raw body is always kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Error code reported by CoinSwitch, if any
    pub code: Option<String>,
    /// Human-readable error message, if any
    pub message: Option<String>,
    /// Raw response body
    pub body: String,
}

/// Shape of a CoinSwitch error body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Create a new API error from a status code and raw body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: None,
            body: body.into(),
        }
    }

    /// Parse an API error out of a response body, falling back to the raw text.
    pub fn from_body(status: u16, body: String) -> Self {
        match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => Self {
                status,
                code: parsed.code.map(|code| match code {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                }),
                message: parsed.message.or(parsed.error),
                body,
            },
            Err(_) => Self::new(status, body),
        }
    }

    /// Check if this error means the access key was rejected.
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED.as_u16()
            || self.status == StatusCode::FORBIDDEN.as_u16()
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND.as_u16()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "HTTP {} {}: {}", self.status, code, message),
            (None, Some(message)) => write!(f, "HTTP {}: {}", self.status, message),
            _ => write!(f, "HTTP {}: {}", self.status, self.body),
        }
    }
}
