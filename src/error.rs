//! Error types for the Up client
//!
//! Every public operation returns `Result<T, Error>`. Nothing inside the
//! crate recovers from these: a failed page fetch voids the whole call.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The main error type for the Up client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    // ============================================================================
    // Request Construction Errors
    // ============================================================================
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to encode query options: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Request deadline exceeded")]
    DeadlineExceeded,

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("http status {status}: failed to decode error response")]
    UndecodableErrorBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination revisited already fetched page: {url}")]
    PaginationCycle { url: String },

    #[error("Pagination exceeded the page limit of {limit}")]
    PageLimitExceeded { limit: usize },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// True when the caller's cancellation token (or its deadline) ended the call
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// The structured API error, if the server rejected the request
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status code associated with this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            Self::UndecodableErrorBody { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for the Up client
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// API Error Payload
// ============================================================================

/// Error reported by the API for a response with status >= 400
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response
    pub status: u16,
    /// Structured error entries from the body
    pub errors: Vec<ErrorObject>,
}

impl ApiError {
    /// Build from a status code and a decoded error body
    pub fn new(status: u16, body: ErrorResponse) -> Self {
        Self {
            status,
            errors: body.errors,
        }
    }

    /// First error entry, which the API uses for the primary cause
    pub fn first(&self) -> Option<&ErrorObject> {
        self.errors.first()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.first() {
            Some(err) => write!(f, "{}: {}", err.title, err.detail),
            None => f.write_str("unknown error"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Wire shape of an error response body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorObject>,
}

/// A single error entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// HTTP status as a string, e.g. `"404"`
    pub status: String,
    /// Short summary of the problem
    pub title: String,
    /// Human readable explanation
    pub detail: String,
    /// Which part of the request triggered the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

/// Location of the offending input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    /// Query parameter that caused the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    /// JSON pointer into the request body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
}
