//! Shared error type across tmstats crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed payload.
    BadRequest,
    /// No handler registered for the requested path.
    RouteNotFound,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error (collector, encoder, I/O).
    Internal,
}

impl ClientCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::RouteNotFound => "ROUTE_NOT_FOUND",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("route not found: {0}")]
    RouteNotFound(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("collector failure: {0}")]
    CollectorFailure(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StatsError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StatsError::BadRequest(_) => ClientCode::BadRequest,
            StatsError::RouteNotFound(_) => ClientCode::RouteNotFound,
            StatsError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            StatsError::CollectorFailure(_)
            | StatsError::Encode(_)
            | StatsError::Internal(_) => ClientCode::Internal,
        }
    }
}

impl From<prost::DecodeError> for StatsError {
    fn from(e: prost::DecodeError) -> Self {
        StatsError::BadRequest(format!("undecodable payload: {e}"))
    }
}

impl From<prost::EncodeError> for StatsError {
    fn from(e: prost::EncodeError) -> Self {
        StatsError::Encode(e.to_string())
    }
}
