//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into these via
//! `#[from]` or an explicit `From` impl at the port boundary.

/// Failure of a single call to the router's REST API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpstreamError {
    /// The router did not answer within the configured bound.
    #[error("router did not respond within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Transport failure, non-2xx status or undecodable body.
    #[error("{message}")]
    ConnectionFailure { message: String },
}

impl UpstreamError {
    /// Build a [`UpstreamError::ConnectionFailure`] from any displayable error.
    pub fn connection_failure(err: impl std::fmt::Display) -> Self {
        Self::ConnectionFailure {
            message: err.to_string(),
        }
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The reachability probe failed, nothing else was attempted.
    #[error("router is unreachable")]
    Unreachable,

    /// A call to the router failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The client sent a missing or unparseable request body.
    #[error("malformed request")]
    MalformedRequest,
}
