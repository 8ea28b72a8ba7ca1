//! MikroTik adapter error types.

use leaserelay_domain::error::UpstreamError;

/// Errors specific to the reqwest-based router client.
#[derive(Debug, thiserror::Error)]
pub enum MikrotikError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// No complete response within the configured bound.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// DNS, connect or I/O failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The router answered with a non-2xx status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON document we expected.
    #[error("invalid response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl MikrotikError {
    /// Classify a reqwest failure for `url`, keeping timeouts distinct.
    pub(crate) fn from_reqwest(url: &str, timeout_secs: u64, err: reqwest::Error) -> Self {
        let url = url.to_string();
        if err.is_timeout() {
            Self::Timeout { url, timeout_secs }
        } else if err.is_decode() {
            Self::Decode { url, source: err }
        } else {
            Self::Transport { url, source: err }
        }
    }
}

impl From<MikrotikError> for UpstreamError {
    fn from(err: MikrotikError) -> Self {
        match err {
            MikrotikError::Timeout { timeout_secs, .. } => Self::Timeout { timeout_secs },
            other => Self::connection_failure(other),
        }
    }
}
