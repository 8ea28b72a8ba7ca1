//! Service status payload served on `GET /status`.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Constant marker telling clients the relay process itself is up.
pub const RUNNING: &str = "running";

/// Snapshot of the relay and its router connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub service: &'static str,
    pub mikrotik_connection: bool,
    pub mikrotik_host: String,
    pub timestamp: DateTime<Utc>,
}

impl ServiceStatus {
    /// Status stamped with the current UTC time.
    pub fn now(mikrotik_connection: bool, mikrotik_host: impl Into<String>) -> Self {
        Self {
            service: RUNNING,
            mikrotik_connection,
            mikrotik_host: mikrotik_host.into(),
            timestamp: Utc::now(),
        }
    }
}
