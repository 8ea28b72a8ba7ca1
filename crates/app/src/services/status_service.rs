//! Status service: reports whether the relay can reach its router.

use leaserelay_domain::status::ServiceStatus;

use crate::ports::RouterApi;
use crate::services::connectivity;

/// Application service building the `GET /status` report.
pub struct StatusService<R> {
    router: R,
    host: String,
}

impl<R: RouterApi> StatusService<R> {
    /// Create a new service for the router at `host`.
    ///
    /// `host` is only echoed back in the report.
    pub fn new(router: R, host: impl Into<String>) -> Self {
        Self {
            router,
            host: host.into(),
        }
    }

    /// The router host this service reports on.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Probe the router and return a fresh status snapshot.
    pub async fn status(&self) -> ServiceStatus {
        let reachable = connectivity::is_reachable(&self.router).await;
        ServiceStatus::now(reachable, self.host.clone())
    }
}
