//! Shared application state for axum handlers.

use std::sync::Arc;

use leaserelay_app::ports::RouterApi;
use leaserelay_app::services::auth_service::AuthService;
use leaserelay_app::services::device_service::DeviceService;
use leaserelay_app::services::status_service::StatusService;

/// Application state shared across all axum handlers.
///
/// Generic over the router client to avoid dynamic dispatch.
/// `Clone` is implemented manually so the client type itself does not need
/// to be `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Probe-gated DHCP lease listing.
    pub device_service: Arc<DeviceService<R>>,
    /// Router reachability report.
    pub status_service: Arc<StatusService<R>>,
    /// Stateless credential check.
    pub auth_service: Arc<AuthService>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            device_service: Arc::clone(&self.device_service),
            status_service: Arc::clone(&self.status_service),
            auth_service: Arc::clone(&self.auth_service),
        }
    }
}

impl<R> AppState<R>
where
    R: RouterApi + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        device_service: DeviceService<R>,
        status_service: StatusService<R>,
        auth_service: AuthService,
    ) -> Self {
        Self {
            device_service: Arc::new(device_service),
            status_service: Arc::new(status_service),
            auth_service: Arc::new(auth_service),
        }
    }

    /// Create a new application state from pre-wrapped `Arc` services.
    ///
    /// Use this when a service is also needed outside the HTTP layer, such
    /// as the startup connectivity check.
    pub fn from_arcs(
        device_service: Arc<DeviceService<R>>,
        status_service: Arc<StatusService<R>>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            device_service,
            status_service,
            auth_service,
        }
    }
}
