//! Device service: connected devices derived from the router's DHCP leases.

use leaserelay_domain::error::RelayError;
use leaserelay_domain::lease::{self, DeviceRecord, LeaseRecord};

use crate::ports::RouterApi;
use crate::services::connectivity;

/// Application service listing the devices currently holding a lease.
pub struct DeviceService<R> {
    router: R,
}

impl<R: RouterApi> DeviceService<R> {
    /// Create a new service backed by the given router client.
    pub fn new(router: R) -> Self {
        Self { router }
    }

    /// Probe the router, then fetch its leases and keep the bound ones.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Unreachable`] when a probe fails (the lease
    /// endpoint is not called), or [`RelayError::Upstream`] when the lease
    /// fetch itself fails.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices(&self) -> Result<Vec<DeviceRecord>, RelayError> {
        if !connectivity::is_reachable(&self.router).await {
            return Err(RelayError::Unreachable);
        }

        let leases = self.fetch_leases().await?;
        let total = leases.len();
        let devices = lease::connected_devices(leases);
        tracing::debug!(total, connected = devices.len(), "filtered DHCP leases");
        Ok(devices)
    }

    /// Fetch the lease table, probing the router again right before it.
    async fn fetch_leases(&self) -> Result<Vec<LeaseRecord>, RelayError> {
        if !connectivity::is_reachable(&self.router).await {
            return Err(RelayError::Unreachable);
        }
        Ok(self.router.dhcp_leases().await?)
    }
}
