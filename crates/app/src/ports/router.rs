//! Router port: the subset of the router's REST API the relay consumes.

use std::future::Future;

use leaserelay_domain::error::UpstreamError;
use leaserelay_domain::lease::LeaseRecord;

/// Authenticated, single-attempt access to the router.
///
/// Implementations must bound every call with a timeout and report it as
/// [`UpstreamError::Timeout`], distinct from other failures. No retries.
pub trait RouterApi: Send + Sync {
    /// Call the system resource endpoint, discarding the body.
    fn system_resource(&self) -> impl Future<Output = Result<(), UpstreamError>> + Send;

    /// Fetch every DHCP lease, in the order the router returns them.
    fn dhcp_leases(&self) -> impl Future<Output = Result<Vec<LeaseRecord>, UpstreamError>> + Send;
}
