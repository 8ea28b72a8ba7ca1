//! Connectivity probe: is the router answering right now?

use crate::ports::RouterApi;

/// Call the router's system resource endpoint and report reachability.
///
/// Runs the network call every time; the result is never cached. The
/// failure reason is swallowed; the router client has already logged it.
pub async fn is_reachable<R: RouterApi>(router: &R) -> bool {
    match router.system_resource().await {
        Ok(()) => {
            tracing::debug!("router reachable");
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, timeout = err.is_timeout(), "router unreachable");
            false
        }
    }
}
