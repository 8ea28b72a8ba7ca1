//! RouterOS REST client.
//!
//! Wraps `reqwest::Client` with basic auth, the configured timeout and URL
//! construction relative to the router host. Every call is a single attempt
//! over a fresh connection: idle connections are never pooled.

use std::future::Future;

use reqwest::Response;
use serde::de::DeserializeOwned;

use leaserelay_app::ports::RouterApi;
use leaserelay_domain::error::UpstreamError;
use leaserelay_domain::lease::LeaseRecord;

use crate::config::MikrotikConfig;
use crate::error::MikrotikError;

/// Lightweight endpoint used as a liveness probe.
pub const SYSTEM_RESOURCE_PATH: &str = "/rest/system/resource";

/// DHCP server lease table.
pub const DHCP_LEASE_PATH: &str = "/rest/ip/dhcp-server/lease";

/// Authenticated HTTP client for one MikroTik router.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
/// It keeps no idle connections, so no socket outlives its request.
#[derive(Clone)]
pub struct MikrotikClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    timeout_secs: u64,
}

impl MikrotikClient {
    /// Build a client from the router configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MikrotikError::Build`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &MikrotikConfig) -> Result<Self, MikrotikError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(concat!("leaserelay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(MikrotikError::Build)?;

        Ok(Self {
            http,
            base_url: config.host.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// The router base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send an authenticated GET and require a 2xx status.
    async fn send(&self, path: &str) -> Result<Response, MikrotikError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|err| MikrotikError::from_reqwest(&url, self.timeout_secs, err))
            .inspect_err(|err| tracing::warn!(error = %err, "router request failed"))?;

        let status = resp.status();
        if !status.is_success() {
            let err = MikrotikError::Status {
                url,
                status: status.as_u16(),
            };
            tracing::warn!(error = %err, "router rejected request");
            return Err(err);
        }

        tracing::debug!(%url, status = status.as_u16(), "router responded");
        Ok(resp)
    }

    /// GET `path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`MikrotikError::Timeout`] when the bound elapses,
    /// [`MikrotikError::Status`] on a non-2xx answer, and
    /// [`MikrotikError::Transport`] or [`MikrotikError::Decode`] otherwise.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, MikrotikError> {
        let resp = self.send(path).await?;
        resp.json::<T>()
            .await
            .map_err(|err| MikrotikError::from_reqwest(&self.url(path), self.timeout_secs, err))
            .inspect_err(|err| tracing::warn!(error = %err, "failed to read router response"))
    }
}

impl RouterApi for MikrotikClient {
    fn system_resource(&self) -> impl Future<Output = Result<(), UpstreamError>> + Send {
        async move {
            self.send(SYSTEM_RESOURCE_PATH).await?;
            Ok(())
        }
    }

    fn dhcp_leases(&self) -> impl Future<Output = Result<Vec<LeaseRecord>, UpstreamError>> + Send {
        async move {
            let leases: Vec<LeaseRecord> = self.get_json(DHCP_LEASE_PATH).await?;
            tracing::debug!(count = leases.len(), "fetched DHCP leases");
            Ok(leases)
        }
    }
}
