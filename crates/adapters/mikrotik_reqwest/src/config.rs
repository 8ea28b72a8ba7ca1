//! MikroTik router connection configuration.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use leaserelay_domain::credentials::Credentials;

/// Connection settings for the router's REST API.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MikrotikConfig {
    /// Base URL of the router, scheme included (e.g. `http://192.168.88.1`).
    pub host: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Upper bound for a single REST call, in seconds.
    pub timeout_secs: u64,
    /// Accept self-signed router certificates on `https://` hosts.
    pub accept_invalid_certs: bool,
}

impl MikrotikConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The router username/password, also accepted by `POST /login`.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }
}

impl Default for MikrotikConfig {
    fn default() -> Self {
        Self {
            host: "http://192.168.88.1".to_string(),
            username: "admin".to_string(),
            password: "1234567890".to_string(),
            timeout_secs: 10,
            accept_invalid_certs: false,
        }
    }
}

impl fmt::Debug for MikrotikConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MikrotikConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"***")
            .field("timeout_secs", &self.timeout_secs)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}
