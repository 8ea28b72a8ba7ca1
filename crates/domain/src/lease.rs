//! DHCP leases as reported by the router, and the public device records
//! derived from them.
//!
//! The router returns every lease it knows about. Only leases in the
//! [`BOUND`] state describe a device that currently holds its address, so
//! [`connected_devices`] keeps those and reshapes them into [`DeviceRecord`]s.

use serde::{Deserialize, Serialize};

/// Lease status meaning the address is currently assigned.
pub const BOUND: &str = "bound";

/// Hostname reported for leases whose client did not announce one.
pub const UNNAMED_HOST: &str = "Sin nombre";

/// A lease entry from `GET /rest/ip/dhcp-server/lease`.
///
/// Every field is optional: the router omits keys it has no value for.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LeaseRecord {
    #[serde(rename = "host-name")]
    pub host_name: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "mac-address")]
    pub mac_address: Option<String>,
    pub comment: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "last-seen")]
    pub last_seen: Option<String>,
}

impl LeaseRecord {
    /// Whether the lease status is exactly [`BOUND`].
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.status.as_deref() == Some(BOUND)
    }
}

/// A connected device, as served on `GET /devices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub hostname: String,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub comment: String,
    pub status: Option<String>,
    pub last_seen: String,
}

impl From<LeaseRecord> for DeviceRecord {
    fn from(lease: LeaseRecord) -> Self {
        Self {
            hostname: lease.host_name.unwrap_or_else(|| UNNAMED_HOST.to_string()),
            ip_address: lease.address,
            mac_address: lease.mac_address,
            comment: lease.comment.unwrap_or_default(),
            status: lease.status,
            last_seen: lease.last_seen.unwrap_or_default(),
        }
    }
}

/// Keep the bound leases, in their original order, as device records.
pub fn connected_devices<I>(leases: I) -> Vec<DeviceRecord>
where
    I: IntoIterator<Item = LeaseRecord>,
{
    leases
        .into_iter()
        .filter(LeaseRecord::is_bound)
        .map(DeviceRecord::from)
        .collect()
}
