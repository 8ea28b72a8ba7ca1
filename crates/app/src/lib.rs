//! # leaserelay-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the router adapter must implement
//!   (driven/outbound port):
//!   - `RouterApi`: system resource probe and DHCP lease listing
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService`: probe-gated lease fetch and filtering
//!   - `StatusService`: service status report
//!   - `AuthService`: stateless credential check
//! - Provide the **connectivity probe** shared by the services above; it
//!   hits the router on every call and never caches
//!
//! ## Dependency rule
//! Depends on `leaserelay-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
