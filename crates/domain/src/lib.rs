//! # leaserelay-domain
//!
//! Pure domain model for the leaserelay DHCP lease relay.
//!
//! ## Responsibilities
//! - Foundational types: error conventions
//! - Define **Lease records** as returned by the router and the filter that
//!   turns them into public **Device records**
//! - Define **Credentials** and the login comparison rule
//! - Define the **Service status** payload
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod credentials;
pub mod lease;
pub mod status;
