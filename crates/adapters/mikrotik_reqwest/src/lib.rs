//! # leaserelay-adapter-mikrotik-reqwest
//!
//! Router adapter talking to the MikroTik RouterOS REST API with
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`RouterApi`](leaserelay_app::ports::RouterApi) port
//! - Authenticate every call with HTTP basic auth
//! - Bound every call with the configured timeout, reporting it distinctly
//! - Map transport, status and decoding failures into
//!   [`UpstreamError`](leaserelay_domain::error::UpstreamError)
//!
//! ## Dependency rule
//! Depends on `leaserelay-app` (for the port trait) and `leaserelay-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod client;
pub mod config;
pub mod error;

pub use client::MikrotikClient;
pub use config::MikrotikConfig;
pub use error::MikrotikError;
