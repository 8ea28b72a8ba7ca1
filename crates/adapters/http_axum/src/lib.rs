//! # leaserelay-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API consumed by the frontend
//!   (`/devices`, `/status`, `/login`, plus `/health`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP status codes and JSON bodies
//! - Attach permissive CORS headers and request tracing
//!
//! ## Dependency rule
//! Depends on `leaserelay-app` (for the port trait and services) and
//! `leaserelay-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
