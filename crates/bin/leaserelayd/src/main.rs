//! # leaserelayd: leaserelay daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the MikroTik router client (adapter)
//! - Construct application services, injecting the client via the port trait
//! - Probe the router once at startup (advisory only)
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use leaserelay_adapter_http_axum::state::AppState;
use leaserelay_adapter_mikrotik_reqwest::MikrotikClient;
use leaserelay_app::services::auth_service::AuthService;
use leaserelay_app::services::device_service::DeviceService;
use leaserelay_app::services::status_service::StatusService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();
    tracing::debug!(?config, "configuration loaded");

    // Router client
    let mikrotik = MikrotikClient::new(&config.mikrotik)?;

    // Services
    let device_service = Arc::new(DeviceService::new(mikrotik.clone()));
    let status_service = Arc::new(StatusService::new(mikrotik, config.mikrotik.host.clone()));
    let auth_service = Arc::new(AuthService::new(config.mikrotik.credentials()));

    // Startup probe, advisory only
    let status = status_service.status().await;
    if status.mikrotik_connection {
        tracing::info!(host = %status_service.host(), "router reachable");
    } else {
        tracing::warn!(
            host = %status_service.host(),
            "router unreachable at startup, serving anyway"
        );
    }

    // HTTP
    let state = AppState::from_arcs(device_service, status_service, auth_service);
    let app = leaserelay_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("leaserelayd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("leaserelayd stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received, draining connections");
}
