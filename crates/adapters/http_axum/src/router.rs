//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use leaserelay_app::ports::RouterApi;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the JSON API at the root next to a `/health` liveness check.
/// Includes a permissive [`CorsLayer`] so a browser frontend on another
/// origin can call the relay, and a [`TraceLayer`] that logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: RouterApi + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes::<R>())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
