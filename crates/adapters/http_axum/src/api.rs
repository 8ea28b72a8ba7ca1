//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod devices;
#[allow(clippy::missing_errors_doc)]
pub mod login;
pub mod status;

use axum::Router;
use axum::routing::{get, post};

use leaserelay_app::ports::RouterApi;

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: RouterApi + 'static,
{
    Router::new()
        .route("/devices", get(devices::list::<R>))
        .route("/status", get(status::get::<R>))
        .route("/login", post(login::login::<R>))
}
