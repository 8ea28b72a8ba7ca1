//! JSON handler for the service status report.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use leaserelay_app::ports::RouterApi;
use leaserelay_domain::status::ServiceStatus;

use crate::state::AppState;

/// Possible responses from the status endpoint.
///
/// Both carry the same body; only the HTTP status differs.
pub enum StatusResponse {
    Connected(Json<ServiceStatus>),
    Disconnected(Json<ServiceStatus>),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Connected(json) => json.into_response(),
            Self::Disconnected(json) => (StatusCode::SERVICE_UNAVAILABLE, json).into_response(),
        }
    }
}

/// `GET /status`
pub async fn get<R>(State(state): State<AppState<R>>) -> StatusResponse
where
    R: RouterApi + 'static,
{
    let status = state.status_service.status().await;
    if status.mikrotik_connection {
        StatusResponse::Connected(Json(status))
    } else {
        StatusResponse::Disconnected(Json(status))
    }
}
