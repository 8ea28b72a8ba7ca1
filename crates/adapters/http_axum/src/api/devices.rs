//! JSON handler for connected devices.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use leaserelay_app::ports::RouterApi;
use leaserelay_domain::lease::DeviceRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<DeviceRecord>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /devices`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: RouterApi + 'static,
{
    let devices = state.device_service.list_devices().await?;
    Ok(ListResponse::Ok(Json(devices)))
}
