//! JSON handler for the credential check.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use leaserelay_app::ports::RouterApi;
use leaserelay_app::services::auth_service::LoginOutcome;
use leaserelay_domain::credentials::LoginAttempt;

use crate::error::ApiError;
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Login exitoso";
pub const REJECTED_MESSAGE: &str = "Credenciales incorrectas";

/// Body of every `/login` response.
#[derive(Serialize)]
pub struct LoginBody {
    pub success: bool,
    pub message: &'static str,
}

/// Possible responses from the login endpoint.
pub enum LoginResponse {
    Accepted,
    Rejected,
}

impl IntoResponse for LoginResponse {
    fn into_response(self) -> Response {
        let (status, success, message) = match self {
            Self::Accepted => (StatusCode::OK, true, SUCCESS_MESSAGE),
            Self::Rejected => (StatusCode::UNAUTHORIZED, false, REJECTED_MESSAGE),
        };
        (status, Json(LoginBody { success, message })).into_response()
    }
}

/// `POST /login`
///
/// A missing, non-JSON, `null` or non-object body is answered with 400
/// rather than axum's default rejection. Any JSON object is compared, so a
/// field that is absent or not a string simply fails the check.
pub async fn login<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<LoginResponse, ApiError>
where
    R: RouterApi + 'static,
{
    let attempt = match payload {
        Ok(Json(value)) => attempt_from(&value),
        Err(rejection) => {
            tracing::debug!(%rejection, "unusable login body");
            None
        }
    };

    match state.auth_service.login(attempt.as_ref())? {
        LoginOutcome::Accepted => Ok(LoginResponse::Accepted),
        LoginOutcome::Rejected => Ok(LoginResponse::Rejected),
    }
}

/// Read `username` and `password` from a JSON object, ignoring non-strings.
fn attempt_from(value: &Value) -> Option<LoginAttempt> {
    let fields = value.as_object()?;
    let field = |name: &str| fields.get(name).and_then(Value::as_str).map(str::to_string);
    Some(LoginAttempt {
        username: field("username"),
        password: field("password"),
    })
}
