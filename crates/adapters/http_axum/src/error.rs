//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use leaserelay_domain::error::{RelayError, UpstreamError};

/// Body of a 502 when the router does not answer the probe.
pub const UNREACHABLE_MESSAGE: &str = "No se pudo conectar con el router MikroTik";

/// Body of a 504 when the router is too slow.
pub const TIMEOUT_MESSAGE: &str = "Tiempo de espera agotado al conectar con el router MikroTik";

/// Body of a 400 for a missing or unparseable login body.
pub const MALFORMED_MESSAGE: &str = "No se recibieron datos de login";

/// JSON error body returned by API endpoints.
///
/// Router failures carry `error`; a malformed login keeps the login
/// endpoint's `{success, message}` shape.
#[derive(Serialize)]
#[serde(untagged)]
enum ErrorBody {
    Router { error: String },
    Login { success: bool, message: &'static str },
}

/// Maps [`RelayError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            RelayError::Unreachable => {
                tracing::warn!("router unreachable, request not forwarded");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody::Router {
                        error: UNREACHABLE_MESSAGE.to_string(),
                    },
                )
            }
            RelayError::Upstream(err @ UpstreamError::Timeout { .. }) => {
                tracing::warn!(error = %err, "router timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    ErrorBody::Router {
                        error: TIMEOUT_MESSAGE.to_string(),
                    },
                )
            }
            RelayError::Upstream(err @ UpstreamError::ConnectionFailure { .. }) => {
                tracing::error!(error = %err, "router request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::Router {
                        error: err.to_string(),
                    },
                )
            }
            RelayError::MalformedRequest => (
                StatusCode::BAD_REQUEST,
                ErrorBody::Login {
                    success: false,
                    message: MALFORMED_MESSAGE,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use serde_json::{Value, json};

    use super::*;

    async fn body_of(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn should_map_unreachable_to_bad_gateway() {
        let resp = ApiError::from(RelayError::Unreachable).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn should_map_timeout_to_gateway_timeout() {
        let err = RelayError::from(UpstreamError::Timeout { timeout_secs: 10 });
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn should_map_connection_failure_to_internal_error() {
        let err = RelayError::from(UpstreamError::connection_failure("boom"));
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn should_map_connection_failure_message_into_error_field() {
        let err = RelayError::from(UpstreamError::connection_failure("boom"));
        let body = body_of(ApiError::from(err).into_response()).await;
        assert_eq!(body, json!({"error": "boom"}));
    }

    #[tokio::test]
    async fn should_map_malformed_request_to_bad_request_login_body() {
        let resp = ApiError::from(RelayError::MalformedRequest).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = body_of(resp).await;
        assert_eq!(
            body,
            json!({"success": false, "message": MALFORMED_MESSAGE})
        );
    }
}
