//! Global application error types and handlers.
//!
//! This module defines the gateway-wide error type and its mapping onto HTTP
//! responses, so every handler can bubble failures with `?` and still produce
//! the stable `{"error": {"message", "type"}}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use coursechat_adapters::ApiError;

/// Failures a gateway handler can produce.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A backend call failed; the variant inside decides the mapping.
    #[error(transparent)]
    Upstream(#[from] ApiError),

    /// The route needs a session token and the request carried none.
    #[error("authentication required")]
    Unauthorized,

    /// The request itself was malformed (bad course label, bad department).
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    message: String,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl GatewayError {
    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            Self::Upstream(ApiError::Transport(_)) => {
                (StatusCode::BAD_GATEWAY, "upstream_unreachable")
            }
            Self::Upstream(ApiError::Status { .. }) => (StatusCode::BAD_GATEWAY, "upstream_status"),
            Self::Upstream(ApiError::Decode { .. }) => (StatusCode::BAD_GATEWAY, "upstream_decode"),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();

        if status.is_server_error() {
            tracing::warn!(error = %self, status = status.as_u16(), "request failed");
        }

        let body = ErrorBody {
            error: ErrorDetail { message: self.to_string(), kind },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_401() {
        let response = GatewayError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = GatewayError::BadRequest("no".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_status_maps_to_502() {
        let err = GatewayError::Upstream(ApiError::Status { endpoint: "/user/groups", status: 500 });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn upstream_decode_maps_to_502() {
        let err = GatewayError::Upstream(ApiError::Decode {
            endpoint: "/group/history",
            message: "expected array".into(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
