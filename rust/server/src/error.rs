use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

/// Request-level failure carrying the HTTP status and the caught error.
#[derive(Debug)]
pub struct ApiError {
    pub message: &'static str,
    pub err: anyhow::Error,
    pub status_code: StatusCode,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("request failed: {:#}", self.err);
        let body = ErrorResponse {
            message: self.message.to_owned(),
            error: Some(self.err.to_string()),
        };
        (self.status_code, Json(body)).into_response()
    }
}

impl From<mdx_export::Error> for ApiError {
    fn from(err: mdx_export::Error) -> Self {
        Self {
            message: "Error generating export",
            err: err.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            message: "Error generating export",
            err,
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
