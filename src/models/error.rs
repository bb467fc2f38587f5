use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;
use thiserror::Error;

/// Error returned by a view; rendered as `{"message": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl ApiError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"message": message})),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for ApiError {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string())
    }
}

/// Why a read against the telemetry source produced no records.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, timeout, or connection reset.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The source answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The payload was not an array of the expected records.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn status(status: u16, url: impl Into<String>) -> Self {
        Self::Status {
            status,
            url: url.into(),
        }
    }
}
