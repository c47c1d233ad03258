use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use envmon_core::EnvmonError;
use serde::Serialize;

/// Unified API error type
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self { status: StatusCode::NOT_FOUND, message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, message: message.into() }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message };
        (self.status, Json(body)).into_response()
    }
}

impl From<EnvmonError> for ApiError {
    fn from(err: EnvmonError) -> Self {
        if err.is_validation() {
            return Self::bad_request(err.to_string());
        }
        // Dataset failures are logged with their cause but reported
        // generically; filesystem detail never reaches the client.
        tracing::error!(error = %err, "Dataset load failed");
        Self::internal("Failed to load samples")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let err = ApiError::from(EnvmonError::InvalidZone { value: "ocean".to_string() });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Invalid zone: ocean");
    }

    #[test]
    fn dataset_errors_map_to_generic_internal() {
        let err = ApiError::from(EnvmonError::DatasetUnavailable {
            reason: "failed to read /secret/path: No such file".to_string(),
        });
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to load samples");
    }
}
