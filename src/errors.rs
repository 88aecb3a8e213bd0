use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error; // Use thiserror for cleaner error definitions

// --- Domain Errors ---

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Duplicate short ID in initial feed data: {0}")]
    DuplicateId(u64),
    #[error("Short ID {0} is above the highest seedable ID")]
    IdOutOfRange(u64),
    #[error("Short {0} is marked liked but has no likes")]
    InconsistentLike(u64),
}

// --- Web Layer Error ---

#[derive(Error, Debug)]
pub enum AppError {
    // Input validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Short not found with ID: {0}")]
    ShortNotFound(u64),

    // Startup / server errors
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

// --- Axum Response Implementation ---

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // 4xx Client Errors
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::ShortNotFound(id) => (StatusCode::NOT_FOUND, format!("Short not found with ID: {}", id)),

            // 5xx Server Errors
            AppError::InternalServerError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "An internal server error occurred".to_string())
            }
        };

        if status.is_server_error() {
            tracing::error!(error.message = %error_message, error.detail = %self, "Responding with error");
        } else {
            tracing::debug!(error.message = %error_message, status = %status, "Responding with client error");
        }

        let body = Json(serde_json::json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::ShortNotFound(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_input_maps_to_400() {
        let response = AppError::InvalidInput("blank".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_hide_details() {
        let err: AppError = SeedError::DuplicateId(2).into();
        assert_eq!(err.to_string(), "Internal server error: Duplicate short ID in initial feed data: 2");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
