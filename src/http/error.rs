//! HTTP error handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::dto::ApiResponse;
use crate::utils::error::ContribError;

pub const USER_NOT_FOUND: &str = "user not found";
pub const SOMETHING_WENT_WRONG: &str = "something went wrong";

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (validation error)
    BadRequest(String),
    /// Remote user does not exist
    NotFound,
    /// Any other pipeline failure
    Pipeline(ContribError),
}

impl From<ContribError> for AppError {
    fn from(err: ContribError) -> Self {
        match err {
            ContribError::ValidationError { message, .. } => AppError::BadRequest(message),
            ContribError::NotFound { .. } => AppError::NotFound,
            other => AppError::Pipeline(other),
        }
    }
}

impl From<AppError> for ApiResponse {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(message) => ApiResponse::failure(StatusCode::BAD_REQUEST, message),
            AppError::NotFound => ApiResponse::failure(StatusCode::NOT_FOUND, USER_NOT_FOUND),
            AppError::Pipeline(err) => {
                tracing::error!("❌ Contributions request failed: {}", err);
                ApiResponse::failure(StatusCode::BAD_REQUEST, SOMETHING_WENT_WRONG)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ApiResponse::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let validation = ContribError::ValidationError {
            field: "dayCount".to_string(),
            message: "dayCount out of range".to_string(),
        };
        assert_eq!(
            ApiResponse::from(AppError::from(validation)),
            ApiResponse::failure(StatusCode::BAD_REQUEST, "dayCount out of range")
        );

        let not_found = ContribError::NotFound {
            name: "ghost".to_string(),
        };
        assert_eq!(
            ApiResponse::from(AppError::from(not_found)),
            ApiResponse::failure(StatusCode::NOT_FOUND, USER_NOT_FOUND)
        );

        let failed = ContribError::FetchFailed { status: 500 };
        assert_eq!(
            ApiResponse::from(AppError::from(failed)),
            ApiResponse::failure(StatusCode::BAD_REQUEST, SOMETHING_WENT_WRONG)
        );
    }
}
