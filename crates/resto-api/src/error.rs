// ============================================================================
// Resto API - Error Mapping
// File: crates/resto-api/src/error.rs
// ============================================================================

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use resto_core::error::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::CategoryNotFound | DomainError::MenuItemNotFound => {
                ApiError::NotFound(err.to_string())
            }
            DomainError::ValidationError(msg) => ApiError::Validation(msg),
            DomainError::CategoryInUse { .. } => ApiError::Conflict(err.to_string()),
            DomainError::DatabaseError(_) => ApiError::Database(err.to_string()),
            DomainError::InternalError(_) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            ApiError::MethodNotAllowed(msg) => {
                tracing::warn!("Method not allowed: {}", msg);
                (StatusCode::METHOD_NOT_ALLOWED, msg)
            }
            ApiError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                (StatusCode::CONFLICT, msg)
            }
            ApiError::Database(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("{}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn status_of(err: DomainError) -> StatusCode {
        ApiError::from(err).into_response().status()
    }

    #[test]
    fn test_domain_errors_map_to_status_codes() {
        assert_eq!(status_of(DomainError::CategoryNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_of(DomainError::MenuItemNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(DomainError::ValidationError("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::CategoryInUse { category_id: Uuid::new_v4(), count: 2 }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DomainError::DatabaseError("down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(DomainError::InternalError("oops".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = ApiError::from(DomainError::ValidationError(
            "Category validation failed: name: Please provide a category name".into(),
        ));
        assert_eq!(
            err.to_string(),
            "Category validation failed: name: Please provide a category name"
        );
    }
}
