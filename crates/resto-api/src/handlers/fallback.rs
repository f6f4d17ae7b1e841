//! Envelope responses for requests no route answers.

use axum::{extract::OriginalUri, http::Method};

use crate::error::ApiError;

/// Unmatched path
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("Route {} not found", uri.path()))
}

/// Known path, unsupported method
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {} not allowed on {}", method, uri.path()))
}
