//! Request extractors that report failures inside the envelope.

use std::marker::PhantomData;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;

/// `Json<T>` whose rejection (bad syntax, wrong types, missing content type)
/// becomes a 400 validation envelope instead of axum's plain-text body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::Validation(rejection.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// `Query<T>` with the same treatment: a query string that does not
/// deserialize (duplicate keys, wrong types) answers 400 in the envelope.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| ApiError::Validation(rejection.body_text()))?;
        Ok(QueryParams(value))
    }
}

/// Resource addressed by `/{id}`; names the 404 message for that resource.
pub trait PathResource {
    const NOT_FOUND: &'static str;
}

/// The `{id}` path segment parsed as a UUID. Anything that is not one
/// (undecodable bytes included) answers 404 with `R::NOT_FOUND`.
pub struct PathId<R>(pub Uuid, pub PhantomData<R>);

impl<S, R> FromRequestParts<S> for PathId<R>
where
    S: Send + Sync,
    R: PathResource + Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!("Rejected path id: {}", rejection.body_text());
                ApiError::NotFound(R::NOT_FOUND.to_string())
            })?;
        let id = parse_path_id(&raw, R::NOT_FOUND)?;
        Ok(PathId(id, PhantomData))
    }
}

/// Parse a path id; malformed ids answer 404 with `not_found`.
pub fn parse_path_id(raw: &str, not_found: &str) -> Result<Uuid, ApiError> {
    resto_shared::parse_id(raw).ok_or_else(|| ApiError::NotFound(not_found.to_string()))
}
