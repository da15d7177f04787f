//! Custom Axum extractors
//!
//! Each one turns axum's own rejection into an [`ApiError`] so clients get
//! the JSON error body instead of a plain-text 400.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{PaginationParams, ValidationError};

/// Raw `?page=` value, 1 when absent.
///
/// Range checks are left to the listing itself; this only rejects values
/// that aren't integers.
pub struct PageParam(pub i64);

impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PaginationParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "page",
                    reason: "must be an integer",
                })
            })?;

        Ok(Self(params.page.unwrap_or(1)))
    }
}

/// Integer id from the path. Anything else is treated as an unknown route.
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "route",
                id: parts.uri.path().to_owned(),
            })?;

        let id = raw.parse::<i32>().map_err(|_| ApiError::NotFound {
            resource: "route",
            id: parts.uri.path().to_owned(),
        })?;

        Ok(Self(id))
    }
}

/// JSON body whose rejections are validation errors.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "rejected request body");
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "body",
                reason: "expected a JSON object with the documented fields",
            })
        })?;

        Ok(Self(value))
    }
}
