//! Extractor for the `{id}` path parameter on `/users/{id}`

use crate::{ApiError, ApiResult};

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use error_location::ErrorLocation;

/// Message returned for any id that is not a positive integer
pub const INVALID_ID: &str = "Invalid ID";

/// A user id taken from the path, already parsed and range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdParam(pub i64);

/// Parse a raw path segment as a user id. Only positive integers are ids.
#[track_caller]
pub fn parse_user_id(raw: &str) -> ApiResult<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadRequest {
            message: INVALID_ID.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    log::debug!("Unreadable id path segment: {}", e);
                    ApiError::BadRequest {
                        message: INVALID_ID.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;

            parse_user_id(&raw).map(UserIdParam)
        }
    }
}
