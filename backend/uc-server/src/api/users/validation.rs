//! Store-backed preconditions for user writes

use crate::{ApiError, ApiResult};

use uc_db::{DbError, UserStore};

use std::panic::Location;

use error_location::ErrorLocation;

/// Fail with 409 if a live user already owns `email`.
///
/// Only "not found" counts as available; any other store failure is propagated.
pub async fn ensure_email_available(store: &dyn UserStore, email: &str) -> ApiResult<()> {
    match store.get_user_by_email(email).await {
        Ok(existing) => {
            log::debug!("Email {} already taken by user {}", email, existing.id);
            Err(ApiError::Conflict {
                message: format!("{} already exists", email),
                location: ErrorLocation::from(Location::caller()),
            })
        }
        Err(e) if e.is_not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Map a unique-index rejection on insert to the same 409 the pre-check gives.
///
/// Covers a concurrent create that lands between the lookup and the insert.
#[track_caller]
pub fn email_conflict(e: DbError, email: &str) -> ApiError {
    match e {
        DbError::Conflict { .. } => {
            log::debug!("Insert for {} lost a race on the email index", email);
            ApiError::Conflict {
                message: format!("{} already exists", email),
                location: ErrorLocation::from(Location::caller()),
            }
        }
        other => other.into(),
    }
}
