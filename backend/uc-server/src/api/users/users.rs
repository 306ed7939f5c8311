//! User REST API handlers
//!
//! Each handler makes at most one store call per step and maps the outcome
//! straight to a response. Nothing is retried.

use crate::{
    ApiError, ApiResult, AppState, CreateUserRequest, DeleteResponse, UpdateUserRequest,
    UserDto, UserIdParam, email_conflict, ensure_email_available,
};

use uc_core::{MISSING_REQUIRED_FIELDS, UserPatch, UserValidator};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let users = state.store.list_users().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> ApiResult<Json<UserDto>> {
    let user = state.store.get_user_by_id(id).await?;

    Ok(Json(user.into()))
}

/// POST /users
///
/// Shape check, then uniqueness check, then insert. A body that fails the
/// shape check never reaches the store.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let Json(req) =
        payload.map_err(|e| ApiError::from_body_rejection(e, MISSING_REQUIRED_FIELDS))?;

    let draft = UserValidator::validate_draft(req.name.as_deref(), req.email.as_deref())?;

    ensure_email_available(state.store.as_ref(), &draft.email).await?;

    let user = state
        .store
        .create_user(&draft)
        .await
        .map_err(|e| email_conflict(e, &draft.email))?;

    log::info!("Created user {} via REST API", user.id);

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// PUT /users/{id}
///
/// The target must exist before the body is looked at, so an unknown id is
/// 404 whatever the payload. Email uniqueness is not pre-checked here, only
/// on create; a clash caught by the store's unique index is 409.
pub async fn update_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> ApiResult<Json<UserDto>> {
    let mut user = state.store.get_user_by_id(id).await?;

    let Json(req) = payload.map_err(|e| ApiError::from_body_rejection(e, "Invalid request body"))?;

    let patch = UserValidator::validate_patch(UserPatch::from(req))?;

    if !patch.apply_to(&mut user) {
        log::debug!("Update for user {} changed nothing", id);
        return Ok(Json(user.into()));
    }

    user.touch();
    let user = state.store.update_user(&user).await?;

    log::info!("Updated user {} via REST API", id);

    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdParam(id): UserIdParam,
) -> ApiResult<Json<DeleteResponse>> {
    state.store.delete_user(id).await?;

    log::info!("Deleted user {} via REST API", id);

    Ok(Json(DeleteResponse { deleted_id: id }))
}
