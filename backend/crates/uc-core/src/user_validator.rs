use crate::{CoreError, Result as CoreErrorResult, UserDraft, UserPatch};

use std::panic::Location;

use error_location::ErrorLocation;

/// Message returned when a create request lacks `name` or `email`
pub const MISSING_REQUIRED_FIELDS: &str = "Missing Required Fields";

/// Shape checks for user input. Pure: never touches the store.
pub struct UserValidator;

impl UserValidator {
    /// Validate the fields of a create request and build a draft from them.
    ///
    /// Both fields are required and must contain something other than whitespace.
    /// The returned draft carries trimmed values.
    #[track_caller]
    pub fn validate_draft(name: Option<&str>, email: Option<&str>) -> CoreErrorResult<UserDraft> {
        let name = Self::required(name, "name")?;
        let email = Self::required(email, "email")?;

        Ok(UserDraft { name, email })
    }

    /// Validate a partial update.
    ///
    /// Absent fields are fine; a present field must not be blank.
    #[track_caller]
    pub fn validate_patch(patch: UserPatch) -> CoreErrorResult<UserPatch> {
        let name = patch
            .name
            .as_deref()
            .map(|n| Self::not_blank(n, "name"))
            .transpose()?;
        let email = patch
            .email
            .as_deref()
            .map(|e| Self::not_blank(e, "email"))
            .transpose()?;

        Ok(UserPatch { name, email })
    }

    #[track_caller]
    fn required(value: Option<&str>, field: &str) -> CoreErrorResult<String> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(CoreError::Validation {
                message: MISSING_REQUIRED_FIELDS.to_string(),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    #[track_caller]
    fn not_blank(value: &str, field: &str) -> CoreErrorResult<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation {
                message: format!("{} cannot be empty", field),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(trimmed.to_string())
    }
}
