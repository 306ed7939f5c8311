pub mod error;
pub mod models;
pub mod user_validator;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::user::User;
pub use models::user_draft::UserDraft;
pub use models::user_patch::UserPatch;
pub use user_validator::{MISSING_REQUIRED_FIELDS, UserValidator};
