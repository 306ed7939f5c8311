//! Persistence port for users.
//!
//! Handlers only ever see this trait, so the SQLite repository and any test
//! double are interchangeable behind an `Arc<dyn UserStore>`.

use crate::Result as DbErrorResult;

use uc_core::{User, UserDraft};

use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All live users. Empty vec when there are none.
    async fn list_users(&self) -> DbErrorResult<Vec<User>>;

    /// `DbError::NotFound` if no live user has this id
    async fn get_user_by_id(&self, id: i64) -> DbErrorResult<User>;

    /// `DbError::NotFound` if no live user has this email
    async fn get_user_by_email(&self, email: &str) -> DbErrorResult<User>;

    /// Persist a new user and return it with its assigned id
    async fn create_user(&self, draft: &UserDraft) -> DbErrorResult<User>;

    /// Overwrite name/email of an existing live user and return the stored record
    async fn update_user(&self, user: &User) -> DbErrorResult<User>;

    /// Soft-delete a live user
    async fn delete_user(&self, id: i64) -> DbErrorResult<()>;
}
