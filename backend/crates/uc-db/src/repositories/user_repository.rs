//! SQLite-backed user store.
//!
//! Deletes are soft: `deleted_at` is stamped and the row stays put, so its id
//! is never reused. Every query filters on `deleted_at IS NULL`.

use crate::{DbError, Result as DbErrorResult, UserStore};

use uc_core::{User, UserDraft};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const ENTITY: &str = "User";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: r.id,
            name: r.name,
            email: r.email,
            created_at: timestamp(r.created_at, "users.created_at")?,
            updated_at: timestamp(r.updated_at, "users.updated_at")?,
            deleted_at: r.deleted_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
        })
    }
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Decode {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn list_users(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, created_at, updated_at, deleted_at
                FROM users
                WHERE deleted_at IS NULL
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(User::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    async fn get_user_by_id(&self, id: i64) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, created_at, updated_at, deleted_at
                FROM users
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| DbError::not_found(ENTITY, id))?
            .try_into()
    }

    async fn get_user_by_email(&self, email: &str) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, created_at, updated_at, deleted_at
                FROM users
                WHERE email = ? AND deleted_at IS NULL
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| DbError::not_found(ENTITY, email))?
            .try_into()
    }

    async fn create_user(&self, draft: &UserDraft) -> DbErrorResult<User> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (name, email, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        log::debug!("Inserted user {} ({})", id, draft.email);

        self.get_user_by_id(id).await
    }

    async fn update_user(&self, user: &User) -> DbErrorResult<User> {
        let updated_at = user.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET name = ?, email = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(updated_at)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, user.id));
        }

        self.get_user_by_id(user.id).await
    }

    async fn delete_user(&self, id: i64) -> DbErrorResult<()> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET deleted_at = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        Ok(())
    }
}
