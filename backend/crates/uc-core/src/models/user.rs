//! User entity - the single resource served by the API.

use chrono::{DateTime, Utc};

/// A persisted user account.
///
/// `id` is assigned by the store on creation and never changes afterwards.
/// Bookkeeping timestamps are owned by the store; handlers treat them as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    /// Unique across live users
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Bump `updated_at` to now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
