pub mod error;
pub mod migrations;
pub mod repositories;
pub mod user_store;

pub use error::{DbError, Result};
pub use migrations::run_migrations;
pub use repositories::user_repository::UserRepository;
pub use user_store::UserStore;
