pub mod user;
pub mod user_draft;
pub mod user_patch;
