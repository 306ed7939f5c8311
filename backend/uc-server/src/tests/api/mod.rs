mod error;
mod user_id;
