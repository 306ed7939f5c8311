use serde::Serialize;

/// Confirmation body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: i64,
}
