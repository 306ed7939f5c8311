use serde::Deserialize;

/// Body of `POST /users`.
///
/// Both fields are optional at the decoding stage so that a missing field is
/// reported by the validator rather than as a decode failure.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}
