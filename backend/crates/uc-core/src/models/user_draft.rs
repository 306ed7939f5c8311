/// Caller-supplied fields for a new user, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}
