use uc_core::UserDraft;

/// Draft for "Alice", the default fixture user
pub fn alice() -> UserDraft {
    create_test_draft("Alice", "alice@example.com")
}

pub fn create_test_draft(name: &str, email: &str) -> UserDraft {
    UserDraft {
        name: name.to_string(),
        email: email.to_string(),
    }
}
