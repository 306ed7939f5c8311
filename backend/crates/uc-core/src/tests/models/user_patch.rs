use crate::{User, UserPatch};

use chrono::Utc;

fn sample_user() -> User {
    let now = Utc::now();
    User {
        id: 7,
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

#[test]
fn test_patch_with_name_only_keeps_email() {
    let mut user = sample_user();
    let patch = UserPatch {
        name: Some("New Name".to_string()),
        email: None,
    };

    let changed = patch.apply_to(&mut user);

    assert!(changed);
    assert_eq!(user.name, "New Name");
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.id, 7);
}

#[test]
fn test_patch_with_same_values_reports_no_change() {
    let mut user = sample_user();
    let patch = UserPatch {
        name: Some("Test User".to_string()),
        email: Some("test@example.com".to_string()),
    };

    assert!(!patch.apply_to(&mut user));
}

#[test]
fn test_empty_patch() {
    let patch = UserPatch::default();

    let mut user = sample_user();
    assert!(!patch.apply_to(&mut user));
}
