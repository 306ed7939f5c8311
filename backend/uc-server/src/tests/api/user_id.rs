use crate::{ApiError, INVALID_ID, parse_user_id};

use proptest::prelude::*;

#[test]
fn test_parse_valid_id() {
    assert_eq!(parse_user_id("1").unwrap(), 1);
    assert_eq!(parse_user_id("999").unwrap(), 999);
}

#[test]
fn test_parse_rejects_zero_and_negative() {
    assert!(parse_user_id("0").is_err());
    assert!(parse_user_id("-1").is_err());
}

#[test]
fn test_parse_rejects_non_numeric() {
    for raw in ["invalid", "", "1.5", "12abc", " 1", "99999999999999999999"] {
        match parse_user_id(raw) {
            Err(ApiError::BadRequest { message, .. }) => assert_eq!(message, INVALID_ID),
            other => panic!("expected BadRequest for {:?}, got {:?}", raw, other),
        }
    }
}

proptest! {
    #[test]
    fn given_positive_integer_when_parsed_then_round_trips(id in 1i64..=i64::MAX) {
        prop_assert_eq!(parse_user_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn given_non_numeric_segment_when_parsed_then_invalid_id(raw in "[a-zA-Z_][a-zA-Z0-9_-]{0,16}") {
        prop_assert!(parse_user_id(&raw).is_err());
    }

    #[test]
    fn given_non_positive_integer_when_parsed_then_invalid_id(id in i64::MIN..=0i64) {
        prop_assert!(parse_user_id(&id.to_string()).is_err());
    }
}
