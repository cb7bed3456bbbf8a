//! Unit tests for error display and conversions

use super::*;

#[test]
fn test_invalid_category_display() {
    let err = LotoError::InvalidCategory {
        value: "GH99".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid category: GH99 (expected GH18, CIV10, CIV13 or CIV16)"
    );
}

#[test]
fn test_invalid_ball_display() {
    let err = LotoError::InvalidBall {
        value: "91".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid ball number: 91 (must be between 1 and 90)"
    );
}

#[test]
fn test_invalid_ball_count_display() {
    let err = LotoError::InvalidBallCount { count: 4 };
    assert_eq!(err.to_string(), "A draw takes exactly 5 ball numbers, got 4");
}

#[test]
fn test_duplicate_balls_display() {
    assert_eq!(
        LotoError::DuplicateBalls.to_string(),
        "All five ball numbers must be distinct"
    );
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: LotoError = json_err.into();
    assert!(matches!(err, LotoError::Json(_)));
    assert!(err.to_string().starts_with("JSON serialization failed"));
}

#[test]
fn test_storage_error_is_transparent() {
    let inner = anyhow::anyhow!("table is locked");
    let err: LotoError = inner.into();
    assert_eq!(err.to_string(), "table is locked");
}
