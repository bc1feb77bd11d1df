use super::*;

// =============================================================
// rejection_message
// =============================================================

#[test]
fn rejection_message_prefers_detail_string() {
    let body = r#"{"detail":"Email already registered","message":"ignored"}"#;
    assert_eq!(rejection_message(body).as_deref(), Some("Email already registered"));
}

#[test]
fn rejection_message_joins_validation_list() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"},{"msg":"field required"}]}"#;
    assert_eq!(
        rejection_message(body).as_deref(),
        Some("value is not a valid email address; field required")
    );
}

#[test]
fn rejection_message_falls_back_to_message() {
    assert_eq!(rejection_message(r#"{"message":"Nope"}"#).as_deref(), Some("Nope"));
    assert_eq!(rejection_message(r#"{"detail":"  ","message":"Nope"}"#).as_deref(), Some("Nope"));
}

#[test]
fn rejection_message_none_for_non_json_or_missing_fields() {
    assert_eq!(rejection_message("Internal Server Error"), None);
    assert_eq!(rejection_message(r#"{"error":"x"}"#), None);
    assert_eq!(rejection_message(""), None);
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn rejected_carries_status_and_detail() {
    let err = ApiError::rejected(401, r#"{"detail":"Invalid credentials"}"#);
    assert_eq!(err.status(), Some(401));
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn rejected_without_detail_displays_status() {
    let err = ApiError::rejected(500, "oops");
    assert_eq!(err.to_string(), "request failed with status 500");
    assert!(!err.is_unauthorized());
}

#[test]
fn user_message_uses_detail_or_fallback() {
    let fallback = "Registration failed. Please try again.";
    assert_eq!(
        ApiError::rejected(400, r#"{"detail":"Username taken"}"#).user_message(fallback),
        "Username taken"
    );
    assert_eq!(ApiError::rejected(500, "").user_message(fallback), fallback);
    assert_eq!(ApiError::Network("offline".to_owned()).user_message(fallback), fallback);
    assert_eq!(ApiError::Unavailable.user_message(fallback), fallback);
}

#[test]
fn transport_errors_have_no_status() {
    assert_eq!(ApiError::Network("x".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}
