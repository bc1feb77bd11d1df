use super::*;

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_trims_username_only() {
    let body = validate_admin_login("  root ", " secret ").expect("valid form");
    assert_eq!(body.username, "root");
    assert_eq!(body.password, " secret ");
}

#[test]
fn blank_fields_report_both_errors() {
    let errors = validate_admin_login("   ", "").expect_err("invalid form");
    assert_eq!(errors.get("username"), Some("Username is required"));
    assert_eq!(errors.get("password"), Some("Password is required"));
}

// =============================================================
// Error banner
// =============================================================

#[test]
fn unauthorized_maps_to_invalid_credentials() {
    let err = ApiError::rejected(401, r#"{"detail":"bad"}"#);
    assert_eq!(admin_login_error(&err), "Invalid admin credentials");
}

#[test]
fn other_failures_use_generic_message() {
    let err = ApiError::rejected(500, "");
    assert_eq!(admin_login_error(&err), "Login failed. Please try again.");
    assert_eq!(admin_login_error(&ApiError::Network("offline".into())), "Login failed. Please try again.");
}
