use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_builds_request() {
    let body = validate_member_login(" ana@example.com ", "pw").expect("valid form");
    assert_eq!(body.email, "ana@example.com");
    assert_eq!(body.password, "pw");
}

#[test]
fn malformed_email_is_rejected_before_network() {
    let errors = validate_member_login("ana@", "pw").expect_err("invalid form");
    assert_eq!(errors.get("email"), Some("Please enter a valid email address"));
    assert_eq!(errors.get("password"), None);
}

// =============================================================
// Error banner
// =============================================================

#[test]
fn status_specific_messages() {
    assert_eq!(member_login_error(&ApiError::rejected(401, "")), "Invalid email or password");
    assert_eq!(
        member_login_error(&ApiError::rejected(403, r#"{"detail":"Account not approved yet"}"#)),
        "Account not approved yet"
    );
    assert_eq!(member_login_error(&ApiError::rejected(403, "")), "Your account cannot sign in yet.");
    assert_eq!(member_login_error(&ApiError::Unavailable), "Login failed. Please try again.");
}

// =============================================================
// Session hand-off
// =============================================================

#[test]
fn confirmed_login_records_member_identity_and_token() {
    let mut store = SessionStore::initialize(MemoryStorage::new());
    record_member_login(&mut store, MemberLoginResponse { token: "tok123".into(), id: 7 });

    let session = store.session();
    assert!(session.is_authenticated());
    assert_eq!(session.audience(), Some(Audience::Member));
    assert_eq!(session.identity_id(), Some(7));
    assert_eq!(session.token(), Some("tok123"));
}
