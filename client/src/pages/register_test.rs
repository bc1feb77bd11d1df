use super::*;

fn filled() -> RegistrationForm {
    RegistrationForm {
        username: "ana_v".into(),
        email: "ana@example.com".into(),
        password: "secret1".into(),
        confirm_password: "secret1".into(),
        ..RegistrationForm::default()
    }
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn username_rules_apply_in_order() {
    assert_eq!(validate_username(""), Some("Username is required"));
    assert_eq!(validate_username("ab"), Some("Username must be at least 3 characters"));
    assert_eq!(
        validate_username("ana v"),
        Some("Username can only contain letters, numbers, hyphens, and underscores")
    );
    assert_eq!(validate_username("9lives"), Some("Username cannot start with a number"));
    assert_eq!(validate_username("ana-9_x"), None);
}

#[test]
fn password_needs_six_characters_and_matching_confirmation() {
    assert_eq!(validate_password("12345"), Some("Password must be at least 6 characters"));
    assert_eq!(validate_password("123456"), None);
    assert_eq!(validate_confirmation("123456", ""), Some("Please confirm your password"));
    assert_eq!(validate_confirmation("123456", "123457"), Some("Passwords do not match"));
    assert_eq!(validate_confirmation("123456", "123456"), None);
}

#[test]
fn optional_fields_are_only_checked_when_filled() {
    assert_eq!(validate_city(""), None);
    assert_eq!(validate_city("St. Louis"), Some("City can only contain letters and hyphens"));
    assert_eq!(validate_city("Winston-Salem"), None);
    assert_eq!(validate_occupation("O'Neil Analyst"), None);
    assert_eq!(validate_social_platform("X2"), Some("Platform name should only contain letters"));
    assert!(validate_social_url("x.com/ana").is_some());
    assert_eq!(validate_social_url("https://x.com/ana"), None);
}

// =============================================================
// Whole form
// =============================================================

#[test]
fn valid_form_sends_null_for_blank_optionals() {
    let body = filled().validate().expect("valid form");
    assert_eq!(body.username, "ana_v");
    assert_eq!(body.city, None);
    assert_eq!(body.social_url, None);

    let json = serde_json::to_value(&body).expect("serialize");
    assert_eq!(json["occupation"], serde_json::Value::Null);
}

#[test]
fn padded_email_is_sent_trimmed() {
    let form = RegistrationForm { email: " ana@example.com ".into(), ..filled() };
    let body = form.validate().expect("valid form");
    assert_eq!(body.email, "ana@example.com");
}

#[test]
fn filled_optionals_are_forwarded() {
    let form = RegistrationForm { city: "Lyon".into(), social_url: "https://x.com/ana".into(), ..filled() };
    let body = form.validate().expect("valid form");
    assert_eq!(body.city.as_deref(), Some("Lyon"));
    assert_eq!(body.social_url.as_deref(), Some("https://x.com/ana"));
}

#[test]
fn invalid_form_collects_every_error() {
    let form = RegistrationForm { confirm_password: "other".into(), social_url: "nope".into(), ..filled() };
    let errors = form.validate().expect_err("invalid form");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("confirm_password"), Some("Passwords do not match"));
    assert!(errors.get("social_url").is_some());
}

#[test]
fn single_field_check_uses_current_form() {
    let form = RegistrationForm { confirm_password: "secret2".into(), ..filled() };
    assert_eq!(form.check("confirm_password"), Some("Passwords do not match"));
    assert_eq!(form.check("username"), None);
}

#[test]
fn field_accessors_cover_every_input() {
    let mut form = RegistrationForm::default();
    for field in ["username", "email", "password", "confirm_password", "city", "occupation", "social_platform", "social_url"] {
        form.set_value(field, format!("{field}!"));
        assert_eq!(form.value(field), format!("{field}!"));
    }
    form.set_value("unknown", "x".into());
    assert_eq!(form.value("unknown"), "");
}
