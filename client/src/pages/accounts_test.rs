use super::*;

fn filled() -> AccountForm {
    AccountForm { name: "  Daily Ledger ".into(), url: " https://x.com/ledger ".into(), ..AccountForm::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn form_starts_on_first_options() {
    let form = AccountForm::default();
    assert_eq!(form.platform, "twitter");
    assert_eq!(form.category, "economy");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn valid_form_is_attributed_to_session_admin() {
    let body = filled().validate(Some(12)).expect("valid form");
    assert_eq!(body.name, "Daily Ledger");
    assert_eq!(body.url, "https://x.com/ledger");
    assert_eq!(body.admin_id, 12);
}

#[test]
fn missing_identity_is_refused() {
    assert!(filled().validate(None).is_err());
}

#[test]
fn url_must_be_http() {
    let form = AccountForm { url: "x.com/ledger".into(), ..filled() };
    assert_eq!(form.validate(Some(1)), Err("URL must start with http:// or https://"));
    let form = AccountForm { url: "  ".into(), ..filled() };
    assert_eq!(form.validate(Some(1)), Err("Account URL is required"));
}

#[test]
fn name_length_is_bounded() {
    let form = AccountForm { name: "A".into(), ..filled() };
    assert_eq!(form.validate(Some(1)), Err("Name must be between 2 and 100 characters"));
    let form = AccountForm { name: "x".repeat(101), ..filled() };
    assert!(form.validate(Some(1)).is_err());
}

#[test]
fn unknown_options_are_rejected() {
    let form = AccountForm { platform: "myspace".into(), ..filled() };
    assert_eq!(form.validate(Some(1)), Err("Choose a supported platform"));
    let form = AccountForm { category: "weather".into(), ..filled() };
    assert_eq!(form.validate(Some(1)), Err("Choose a supported category"));
}

#[test]
fn every_listed_option_is_accepted() {
    for (platform, _) in PLATFORMS {
        for (category, _) in CATEGORIES {
            let form = AccountForm { platform: platform.into(), category: category.into(), ..filled() };
            assert!(form.validate(Some(1)).is_ok(), "{platform}/{category}");
        }
    }
}
