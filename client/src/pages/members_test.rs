use super::*;

// =============================================================
// Accuracy bands
// =============================================================

#[test]
fn accuracy_band_thresholds() {
    assert_eq!(AccuracyBand::of(80.0), AccuracyBand::High);
    assert_eq!(AccuracyBand::of(79.9), AccuracyBand::Medium);
    assert_eq!(AccuracyBand::of(60.0), AccuracyBand::Medium);
    assert_eq!(AccuracyBand::of(59.9), AccuracyBand::Low);
    assert_eq!(AccuracyBand::of(0.0).class(), "stat-value low");
}

// =============================================================
// Delete confirmation
// =============================================================

#[test]
fn delete_prompt_names_the_member() {
    assert_eq!(
        delete_prompt("ana"),
        "Are you sure you want to delete \"ana\"? This action cannot be undone."
    );
}

#[test]
fn delete_failure_prefers_api_text() {
    use crate::net::error::ApiError;

    let err = ApiError::rejected(404, r#"{"message":"Member not found"}"#);
    assert_eq!(err.user_message(DELETE_FAILED), "Member not found");
    assert_eq!(ApiError::Unavailable.user_message(DELETE_FAILED), DELETE_FAILED);
}
