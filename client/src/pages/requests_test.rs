use super::*;
use crate::net::types::SocialLink;

fn request(user_id: i64) -> ApprovalRequest {
    ApprovalRequest {
        user_id,
        username: Some(format!("user{user_id}")),
        admin_name: None,
        email: None,
        role: None,
        occupation: None,
        city: None,
        social_links: vec![SocialLink { platform: "Facebook".into(), url: "https://fb.example/u".into() }],
    }
}

// =============================================================
// Queue updates
// =============================================================

#[test]
fn remove_request_drops_only_the_decided_row() {
    let mut queue = vec![request(1), request(2), request(3)];
    remove_request(&mut queue, 2);
    let ids: Vec<i64> = queue.iter().map(|r| r.user_id).collect();
    assert_eq!(ids, [1, 3]);
}

#[test]
fn remove_unknown_request_is_a_no_op() {
    let mut queue = vec![request(1)];
    remove_request(&mut queue, 9);
    assert_eq!(queue.len(), 1);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn decision_prompts_differ() {
    assert_eq!(Decision::Accept.prompt(), "Are you sure you want to add this member?");
    assert_eq!(Decision::Decline.prompt(), "Are you sure you want to decline this member?");
}

#[test]
fn decision_error_includes_api_detail() {
    let err = ApiError::rejected(404, r#"{"detail":"Member not found"}"#);
    assert_eq!(decision_error(Decision::Accept, &err), "Failed to accept member: Member not found");
    assert_eq!(
        decision_error(Decision::Decline, &err),
        "Failed to decline member: Member not found"
    );
}

#[test]
fn missing_profile_fields_show_placeholder() {
    assert_eq!(or_not_available(None), "N/A");
    assert_eq!(or_not_available(Some("")), "N/A");
    assert_eq!(or_not_available(Some("Lyon")), "Lyon");
}

#[test]
fn profile_link_falls_back_to_first() {
    let r = request(1);
    assert_eq!(r.preferred_link().map(|l| l.platform.as_str()), Some("Facebook"));
}
