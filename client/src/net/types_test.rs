use super::*;
use serde_json::json;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn admin_user_maps_to_identity() {
    let user: AdminUser = serde_json::from_value(json!({
        "user_id": 3,
        "username": "root",
        "email": "root@example.com",
        "role": "admin",
        "password_hash": "ignored"
    }))
    .unwrap();
    let identity = user.identity();
    assert_eq!(identity.id, 3);
    assert_eq!(identity.username.as_deref(), Some("root"));
    assert_eq!(identity.role.as_deref(), Some("admin"));
}

#[test]
fn admin_user_session_token_falls_back_to_marker() {
    let user: AdminUser = serde_json::from_value(json!({ "user_id": 3 })).unwrap();
    assert_eq!(user.session_token(), "admin-session-3");

    let with_token: AdminUser = serde_json::from_value(json!({ "id": 3, "token": "jwt" })).unwrap();
    assert_eq!(with_token.session_token(), "jwt");
}

#[test]
fn member_login_response_parses_token_and_id() {
    let resp: MemberLoginResponse =
        serde_json::from_value(json!({ "token": "dummy-token-for-7", "id": 7 })).unwrap();
    assert_eq!(resp, MemberLoginResponse { token: "dummy-token-for-7".to_owned(), id: 7 });
}

#[test]
fn member_registration_sends_missing_optionals_as_null() {
    let body = MemberRegistration {
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret1".to_owned(),
        city: Some("Lahore".to_owned()),
        ..MemberRegistration::default()
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["city"], json!("Lahore"));
    assert_eq!(value["occupation"], serde_json::Value::Null);
    assert_eq!(value["social_url"], serde_json::Value::Null);
}

// =============================================================
// Admin payloads
// =============================================================

#[test]
fn dashboard_numbers_tolerate_missing_and_float_counts() {
    let numbers: DashboardNumbers =
        serde_json::from_value(json!({ "total_users": 12.0, "approved_members": 5 })).unwrap();
    assert_eq!(numbers.total_users, 12);
    assert_eq!(numbers.approved_members, 5);
    assert_eq!(numbers.pending_requests, 0);
}

#[test]
fn tweet_histogram_keeps_order() {
    let bars: Vec<NamedCount> = serde_json::from_value(json!([
        { "name": "Verified", "value": 4 },
        { "name": "False", "value": 1 },
        { "name": "Unverified", "value": 9 }
    ]))
    .unwrap();
    let names: Vec<_> = bars.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Verified", "False", "Unverified"]);
}

#[test]
fn approved_member_accepts_string_percentage_and_null_votes() {
    let member: ApprovedMember = serde_json::from_value(json!({
        "user_id": 9,
        "username": "bob",
        "email": "bob@example.com",
        "role": "member",
        "total_votes": null,
        "accuracy_percentage": "66.67"
    }))
    .unwrap();
    assert_eq!(member.total_votes, 0);
    assert!((member.accuracy_percentage - 66.67).abs() < f64::EPSILON);
    assert_eq!(member.role_label(), "Member");
    assert_eq!(member.joined_date(), None);
}

#[test]
fn approved_member_display_name_and_joined_date() {
    let member: ApprovedMember = serde_json::from_value(json!({
        "user_id": 1,
        "admin_name": "Ops",
        "role": "ADMIN",
        "created_at": "2024-05-01T10:00:00"
    }))
    .unwrap();
    assert_eq!(member.display_name(), "Ops");
    assert_eq!(member.role_label(), "Admin");
    assert_eq!(member.joined_date(), Some("2024-05-01"));
}

#[test]
fn approval_request_prefers_twitter_link() {
    let request: ApprovalRequest = serde_json::from_value(json!({
        "user_id": 4,
        "social_links": [
            { "platform": "LinkedIn", "url": "https://linkedin.com/in/x" },
            { "platform": "Twitter", "url": "https://twitter.com/x" }
        ]
    }))
    .unwrap();
    assert_eq!(request.preferred_link().map(|l| l.url.as_str()), Some("https://twitter.com/x"));
    assert_eq!(request.display_name(), "No Name");
}

#[test]
fn approval_request_falls_back_to_first_link() {
    let request: ApprovalRequest = serde_json::from_value(json!({
        "user_id": 4,
        "social_links": [{ "platform": "Facebook", "url": "https://fb.com/x" }]
    }))
    .unwrap();
    assert_eq!(request.preferred_link().map(|l| l.platform.as_str()), Some("Facebook"));

    let bare: ApprovalRequest = serde_json::from_value(json!({ "user_id": 5 })).unwrap();
    assert_eq!(bare.preferred_link(), None);
}

// =============================================================
// Member payloads
// =============================================================

#[test]
fn tweet_accepts_tweet_text_alias() {
    let tweet: Tweet = serde_json::from_value(json!({ "tweet_id": 2, "tweet_text": "hello" })).unwrap();
    assert_eq!(tweet.content, "hello");
}

#[test]
fn activity_item_uses_api_field_names() {
    let item: ActivityItem = serde_json::from_value(json!({
        "id": 3,
        "postContent": "claim",
        "userVote": "True",
        "addedSources": ["https://a.example"]
    }))
    .unwrap();
    assert!(item.voted_true());
    assert_eq!(item.added_sources, ["https://a.example"]);
}

#[test]
fn member_profile_initial_defaults_to_u() {
    let profile: MemberProfile = serde_json::from_value(json!({
        "user_id": 7,
        "username": "zed",
        "socialPlatform": "Twitter",
        "socialUrl": null
    }))
    .unwrap();
    assert_eq!(profile.initial(), 'Z');
    assert_eq!(profile.social_platform.as_deref(), Some("Twitter"));

    let anonymous: MemberProfile = serde_json::from_value(json!({ "user_id": 8 })).unwrap();
    assert_eq!(anonymous.initial(), 'U');
}

#[test]
fn accuracy_and_votes_over_time_parse() {
    let accuracy: Accuracy = serde_json::from_value(json!({ "accuracy": 87.5 })).unwrap();
    assert!((accuracy.accuracy - 87.5).abs() < f64::EPSILON);

    let days: Vec<VotesOnDay> =
        serde_json::from_value(json!([{ "date": "2024-05-01", "votes": 3 }])).unwrap();
    assert_eq!(days[0].votes, 3);
}

#[test]
fn integer_fields_reject_fractional_numbers() {
    let result = serde_json::from_value::<VoteResponse>(json!({ "vote_id": 1.5 }));
    assert!(result.is_err());
}
