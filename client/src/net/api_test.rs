use super::*;
use crate::state::session::{Audience, Identity};

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn admin_member_paths_embed_id() {
    assert_eq!(delete_member_path(12), "/admin/delmembers/12");
    assert_eq!(accept_member_path(4), "/admin/accept_member/4");
    assert_eq!(decline_member_path(4), "/admin/decline_member/4");
}

#[test]
fn member_paths_embed_id() {
    assert_eq!(member_tweets_path(7), "/member/tweets/7");
    assert_eq!(member_activity_path(7), "/member/activity/7");
    assert_eq!(member_profile_path(7), "/member/profile/7");
    assert_eq!(member_contributions_path(7), "/member/contributions/7");
    assert_eq!(member_accuracy_path(7), "/member/accuracy/7");
    assert_eq!(votes_over_time_path(7), "/member/votes-over-time/7");
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("tok123"), "Bearer tok123");
}

// =============================================================
// ApiClient
// =============================================================

#[test]
fn client_for_anonymous_session_has_no_token() {
    assert_eq!(ApiClient::for_session(&Session::Anonymous).token(), None);
}

#[test]
fn client_for_member_session_carries_token() {
    let session = Session::authenticated(Audience::Member, Some(Identity::new(7)), "tok123");
    assert_eq!(ApiClient::for_session(&session).token(), Some("tok123"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_the_browser() {
    let client = ApiClient::new(ApiConfig::new("http://localhost:8000"));
    let result = futures::executor::block_on(client.dashboard_numbers());
    assert_eq!(result, Err(ApiError::Unavailable));
}
