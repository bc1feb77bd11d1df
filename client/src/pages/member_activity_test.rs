use super::*;

fn item(vote: &str) -> ActivityItem {
    ActivityItem { id: 1, post_content: "claim".into(), user_vote: vote.into(), added_sources: Vec::new() }
}

#[test]
fn true_votes_are_tagged_true() {
    assert_eq!(vote_tag(&item("True")), ("vote-tag vote-true", "✅ Marked True"));
}

#[test]
fn anything_else_is_tagged_false() {
    assert_eq!(vote_tag(&item("False")).1, "❌ Marked False");
    assert_eq!(vote_tag(&item("")).0, "vote-tag vote-false");
}
