use super::*;

#[test]
fn admin_items_link_admin_routes() {
    let paths: Vec<_> = sidebar_items(Audience::Admin).iter().map(|i| i.path).collect();
    assert_eq!(paths, ["/", "/expenses", "/request", "/account"]);
}

#[test]
fn member_items_link_member_routes() {
    let paths: Vec<_> = sidebar_items(Audience::Member).iter().map(|i| i.path).collect();
    assert_eq!(paths, ["/member", "/member/posts", "/member/activity", "/member/profile"]);
}

#[test]
fn active_item_matches_exact_path() {
    assert_eq!(active_item("/", Audience::Admin), Some("dashboard"));
    assert_eq!(active_item("/request", Audience::Admin), Some("requests"));
    assert_eq!(active_item("/member/posts", Audience::Member), Some("posts"));
}

#[test]
fn active_item_ignores_trailing_slash() {
    assert_eq!(active_item("/member/", Audience::Member), Some("dashboard"));
}

#[test]
fn active_item_none_for_unknown_or_foreign_path() {
    assert_eq!(active_item("/nope", Audience::Admin), None);
    assert_eq!(active_item("/member", Audience::Admin), None);
}

#[test]
fn every_sidebar_item_resolves_within_its_layout() {
    use crate::routing::table::{Layout, Screen, resolve};
    for audience in [Audience::Admin, Audience::Member] {
        for item in sidebar_items(audience) {
            assert_ne!(resolve(item.path, Layout::Authenticated(audience)), Screen::NotFound, "{}", item.path);
        }
    }
}
