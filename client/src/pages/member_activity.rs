//! Member's voting history with the sources attached to each vote.

#[cfg(test)]
#[path = "member_activity_test.rs"]
mod member_activity_test;

use leptos::prelude::*;

use crate::net::types::ActivityItem;
use crate::pages::remote::{Remote, fetch_into, session_client, session_identity_id};
use crate::state::session::SessionStore;
use crate::util::lifecycle::MountFlag;

const NO_MEMBER: &str = "No member ID found. Please log in.";

/// CSS class and label of the vote tag.
pub fn vote_tag(item: &ActivityItem) -> (&'static str, &'static str) {
    if item.voted_true() {
        ("vote-tag vote-true", "✅ Marked True")
    } else {
        ("vote-tag vote-false", "❌ Marked False")
    }
}

#[component]
pub fn MemberActivityPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let mounted = MountFlag::install();
    let activity = RwSignal::new(Remote::<Vec<ActivityItem>>::Loading);

    match session_identity_id(session) {
        Some(id) => {
            let client = session_client(session);
            fetch_into(
                activity,
                &mounted,
                "Failed to load your activity. Please try again later.",
                async move { client.member_activity(id).await },
            );
        }
        None => activity.set(Remote::Failed(NO_MEMBER.to_owned())),
    }

    view! {
        <div class="activity-container">
            <h2 class="heading">"My Activity"</h2>
            {move || {
                activity.with(|remote| match remote {
                    Remote::Loading => view! { <p class="no-activity">"Loading activity..."</p> }.into_any(),
                    Remote::Failed(message) => view! { <p class="no-activity">{message.clone()}</p> }.into_any(),
                    Remote::Ready(items) if items.is_empty() => {
                        view! { <p class="no-activity">"You haven't voted or added any sources yet."</p> }.into_any()
                    }
                    Remote::Ready(items) => view! {
                        <div class="activity-grid">
                            {items.iter().map(activity_card).collect_view()}
                        </div>
                    }
                    .into_any(),
                })
            }}
        </div>
    }
}

fn activity_card(item: &ActivityItem) -> impl IntoView + use<> {
    let (tag_class, tag_label) = vote_tag(item);
    let sources = if item.added_sources.is_empty() {
        view! { <p class="no-source">"No sources added for this post."</p> }.into_any()
    } else {
        view! {
            <ul>
                {item
                    .added_sources
                    .iter()
                    .map(|src| view! { <li><a href=src.clone() target="_blank" rel="noreferrer">{src.clone()}</a></li> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };
    view! {
        <div class="activity-card">
            <div class="activity-post-content">{item.post_content.clone()}</div>
            <div class="vote-section">
                <span class=tag_class>{tag_label}</span>
            </div>
            <div class="sources-section">
                <h4>"Sources Added:"</h4>
                {sources}
            </div>
        </div>
    }
}
