//! Member voting screen for unverified posts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/member/posts`. For each post the member first saves up to two
//! source URLs, then casts a verify/unverify vote. The vote is posted
//! first; its id then attributes each saved source.
//!
//! ERROR HANDLING
//! ==============
//! A repeat vote is rejected by the API with 400 and shown as such. Source
//! failures after a successful vote are reported but leave the post voted.

#[cfg(test)]
#[path = "member_posts_test.rs"]
mod member_posts_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{Tweet, VoteRequest, VoteSourceRequest};
use crate::pages::form::ErrorBanner;
use crate::pages::remote::{Remote, fetch_into, session_client, session_identity_id};
use crate::state::session::SessionStore;
use crate::util::lifecycle::{MountFlag, spawn_request};

/// Source URLs a member can attach to one vote.
pub const MAX_SOURCES: usize = 2;

/// Per-post progress from collecting sources to a recorded vote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteDraft {
    pub sources: [String; MAX_SOURCES],
    pub editing: bool,
    pub saved: bool,
    pub submitting: bool,
    pub vote_id: Option<i64>,
}

impl VoteDraft {
    /// Trimmed, non-empty source URLs in input order.
    pub fn valid_sources(&self) -> Vec<String> {
        self.sources
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Mark the sources ready for voting.
    ///
    /// # Errors
    ///
    /// Fails when every source input is blank.
    pub fn save_sources(&mut self) -> Result<(), &'static str> {
        if self.valid_sources().is_empty() {
            return Err("Please enter at least one source.");
        }
        self.saved = true;
        self.editing = false;
        Ok(())
    }

    pub fn is_voted(&self) -> bool {
        self.vote_id.is_some()
    }

    pub fn can_edit_sources(&self) -> bool {
        !self.saved && !self.is_voted()
    }

    pub fn can_vote(&self) -> bool {
        self.saved && !self.is_voted() && !self.submitting
    }

    pub fn vote_label(&self) -> &'static str {
        if self.is_voted() {
            "Voted"
        } else if self.submitting {
            "Submitting..."
        } else if self.saved {
            "Vote"
        } else {
            "Add Sources First"
        }
    }

    pub fn sources_label(&self) -> &'static str {
        if self.saved { "Sources Ready" } else { "Add Sources" }
    }
}

/// Vote body for `tweet_id`, or why the vote cannot be sent yet.
pub fn prepare_vote(
    draft: &VoteDraft,
    member_id: Option<i64>,
    tweet_id: i64,
    verify: bool,
) -> Result<(VoteRequest, Vec<String>), &'static str> {
    let Some(user_id) = member_id else {
        return Err("Please log in to vote.");
    };
    let sources = draft.valid_sources();
    if sources.is_empty() {
        return Err("Please enter at least one source before voting.");
    }
    if draft.is_voted() {
        return Err("You have already voted on this tweet.");
    }
    Ok((VoteRequest { tweet_id, user_id, vote: verify }, sources))
}

pub fn vote_error(err: &ApiError) -> String {
    if err.status() == Some(400) {
        "You have already voted on this tweet.".to_owned()
    } else {
        err.user_message("Failed to submit vote and sources")
    }
}

pub fn vote_success(verify: bool) -> String {
    let label = if verify { "Verify" } else { "Unverify" };
    format!("Vote ({label}) and sources submitted successfully!")
}

type Drafts = HashMap<i64, VoteDraft>;

fn draft_of(drafts: RwSignal<Drafts>, tweet_id: i64) -> VoteDraft {
    drafts.with(|d| d.get(&tweet_id).cloned().unwrap_or_default())
}

fn edit_draft(drafts: RwSignal<Drafts>, tweet_id: i64, edit: impl FnOnce(&mut VoteDraft)) {
    drafts.update(|d| edit(d.entry(tweet_id).or_default()));
}

#[component]
fn PostCard(
    tweet: Tweet,
    drafts: RwSignal<Drafts>,
    selected: RwSignal<Option<i64>>,
    notice: RwSignal<Option<String>>,
    has_member: bool,
) -> impl IntoView {
    let id = tweet.tweet_id;
    let draft = move || draft_of(drafts, id);

    let source_input = move |index: usize| {
        view! {
            <input
                type="url"
                placeholder=format!("Source URL {}", index + 1)
                prop:value=move || draft().sources[index].clone()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_draft(drafts, id, |d| d.sources[index] = value);
                }
            />
        }
    };

    view! {
        <div class="tweet-box">
            <div class="tweet-content-scroll">
                <p>{tweet.content.clone()}</p>
            </div>
            <div class="action-buttons">
                <button
                    class="add-url-btn"
                    disabled=move || !has_member || !draft().can_edit_sources()
                    on:click=move |_| edit_draft(drafts, id, |d| d.editing = !d.editing)
                >
                    {move || draft().sources_label()}
                </button>
                <button
                    class="vote-popup-btn"
                    disabled=move || !has_member || !draft().can_vote()
                    on:click=move |_| selected.set(Some(id))
                >
                    {move || draft().vote_label()}
                </button>
            </div>
            <Show when=move || draft().editing>
                <div class="source-inputs">
                    <p class="source-instruction">"Add sources before voting:"</p>
                    {(0..MAX_SOURCES).map(source_input).collect_view()}
                    <button on:click=move |_| {
                        let mut outcome = Ok(());
                        edit_draft(drafts, id, |d| outcome = d.save_sources());
                        notice.set(Some(match outcome {
                            Ok(()) => "Sources ready! Click Vote to submit both sources and your vote.".to_owned(),
                            Err(message) => message.to_owned(),
                        }));
                    }>
                        "Save Sources"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn MemberPostsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let mounted = MountFlag::install();

    let member_id = session_identity_id(session);
    let tweets = RwSignal::new(Remote::<Vec<Tweet>>::Loading);
    let drafts = RwSignal::new(Drafts::new());
    let selected = RwSignal::new(None::<i64>);
    let banner = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    match member_id {
        Some(id) => {
            let client = session_client(session);
            fetch_into(tweets, &mounted, "Failed to load tweets", async move { client.member_tweets(id).await });
        }
        None => tweets.set(Remote::Ready(Vec::new())),
    }

    let submit = move |verify: bool| {
        let Some(tweet_id) = selected.get() else {
            return;
        };
        banner.set(None);
        notice.set(None);
        let (vote, sources) = match prepare_vote(&draft_of(drafts, tweet_id), member_id, tweet_id, verify) {
            Ok(prepared) => prepared,
            Err(message) => {
                banner.set(Some(message.to_owned()));
                return;
            }
        };
        edit_draft(drafts, tweet_id, |d| d.submitting = true);
        let client = session_client(session);
        let mounted = mounted.clone();
        spawn_request(async move {
            let outcome = match client.cast_vote(&vote).await {
                Ok(response) => {
                    let mut source_error = None;
                    for source_url in sources {
                        let body = VoteSourceRequest { vote_id: response.vote_id, source_url };
                        if let Err(e) = client.add_vote_source(&body).await {
                            log::warn!("source for vote {} rejected: {e}", response.vote_id);
                            source_error.get_or_insert(e);
                        }
                    }
                    Ok((response.vote_id, source_error))
                }
                Err(e) => Err(e),
            };
            mounted.guard(|| {
                match outcome {
                    Ok((vote_id, source_error)) => {
                        edit_draft(drafts, tweet_id, |d| {
                            d.vote_id = Some(vote_id);
                            d.saved = true;
                            d.editing = false;
                        });
                        match source_error {
                            None => notice.set(Some(vote_success(verify))),
                            Some(e) => banner.set(Some(format!(
                                "Vote recorded, but a source was rejected: {}",
                                e.user_message("unknown error")
                            ))),
                        }
                        selected.set(None);
                    }
                    Err(e) => {
                        log::warn!("vote on tweet {tweet_id} failed: {e}");
                        banner.set(Some(vote_error(&e)));
                    }
                }
                edit_draft(drafts, tweet_id, |d| d.submitting = false);
            });
        });
    };
    let verify = submit.clone();
    let unverify = submit;

    view! {
        <div class="tweet-container">
            <h1 class="heading">"Vote on Posts"</h1>
            <Show when=move || member_id.is_none()>
                <div class="login-warning">"Please log in to add sources and vote."</div>
            </Show>
            <ErrorBanner message=banner/>
            <Show when=move || notice.get().is_some()>
                <div class="notice-banner">{move || notice.get().unwrap_or_default()}</div>
            </Show>
            {move || {
                tweets.with(|remote| match remote {
                    Remote::Loading => view! { <div class="loading-state">"Loading posts..."</div> }.into_any(),
                    Remote::Failed(message) => view! { <div class="error-state">{message.clone()}</div> }.into_any(),
                    Remote::Ready(list) if list.is_empty() => {
                        view! { <div class="no-data">"No posts are waiting for your vote."</div> }.into_any()
                    }
                    Remote::Ready(list) => view! {
                        <div class="tweet-row">
                            {list
                                .iter()
                                .cloned()
                                .map(|tweet| {
                                    view! {
                                        <PostCard
                                            tweet=tweet
                                            drafts=drafts
                                            selected=selected
                                            notice=notice
                                            has_member=member_id.is_some()
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                })
            }}
            <Show when=move || selected.get().is_some_and(|id| draft_of(drafts, id).saved)>
                <div class="modal">
                    <div class="modal-content">
                        <h3>"Vote on Post"</h3>
                        <p class="vote-instruction">"Submit your vote and sources:"</p>
                        <div class="vote-buttons">
                            <button class="verify-btn" on:click={
                                let verify = verify.clone();
                                move |_| verify(true)
                            }>"Verify"</button>
                            <button class="unverify-btn" on:click={
                                let unverify = unverify.clone();
                                move |_| unverify(false)
                            }>"Unverify"</button>
                        </div>
                        <button class="close-btn" on:click=move |_| selected.set(None)>"Close"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
