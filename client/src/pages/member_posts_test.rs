use super::*;

fn draft_with(sources: [&str; 2]) -> VoteDraft {
    VoteDraft { sources: sources.map(str::to_owned), ..VoteDraft::default() }
}

// =============================================================
// Draft progression
// =============================================================

#[test]
fn fresh_draft_asks_for_sources_first() {
    let draft = VoteDraft::default();
    assert_eq!(draft.vote_label(), "Add Sources First");
    assert_eq!(draft.sources_label(), "Add Sources");
    assert!(draft.can_edit_sources());
    assert!(!draft.can_vote());
}

#[test]
fn saving_blank_sources_is_refused() {
    let mut draft = draft_with(["  ", ""]);
    assert_eq!(draft.save_sources(), Err("Please enter at least one source."));
    assert!(!draft.saved);
}

#[test]
fn saved_sources_unlock_voting() {
    let mut draft = draft_with(["", " https://a.example "]);
    draft.editing = true;
    assert_eq!(draft.save_sources(), Ok(()));
    assert!(draft.saved);
    assert!(!draft.editing);
    assert!(draft.can_vote());
    assert!(!draft.can_edit_sources());
    assert_eq!(draft.vote_label(), "Vote");
    assert_eq!(draft.sources_label(), "Sources Ready");
    assert_eq!(draft.valid_sources(), ["https://a.example"]);
}

#[test]
fn submitting_and_voted_states_lock_the_draft() {
    let mut draft = draft_with(["https://a.example", ""]);
    draft.saved = true;
    draft.submitting = true;
    assert!(!draft.can_vote());
    assert_eq!(draft.vote_label(), "Submitting...");

    draft.submitting = false;
    draft.vote_id = Some(31);
    assert!(!draft.can_vote());
    assert_eq!(draft.vote_label(), "Voted");
}

// =============================================================
// Vote preparation
// =============================================================

#[test]
fn prepare_vote_uses_session_member_and_both_sources() {
    let draft = draft_with(["https://a.example", "https://b.example"]);
    let (vote, sources) = prepare_vote(&draft, Some(7), 42, true).expect("ready");
    assert_eq!(vote, VoteRequest { tweet_id: 42, user_id: 7, vote: true });
    assert_eq!(sources, ["https://a.example", "https://b.example"]);
}

#[test]
fn prepare_vote_refusals() {
    let ready = draft_with(["https://a.example", ""]);
    assert_eq!(prepare_vote(&ready, None, 1, true), Err("Please log in to vote."));
    assert_eq!(
        prepare_vote(&VoteDraft::default(), Some(7), 1, true),
        Err("Please enter at least one source before voting.")
    );
    let voted = VoteDraft { vote_id: Some(3), ..ready };
    assert_eq!(prepare_vote(&voted, Some(7), 1, false), Err("You have already voted on this tweet."));
}

// =============================================================
// Messages
// =============================================================

#[test]
fn repeat_vote_rejection_is_explained() {
    let err = ApiError::rejected(400, r#"{"detail":"duplicate"}"#);
    assert_eq!(vote_error(&err), "You have already voted on this tweet.");
}

#[test]
fn other_vote_failures_use_detail_or_fallback() {
    assert_eq!(vote_error(&ApiError::rejected(500, r#"{"detail":"db down"}"#)), "db down");
    assert_eq!(vote_error(&ApiError::Unavailable), "Failed to submit vote and sources");
}

#[test]
fn success_message_names_the_choice() {
    assert_eq!(vote_success(true), "Vote (Verify) and sources submitted successfully!");
    assert_eq!(vote_success(false), "Vote (Unverify) and sources submitted successfully!");
}
