//! Admin list of approved members with delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/expenses` (the historical path of this screen). Shows each
//! approved member's vote count and accuracy. Deletion asks for
//! confirmation and removes the card once the API agrees.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use leptos::prelude::*;

use crate::net::types::ApprovedMember;
use crate::pages::chart::{format_count, format_percent};
use crate::pages::form::ErrorBanner;
use crate::pages::remote::{Remote, fetch_into, session_client};
use crate::state::session::SessionStore;
use crate::util::dialog::confirm;
use crate::util::lifecycle::{MountFlag, spawn_request};

const DELETE_FAILED: &str = "Failed to delete member. Please try again.";

/// Accuracy band used to color the stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccuracyBand {
    High,
    Medium,
    Low,
}

impl AccuracyBand {
    pub fn of(accuracy: f64) -> Self {
        if accuracy >= 80.0 {
            Self::High
        } else if accuracy >= 60.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::High => "stat-value high",
            Self::Medium => "stat-value medium",
            Self::Low => "stat-value low",
        }
    }
}

pub fn delete_prompt(name: &str) -> String {
    format!("Are you sure you want to delete \"{name}\"? This action cannot be undone.")
}

#[component]
pub fn MemberListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let mounted = MountFlag::install();

    let members = RwSignal::new(Remote::<Vec<ApprovedMember>>::Loading);
    let deleting = RwSignal::new(None::<i64>);
    let banner = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let refresh = {
        let mounted = mounted.clone();
        move || {
            let client = session_client(session);
            fetch_into(members, &mounted, "Failed to fetch approved members", async move {
                client.approved_members().await
            });
        }
    };
    refresh();

    let delete = {
        let mounted = mounted.clone();
        move |member_id: i64, name: String| {
            if !confirm(&delete_prompt(&name)) {
                return;
            }
            banner.set(None);
            notice.set(None);
            deleting.set(Some(member_id));
            let client = session_client(session);
            let mounted = mounted.clone();
            spawn_request(async move {
                let result = client.delete_member(member_id).await;
                mounted.guard(|| {
                    match result {
                        Ok(()) => {
                            log::info!("deleted member {member_id}");
                            members.update(|m| {
                                if let Some(list) = m.ready_mut() {
                                    list.retain(|member| member.user_id != member_id);
                                }
                            });
                            notice.set(Some(format!("Member \"{name}\" has been deleted successfully.")));
                        }
                        Err(e) => banner.set(Some(e.user_message(DELETE_FAILED))),
                    }
                    deleting.set(None);
                });
            });
        }
    };

    let refresh_button = refresh.clone();
    view! {
        <div class="member-list-page">
            <div class="page-header">
                <h1 class="heading">"Approved Members"</h1>
                <button
                    class="btn-refresh"
                    title="Refresh list"
                    disabled=move || members.with(Remote::is_loading)
                    on:click=move |_| refresh_button()
                >
                    "⟳"
                </button>
            </div>
            <ErrorBanner message=banner/>
            <Show when=move || notice.get().is_some()>
                <div class="notice-banner">{move || notice.get().unwrap_or_default()}</div>
            </Show>
            {move || {
                let delete = delete.clone();
                let retry = refresh.clone();
                members.with(|remote| match remote {
                    Remote::Loading => {
                        view! { <div class="loading-card card"><p>"Loading approved members..."</p></div> }.into_any()
                    }
                    Remote::Failed(message) => view! {
                        <div class="error-card card">
                            <p class="error-message">{message.clone()}</p>
                            <button class="btn btn-primary" on:click=move |_| retry()>"Try Again"</button>
                        </div>
                    }
                    .into_any(),
                    Remote::Ready(list) if list.is_empty() => {
                        view! { <div class="no-members card">"No approved members found."</div> }.into_any()
                    }
                    Remote::Ready(list) => list
                        .iter()
                        .map(|member| {
                            let id = member.user_id;
                            let name = member.display_name().to_owned();
                            let delete = delete.clone();
                            let delete_name = name.clone();
                            let band = AccuracyBand::of(member.accuracy_percentage);
                            view! {
                                <div class="member-card card">
                                    <div class="member-info">
                                        <h3>{name}</h3>
                                        <p>{member.email.clone().unwrap_or_default()}</p>
                                        <div class="performance-stats">
                                            <div class="stat-item">
                                                <strong>"Total Votes"</strong>
                                                <span class="stat-value">{format_count(member.total_votes)}</span>
                                            </div>
                                            <div class="stat-item">
                                                <strong>"Accuracy"</strong>
                                                <span class=band.class()>{format_percent(member.accuracy_percentage)}</span>
                                            </div>
                                        </div>
                                        <p>
                                            <strong>"Role: "</strong>
                                            <span class="role-badge">{member.role_label()}</span>
                                        </p>
                                        <p>
                                            <strong>"Joined: "</strong>
                                            {member.joined_date().unwrap_or("Unknown").to_owned()}
                                        </p>
                                    </div>
                                    <div class="member-actions">
                                        <button
                                            class="btn btn-danger"
                                            title="Delete member"
                                            disabled=move || deleting.get() == Some(id)
                                            on:click=move |_| delete(id, delete_name.clone())
                                        >
                                            {move || if deleting.get() == Some(id) { "Deleting..." } else { "🗑 Delete" }}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any(),
                })
            }}
        </div>
    }
}
