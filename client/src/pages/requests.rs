//! Admin approval queue for pending member registrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route `/request`. Each pending registration can be accepted or declined
//! after a confirmation prompt; the row leaves the table once the API
//! confirms the decision.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::ApprovalRequest;
use crate::pages::form::ErrorBanner;
use crate::pages::remote::{Remote, fetch_into, session_client};
use crate::state::session::SessionStore;
use crate::util::dialog::confirm;
use crate::util::lifecycle::{MountFlag, spawn_request};

/// Accept or decline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Decline,
}

impl Decision {
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Accept => "Are you sure you want to add this member?",
            Self::Decline => "Are you sure you want to decline this member?",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Decline => "decline",
        }
    }
}

/// Banner text for a failed decision.
pub fn decision_error(decision: Decision, err: &ApiError) -> String {
    format!("Failed to {} member: {}", decision.verb(), err)
}

/// Drop the request for `user_id` from the queue.
pub fn remove_request(queue: &mut Vec<ApprovalRequest>, user_id: i64) {
    queue.retain(|r| r.user_id != user_id);
}

pub fn or_not_available(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("N/A")
}

#[component]
fn ProfileModal(selected: RwSignal<Option<ApprovalRequest>>) -> impl IntoView {
    move || {
        selected.get().map(|request| {
            let link = request.preferred_link().cloned();
            view! {
                <div class="profile-modal-overlay" on:click=move |_| selected.set(None)>
                    <div class="profile-modal" on:click=|ev| ev.stop_propagation()>
                        <div class="profile-modal-header">
                            <h3>"Member Profile"</h3>
                            <button class="modal-close-btn" aria-label="Close" on:click=move |_| selected.set(None)>
                                "×"
                            </button>
                        </div>
                        <div class="profile-modal-content">
                            <div class="profile-info-item">
                                <span class="info-label">"Full Name"</span>
                                <span class="info-value">{request.display_name().to_owned()}</span>
                            </div>
                            <div class="profile-info-item">
                                <span class="info-label">"Email Address"</span>
                                <span class="info-value">{or_not_available(request.email.as_deref()).to_owned()}</span>
                            </div>
                            <div class="profile-info-item">
                                <span class="info-label">"Occupation"</span>
                                <span class="info-value">
                                    {or_not_available(request.occupation.as_deref()).to_owned()}
                                </span>
                            </div>
                            <div class="profile-info-item">
                                <span class="info-label">"City"</span>
                                <span class="info-value">{or_not_available(request.city.as_deref()).to_owned()}</span>
                            </div>
                            {link.map(|link| {
                                view! {
                                    <div class="profile-info-item">
                                        <span class="info-label">{link.platform.clone()}</span>
                                        <a class="info-value" href=link.url.clone() target="_blank" rel="noopener">
                                            {link.url.clone()}
                                        </a>
                                    </div>
                                }
                            })}
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
pub fn ApprovalRequestsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let mounted = MountFlag::install();

    let queue = RwSignal::new(Remote::<Vec<ApprovalRequest>>::Loading);
    let banner = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<ApprovalRequest>);

    let refresh = {
        let mounted = mounted.clone();
        move || {
            let client = session_client(session);
            fetch_into(queue, &mounted, "Failed to fetch approval requests", async move {
                client.approval_requests().await
            });
        }
    };
    refresh();

    let decide = {
        let mounted = mounted.clone();
        move |user_id: i64, decision: Decision| {
            if !confirm(decision.prompt()) {
                return;
            }
            banner.set(None);
            let client = session_client(session);
            let mounted = mounted.clone();
            spawn_request(async move {
                let result = match decision {
                    Decision::Accept => client.accept_member(user_id).await,
                    Decision::Decline => client.decline_member(user_id).await,
                };
                mounted.guard(|| match result {
                    Ok(()) => {
                        log::info!("member {user_id} {decision:?} recorded");
                        queue.update(|q| {
                            if let Some(list) = q.ready_mut() {
                                remove_request(list, user_id);
                            }
                        });
                    }
                    Err(e) => banner.set(Some(decision_error(decision, &e))),
                });
            });
        }
    };

    view! {
        <div class="request-page">
            <div class="page-header">
                <h2>"Membership Requests"</h2>
                <button class="refresh-btn" on:click={
                    let refresh = refresh.clone();
                    move |_| refresh()
                }>"⟳ Refresh"</button>
            </div>
            <ErrorBanner message=banner/>
            {move || {
                let decide = decide.clone();
                queue.with(|remote| match remote {
                    Remote::Loading => view! { <div class="loading-state">"Loading requests..."</div> }.into_any(),
                    Remote::Failed(message) => view! { <div class="error-state">{message.clone()}</div> }.into_any(),
                    Remote::Ready(list) if list.is_empty() => {
                        view! { <div class="no-data">"No membership requests found."</div> }.into_any()
                    }
                    Remote::Ready(list) => {
                        let rows = list
                            .iter()
                            .cloned()
                            .map(|request| {
                                let id = request.user_id;
                                let accept = decide.clone();
                                let decline = decide.clone();
                                let name = request.display_name().to_owned();
                                let email = or_not_available(request.email.as_deref()).to_owned();
                                view! {
                                    <tr>
                                        <td>{name}</td>
                                        <td>{email}</td>
                                        <td>
                                            <button
                                                class="profile-btn"
                                                on:click=move |_| selected.set(Some(request.clone()))
                                            >
                                                "View Profile"
                                            </button>
                                        </td>
                                        <td class="action-column">
                                            <button class="accept-btn" on:click=move |_| accept(id, Decision::Accept)>
                                                "✓ Accept"
                                            </button>
                                            <button class="decline-btn" on:click=move |_| decline(id, Decision::Decline)>
                                                "✕ Decline"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="card-table">
                                <table class="request-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Profile"</th>
                                            <th>"Actions"</th>
                                        </tr>
                                    </thead>
                                    <tbody>{rows}</tbody>
                                </table>
                            </div>
                        }
                        .into_any()
                    }
                })
            }}
            <ProfileModal selected=selected/>
        </div>
    }
}
