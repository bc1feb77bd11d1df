//! Member's own profile, read from `GET /member/profile/{id}`.

#[cfg(test)]
#[path = "member_profile_test.rs"]
mod member_profile_test;

use leptos::prelude::*;

use crate::net::types::MemberProfile;
use crate::pages::remote::{Remote, fetch_into, session_client, session_identity_id};
use crate::state::session::SessionStore;
use crate::util::lifecycle::MountFlag;

/// Titled groups of label/value rows; blank values read "Not provided".
pub fn profile_sections(profile: &MemberProfile) -> [(&'static str, Vec<(&'static str, String)>); 2] {
    let show = |value: &Option<String>| {
        value.as_deref().filter(|v| !v.trim().is_empty()).unwrap_or("Not provided").to_owned()
    };
    [
        (
            "Personal Information",
            vec![
                ("Username", show(&profile.username)),
                ("Email", show(&profile.email)),
                ("City", show(&profile.city)),
                ("Occupation", show(&profile.occupation)),
            ],
        ),
        (
            "Social Information",
            vec![("Platform", show(&profile.social_platform)), ("Profile URL", show(&profile.social_url))],
        ),
    ]
}

#[component]
pub fn MemberProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let mounted = MountFlag::install();
    let profile = RwSignal::new(Remote::<MemberProfile>::Loading);

    let load = {
        let mounted = mounted.clone();
        move || match session_identity_id(session) {
            Some(id) => {
                let client = session_client(session);
                fetch_into(
                    profile,
                    &mounted,
                    "Failed to load profile data. Please try again later.",
                    async move { client.member_profile(id).await },
                );
            }
            None => profile.set(Remote::Failed("No member ID found. Please log in.".to_owned())),
        }
    };
    load();

    view! {
        <div class="activity-container">
            {move || {
                let retry = load.clone();
                profile.with(|remote| match remote {
                    Remote::Loading => view! {
                        <div class="loading-state"><p>"Loading profile..."</p></div>
                    }
                    .into_any(),
                    Remote::Failed(message) => view! {
                        <div class="error-state">
                            <div class="error-icon">"!"</div>
                            <h3>"Error Loading Profile"</h3>
                            <p>{message.clone()}</p>
                            <button class="retry-button" on:click=move |_| retry()>"Try Again"</button>
                        </div>
                    }
                    .into_any(),
                    Remote::Ready(p) => {
                        let initial = p.initial().to_string();
                        let sections = profile_sections(p)
                            .into_iter()
                            .map(|(title, rows)| {
                                view! {
                                    <div class="profile-section">
                                        <h3 class="profile-section-title">{title}</h3>
                                        {rows
                                            .into_iter()
                                            .map(|(label, value)| view! {
                                                <div class="profile-info-item">
                                                    <span class="info-label">{label}</span>
                                                    <span class="info-value">{value}</span>
                                                </div>
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="profile-card">
                                <div class="profile-avatar">{initial}</div>
                                {sections}
                            </div>
                        }
                        .into_any()
                    }
                })
            }}
        </div>
    }
}
