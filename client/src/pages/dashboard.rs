//! Admin dashboard: platform counters, verification histogram, top members.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route `/` of the admin layout. The three panels load
//! independently, so one failing endpoint leaves the others intact.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::{DashboardNumbers, NamedCount, TopMember};
use crate::pages::chart::{bar_color, bar_percentages, format_count};
use crate::pages::remote::{Remote, fetch_into, session_client};
use crate::state::session::SessionStore;
use crate::util::lifecycle::MountFlag;

/// Title and value of each summary card, in display order.
pub fn summary_cards(numbers: &DashboardNumbers) -> [(&'static str, String); 4] {
    [
        ("Total Users", format_count(numbers.total_users)),
        ("Approved Members", format_count(numbers.approved_members)),
        ("Pending Requests", format_count(numbers.pending_requests)),
        ("Trusted Sources", format_count(numbers.trusted_sources)),
    ]
}

/// Histogram rows paired with their bar width and color.
pub fn histogram_bars(data: &[NamedCount]) -> Vec<(NamedCount, f64, &'static str)> {
    let values: Vec<i64> = data.iter().map(|row| row.value).collect();
    data.iter()
        .cloned()
        .zip(bar_percentages(&values))
        .enumerate()
        .map(|(i, (row, width))| (row, width, bar_color(i)))
        .collect()
}

/// Name of the member with the most votes, if any voted.
pub fn top_contributor(members: &[TopMember]) -> Option<&str> {
    members.first().map(|m| m.name.as_str())
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let mounted = MountFlag::install();

    let numbers = RwSignal::new(Remote::<DashboardNumbers>::Loading);
    let histogram = RwSignal::new(Remote::<Vec<NamedCount>>::Loading);
    let top = RwSignal::new(Remote::<Vec<TopMember>>::Loading);

    let client = session_client(session);
    {
        let client = client.clone();
        fetch_into(numbers, &mounted, "Error fetching dashboard data", async move {
            client.dashboard_numbers().await
        });
    }
    {
        let client = client.clone();
        fetch_into(histogram, &mounted, "Error fetching tweet verification stats", async move {
            client.tweet_histogram().await
        });
    }
    fetch_into(top, &mounted, "Error fetching top members", async move { client.top_members().await });

    let admin_name = move || {
        session.with(|s| s.session().identity().map(|i| i.display_name())).unwrap_or_else(|| "Admin".to_owned())
    };

    let cards = move || {
        numbers.with(|remote| match remote {
            Remote::Loading => summary_cards(&DashboardNumbers::default())
                .into_iter()
                .map(|(title, _)| (title, "Loading...".to_owned()))
                .collect::<Vec<_>>(),
            Remote::Ready(n) => summary_cards(n).into_iter().collect(),
            Remote::Failed(_) => summary_cards(&DashboardNumbers::default())
                .into_iter()
                .map(|(title, _)| (title, "n/a".to_owned()))
                .collect(),
        })
    };

    view! {
        <div class="dashboard-container">
            <div class="dashboard-header">
                <div>
                    <h1 class="dashboard-title">"Admin Dashboard"</h1>
                    <p class="dashboard-subtitle">"Welcome back"</p>
                </div>
                <div class="user-profile">
                    <p class="user-name">{admin_name}</p>
                    <p class="user-role">"Admin"</p>
                </div>
            </div>
            <Show when=move || numbers.with(|r| r.error().is_some())>
                <div class="error-banner">{move || numbers.with(|r| r.error().unwrap_or_default().to_owned())}</div>
            </Show>
            <div class="stats-grid">
                {move || {
                    cards()
                        .into_iter()
                        .map(|(title, value)| {
                            view! {
                                <div class="stat-card">
                                    <h3 class="stat-title">{title}</h3>
                                    <p class="stat-value">{value}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="dashboard-main-grid">
                <div class="dashboard-card">
                    <h2 class="card-header">"Tweet Verification Status"</h2>
                    {move || {
                        histogram.with(|remote| match remote {
                            Remote::Loading => view! { <p class="card-status">"Loading..."</p> }.into_any(),
                            Remote::Failed(message) => {
                                view! { <p class="card-status card-status--error">{message.clone()}</p> }.into_any()
                            }
                            Remote::Ready(rows) => {
                                histogram_bars(rows)
                                    .into_iter()
                                    .map(|(row, width, color)| {
                                        let style = format!("width: {width:.1}%; background-color: {color}");
                                        view! {
                                            <div class="bar-row">
                                                <span class="bar-row__label">{row.name}</span>
                                                <div class="bar-row__track">
                                                    <div class="bar-row__bar" style=style></div>
                                                </div>
                                                <span class="bar-row__value">
                                                    {format!("{} tweets", format_count(row.value))}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        })
                    }}
                </div>
                <div class="dashboard-card">
                    <h2 class="card-header">"Top Members"</h2>
                    {move || {
                        top.with(|remote| match remote {
                            Remote::Loading => view! { <p class="card-status">"Loading..."</p> }.into_any(),
                            Remote::Failed(message) => {
                                view! { <p class="card-status card-status--error">{message.clone()}</p> }.into_any()
                            }
                            Remote::Ready(members) => {
                                let leader = top_contributor(members).unwrap_or("No votes yet").to_owned();
                                let rows = members
                                    .iter()
                                    .map(|m| {
                                        view! {
                                            <li class="activity-item">
                                                <span class="title">{m.name.clone()}</span>
                                                <span class="count">{format_count(m.votes)}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view();
                                view! {
                                    <p class="activity-highlight">"Top Contributor: " {leader}</p>
                                    <ul class="activity-list">{rows}</ul>
                                }
                                .into_any()
                            }
                        })
                    }}
                </div>
            </div>
        </div>
    }
}
