//! Member dashboard: accuracy, contribution totals, votes over time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route `/member`. All three requests are keyed by the session
//! identity's id. A missing accuracy score shows as 0 and a failed
//! votes-over-time request shows an empty ten-day chart, so the screen
//! always renders something usable.

#[cfg(test)]
#[path = "member_dashboard_test.rs"]
mod member_dashboard_test;

use leptos::prelude::*;

use crate::net::types::{Accuracy, Contributions, VotesOnDay};
use crate::pages::chart::{format_count, format_percent};
use crate::pages::remote::{Remote, fetch_into, session_client, session_identity_id};
use crate::state::session::SessionStore;
use crate::util::lifecycle::MountFlag;

const CHART_WIDTH: f64 = 650.0;
const CHART_HEIGHT: f64 = 200.0;
const PLACEHOLDER_DAYS: usize = 10;

/// Ten empty days shown when the history cannot be loaded.
pub fn placeholder_days() -> Vec<VotesOnDay> {
    (1..=PLACEHOLDER_DAYS).map(|i| VotesOnDay { date: format!("Day {i}"), votes: 0 }).collect()
}

/// Y-axis ticks at 0, 25, 50, 75 and 100 percent of the peak (at least 1).
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn y_axis_labels(days: &[VotesOnDay]) -> [i64; 5] {
    let max = days.iter().map(|d| d.votes).max().unwrap_or(0).max(1);
    let tick = |fraction: f64| (max as f64 * fraction).ceil() as i64;
    [0, tick(0.25), tick(0.5), tick(0.75), max]
}

/// SVG polyline `points` for the series, scaled into `width` x `height`.
#[allow(clippy::cast_precision_loss)]
pub fn polyline_points(days: &[VotesOnDay], width: f64, height: f64) -> String {
    let max = days.iter().map(|d| d.votes).max().unwrap_or(0).max(1) as f64;
    let step = if days.len() > 1 { width / (days.len() - 1) as f64 } else { 0.0 };
    days.iter()
        .enumerate()
        .map(|(i, day)| {
            let x = step * i as f64;
            let y = height - (day.votes.max(0) as f64 / max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name shown in the header: the API's username, else the session's, else "Member".
pub fn greeting_name(contributions: Option<&Contributions>, session_name: Option<String>) -> String {
    contributions
        .map(|c| c.username.clone())
        .filter(|n| !n.is_empty())
        .or(session_name.filter(|n| !n.is_empty()))
        .unwrap_or_else(|| "Member".to_owned())
}

#[component]
pub fn MemberDashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let mounted = MountFlag::install();

    let accuracy = RwSignal::new(Remote::<Accuracy>::Loading);
    let contributions = RwSignal::new(Remote::<Contributions>::Loading);
    let history = RwSignal::new(Remote::<Vec<VotesOnDay>>::Loading);

    match session_identity_id(session) {
        Some(member_id) => {
            let client = session_client(session);
            let c = client.clone();
            fetch_into(accuracy, &mounted, "Failed to fetch accuracy data", async move {
                c.member_accuracy(member_id).await
            });
            let c = client.clone();
            fetch_into(contributions, &mounted, "Failed to fetch contribution data", async move {
                c.member_contributions(member_id).await
            });
            fetch_into(history, &mounted, "Failed to fetch vote data", async move {
                client.votes_over_time(member_id).await
            });
        }
        None => {
            log::warn!("member dashboard opened without a member identity");
            let missing = "Your session has no member identity. Sign in again.".to_owned();
            contributions.set(Remote::Failed(missing));
            accuracy.set(Remote::Ready(Accuracy::default()));
            history.set(Remote::Ready(Vec::new()));
        }
    }

    let session_name = move || session.with(|s| s.session().identity().and_then(|i| i.username.clone()));
    let name = move || contributions.with(|c| greeting_name(c.ready(), session_name()));

    let accuracy_text = move || {
        accuracy.with(|a| match a {
            Remote::Loading => "...".to_owned(),
            Remote::Ready(a) => format_percent(a.accuracy),
            Remote::Failed(_) => format_percent(0.0),
        })
    };
    let votes_text = move || {
        contributions.with(|c| c.ready().map_or_else(|| "0".to_owned(), |c| format_count(c.total_votes)))
    };
    let sources_text = move || {
        contributions.with(|c| c.ready().map_or_else(|| "0".to_owned(), |c| format_count(c.total_sources)))
    };
    let streak_text = move || contributions.with(|c| c.ready().map_or(0, |c| c.current_streak));

    let days = move || {
        history.with(|h| match h {
            Remote::Ready(days) if !days.is_empty() => days.clone(),
            _ => placeholder_days(),
        })
    };

    view! {
        <main class="dashboard">
            <div class="dashboard-header">
                <div>
                    <h1 class="dashboard-title">"Member Dashboard"</h1>
                    <p class="dashboard-subtitle">"Welcome back, track your post verification activity"</p>
                </div>
                <div class="user-profile">
                    <p class="user-name">{name}</p>
                    <p class="user-role">"Active Member"</p>
                </div>
            </div>
            <Show when=move || contributions.with(|c| c.error().is_some())>
                <div class="error-banner">
                    {move || contributions.with(|c| c.error().unwrap_or_default().to_owned())}
                </div>
            </Show>
            <div class="stats-grid">
                <div class="stat-card stat-blue">
                    <span class="stat-icon">"🗳️"</span>
                    <p class="stat-title">"Total Votes Cast"</p>
                    <h2 class="stat-value">{votes_text}</h2>
                </div>
                <div class="stat-card stat-cyan">
                    <span class="stat-icon">"📚"</span>
                    <p class="stat-title">"Sources Added"</p>
                    <h2 class="stat-value">{sources_text}</h2>
                </div>
                <div class="stat-card stat-blue">
                    <span class="stat-icon">"📈"</span>
                    <p class="stat-title">"Accuracy Meter"</p>
                    <h2 class="stat-value">{accuracy_text}</h2>
                    <p class="stat-trend">{move || format!("{} day streak", streak_text())}</p>
                </div>
            </div>
            <div class="chart-card line-chart-card">
                <div class="chart-header">
                    <h3 class="chart-title">"Votes Cast Over Time"</h3>
                </div>
                {move || {
                    if history.with(Remote::is_loading) {
                        return view! { <div class="chart-loading">"Loading vote data..."</div> }.into_any();
                    }
                    let days = days();
                    let labels = y_axis_labels(&days);
                    let points = polyline_points(&days, CHART_WIDTH, CHART_HEIGHT);
                    view! {
                        <div class="line-chart">
                            <div class="chart-y-axis">
                                {labels.iter().rev().map(|l| view! { <span>{*l}</span> }).collect_view()}
                            </div>
                            <svg viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}") class="chart-svg">
                                <polyline points=points fill="none" stroke="#6B5AED" stroke-width="3"></polyline>
                            </svg>
                            <div class="chart-x-axis">
                                {days.into_iter().map(|d| view! { <span>{d.date}</span> }).collect_view()}
                            </div>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </main>
    }
}
