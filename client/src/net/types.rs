//! Wire DTOs for the external REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's JSON exactly (including its camelCase
//! outliers) so serde round-trips stay lossless. Numeric fields accept
//! integers, integral floats and numeric strings because aggregate queries
//! serialize counts and percentages inconsistently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::Identity;

// =============================================================
// Auth
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// The user row returned by `POST /admin/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AdminUser {
    #[serde(alias = "id", deserialize_with = "deserialize_i64_from_number")]
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Present only if the API starts issuing admin tokens.
    #[serde(default)]
    pub token: Option<String>,
}

impl AdminUser {
    pub fn identity(&self) -> Identity {
        Identity {
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            ..Identity::new(self.user_id)
        }
    }

    /// Token to record for the admin session.
    ///
    /// The admin endpoint does not issue one today, so a local marker keyed
    /// by user id stands in; the API stays the authority for every call.
    pub fn session_token(&self) -> String {
        self.token
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("admin-session-{}", self.user_id))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MemberLoginResponse {
    pub token: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
}

/// Body of `POST /member/register`. Optional fields are sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemberRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub city: Option<String>,
    pub occupation: Option<String>,
    pub social_platform: Option<String>,
    pub social_url: Option<String>,
}

// =============================================================
// Admin dashboards
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardNumbers {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_users: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub approved_members: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub pending_requests: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub trusted_sources: i64,
}

/// One bar of the tweet verification-status histogram.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NamedCount {
    pub name: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub value: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TopMember {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub votes: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApprovedMember {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub admin_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_votes: i64,
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub accuracy_percentage: f64,
}

impl ApprovedMember {
    pub fn display_name(&self) -> &str {
        display_name(self.username.as_deref(), self.admin_name.as_deref())
    }

    pub fn role_label(&self) -> &'static str {
        role_label(self.role.as_deref())
    }

    /// `YYYY-MM-DD` part of `created_at`, if present.
    pub fn joined_date(&self) -> Option<&str> {
        self.created_at.as_deref().map(|ts| ts.split('T').next().unwrap_or(ts))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApprovalRequest {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub admin_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl ApprovalRequest {
    pub fn display_name(&self) -> &str {
        display_name(self.username.as_deref(), self.admin_name.as_deref())
    }

    /// The Twitter link if there is one, else the first link.
    pub fn preferred_link(&self) -> Option<&SocialLink> {
        self.social_links
            .iter()
            .find(|link| link.platform.eq_ignore_ascii_case("twitter"))
            .or_else(|| self.social_links.first())
    }
}

/// Body of `POST /admin/platform_accounts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformAccount {
    pub name: String,
    pub platform: String,
    pub url: String,
    pub category: String,
    pub admin_id: i64,
}

// =============================================================
// Member area
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Tweet {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub tweet_id: i64,
    #[serde(default, alias = "tweet_text")]
    pub content: String,
    #[serde(default)]
    pub submit_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    pub tweet_id: i64,
    pub user_id: i64,
    pub vote: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VoteResponse {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub vote_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VoteSourceRequest {
    pub vote_id: i64,
    pub source_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ActivityItem {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(rename = "postContent", default)]
    pub post_content: String,
    #[serde(rename = "userVote", default)]
    pub user_vote: String,
    #[serde(rename = "addedSources", default)]
    pub added_sources: Vec<String>,
}

impl ActivityItem {
    /// Whether the member marked the post as true.
    pub fn voted_true(&self) -> bool {
        self.user_vote.eq_ignore_ascii_case("true")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MemberProfile {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(rename = "socialPlatform", default)]
    pub social_platform: Option<String>,
    #[serde(rename = "socialUrl", default)]
    pub social_url: Option<String>,
}

impl MemberProfile {
    /// Uppercased first letter of the username, for the avatar badge.
    pub fn initial(&self) -> char {
        self.username
            .as_deref()
            .and_then(|name| name.chars().next())
            .map_or('U', |c| c.to_ascii_uppercase())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Contributions {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_votes: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_sources: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub current_streak: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Accuracy {
    #[serde(default, deserialize_with = "deserialize_f64_lenient")]
    pub accuracy: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct VotesOnDay {
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub votes: i64,
}

// =============================================================
// Helpers
// =============================================================

fn display_name<'a>(username: Option<&'a str>, admin_name: Option<&'a str>) -> &'a str {
    username.or(admin_name).filter(|n| !n.is_empty()).unwrap_or("No Name")
}

fn role_label(role: Option<&str>) -> &'static str {
    if role.is_some_and(|r| r.eq_ignore_ascii_case("admin")) { "Admin" } else { "Member" }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0.0),
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected number, got {s:?}"))),
        _ => Err(D::Error::custom("expected number")),
    }
}
