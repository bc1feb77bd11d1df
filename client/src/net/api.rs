//! REST API client for the external fact-verification service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Non-success statuses carry
//! the API's `detail`/`message` text. Nothing is retried here; screens offer
//! their own refresh buttons.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    Accuracy, ActivityItem, AdminLoginRequest, AdminUser, ApprovalRequest, ApprovedMember, Contributions,
    DashboardNumbers, MemberLoginRequest, MemberLoginResponse, MemberProfile, MemberRegistration, NamedCount,
    PlatformAccount, TopMember, Tweet, VoteRequest, VoteResponse, VoteSourceRequest, VotesOnDay,
};
use crate::config::ApiConfig;
use crate::state::session::Session;

fn delete_member_path(member_id: i64) -> String {
    format!("/admin/delmembers/{member_id}")
}

fn accept_member_path(member_id: i64) -> String {
    format!("/admin/accept_member/{member_id}")
}

fn decline_member_path(member_id: i64) -> String {
    format!("/admin/decline_member/{member_id}")
}

fn member_tweets_path(member_id: i64) -> String {
    format!("/member/tweets/{member_id}")
}

fn member_activity_path(member_id: i64) -> String {
    format!("/member/activity/{member_id}")
}

fn member_profile_path(member_id: i64) -> String {
    format!("/member/profile/{member_id}")
}

fn member_contributions_path(member_id: i64) -> String {
    format!("/member/contributions/{member_id}")
}

fn member_accuracy_path(member_id: i64) -> String {
    format!("/member/accuracy/{member_id}")
}

fn votes_over_time_path(member_id: i64) -> String {
    format!("/member/votes-over-time/{member_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Handle for issuing API calls on behalf of the current session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiClient {
    config: ApiConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, token: None }
    }

    /// Client that sends `session`'s token as a bearer credential.
    pub fn for_session(session: &Session) -> Self {
        Self {
            token: session.token().map(str::to_owned),
            ..Self::new(ApiConfig::default())
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    // ---- Auth ----

    /// `POST /admin/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with status 401 on bad credentials.
    pub async fn admin_login(&self, body: &AdminLoginRequest) -> Result<AdminUser, ApiError> {
        self.post_json("/admin/login", body).await
    }

    /// `POST /member/register`; succeeds on `201 Created`.
    ///
    /// # Errors
    ///
    /// Returns the API's rejection, whose `detail` explains the problem.
    pub async fn register_member(&self, body: &MemberRegistration) -> Result<(), ApiError> {
        self.post_unit("/member/register", Some(body)).await
    }

    /// `POST /member/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with status 401 on bad credentials.
    pub async fn member_login(&self, body: &MemberLoginRequest) -> Result<MemberLoginResponse, ApiError> {
        self.post_json("/member/login", body).await
    }

    // ---- Admin ----

    /// `GET /admin/numbers`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn dashboard_numbers(&self) -> Result<DashboardNumbers, ApiError> {
        self.get_json("/admin/numbers").await
    }

    /// `GET /admin/tweetdata`, the verification-status histogram.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn tweet_histogram(&self) -> Result<Vec<NamedCount>, ApiError> {
        self.get_json("/admin/tweetdata").await
    }

    /// `GET /admin/top-members`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn top_members(&self) -> Result<Vec<TopMember>, ApiError> {
        self.get_json("/admin/top-members").await
    }

    /// `GET /admin/approved-members`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn approved_members(&self) -> Result<Vec<ApprovedMember>, ApiError> {
        self.get_json("/admin/approved-members").await
    }

    /// `DELETE /admin/delmembers/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the API's rejection (e.g. 404 for an unknown member).
    pub async fn delete_member(&self, member_id: i64) -> Result<(), ApiError> {
        self.delete(&delete_member_path(member_id)).await
    }

    /// `GET /admin/approval_requests`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn approval_requests(&self) -> Result<Vec<ApprovalRequest>, ApiError> {
        self.get_json("/admin/approval_requests").await
    }

    /// `POST /admin/accept_member/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the API's rejection.
    pub async fn accept_member(&self, member_id: i64) -> Result<(), ApiError> {
        self.post_unit::<()>(&accept_member_path(member_id), None).await
    }

    /// `POST /admin/decline_member/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the API's rejection.
    pub async fn decline_member(&self, member_id: i64) -> Result<(), ApiError> {
        self.post_unit::<()>(&decline_member_path(member_id), None).await
    }

    /// `POST /admin/platform_accounts`; succeeds on `201 Created`.
    ///
    /// # Errors
    ///
    /// Returns the API's rejection (e.g. 422 for an invalid URL).
    pub async fn create_platform_account(&self, body: &PlatformAccount) -> Result<(), ApiError> {
        self.post_unit("/admin/platform_accounts", Some(body)).await
    }

    // ---- Member ----

    /// `GET /member/tweets/{id}`: unverified posts the member has not voted on.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn member_tweets(&self, member_id: i64) -> Result<Vec<Tweet>, ApiError> {
        self.get_json(&member_tweets_path(member_id)).await
    }

    /// `POST /member/vote`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with status 400 for a repeat vote.
    pub async fn cast_vote(&self, body: &VoteRequest) -> Result<VoteResponse, ApiError> {
        self.post_json("/member/vote", body).await
    }

    /// `POST /member/vote_sources`.
    ///
    /// # Errors
    ///
    /// Returns the API's rejection.
    pub async fn add_vote_source(&self, body: &VoteSourceRequest) -> Result<(), ApiError> {
        self.post_unit("/member/vote_sources", Some(body)).await
    }

    /// `GET /member/activity/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn member_activity(&self, member_id: i64) -> Result<Vec<ActivityItem>, ApiError> {
        self.get_json(&member_activity_path(member_id)).await
    }

    /// `GET /member/profile/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn member_profile(&self, member_id: i64) -> Result<MemberProfile, ApiError> {
        self.get_json(&member_profile_path(member_id)).await
    }

    /// `GET /member/contributions/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn member_contributions(&self, member_id: i64) -> Result<Contributions, ApiError> {
        self.get_json(&member_contributions_path(member_id)).await
    }

    /// `GET /member/accuracy/{id}`. 404 means no votes have been scored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn member_accuracy(&self, member_id: i64) -> Result<Accuracy, ApiError> {
        self.get_json(&member_accuracy_path(member_id)).await
    }

    /// `GET /member/votes-over-time/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn votes_over_time(&self, member_id: i64) -> Result<Vec<VotesOnDay>, ApiError> {
        self.get_json(&votes_over_time_path(member_id)).await
    }

    // ---- Transport ----

    #[cfg(feature = "hydrate")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match self.token() {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(path);
            let resp = self
                .authorize(gloo_net::http::Request::get(&url))
                .send()
                .await
                .map_err(network_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(path);
            let resp = self
                .authorize(gloo_net::http::Request::post(&url))
                .json(body)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_unit<B: Serialize>(&self, path: &str, body: Option<&B>) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(path);
            let builder = self.authorize(gloo_net::http::Request::post(&url));
            let resp = match body {
                Some(body) => builder.json(body).map_err(network_error)?.send().await,
                None => builder.send().await,
            }
            .map_err(network_error)?;
            expect_success(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(path);
            let resp = self
                .authorize(gloo_net::http::Request::delete(&url))
                .send()
                .await
                .map_err(network_error)?;
            expect_success(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("api rejected {} with {status}", resp.url());
    ApiError::rejected(status, &body)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn expect_success(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(rejection(resp).await) }
}
