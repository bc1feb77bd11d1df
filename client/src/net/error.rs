//! Error type for calls to the external REST API.
//!
//! ERROR HANDLING
//! ==============
//! Screens never branch on transport details. They show
//! [`ApiError::user_message`] in their own banner and let the user retry.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The API answered with a non-success status.
    #[error("{}", rejected_display(*status, detail.as_deref()))]
    Rejected { status: u16, detail: Option<String> },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

fn rejected_display(status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => detail.to_owned(),
        None => format!("request failed with status {status}"),
    }
}

impl ApiError {
    /// Build a rejection from a status code and raw response body.
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, detail: rejection_message(body) }
    }

    /// HTTP status, when the API answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Banner text: the API's own explanation if it gave one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Extract a human-readable reason from an error body.
///
/// Looks at `detail` first (a string, or a list of `{ "msg": ... }` entries
/// as produced by request validation), then `message`.
pub fn rejection_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let from_detail = match value.get("detail") {
        Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail.clone()),
        Some(Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    };
    from_detail.or_else(|| {
        value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_owned)
    })
}
