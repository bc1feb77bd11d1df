//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is created at the application root and provided as
//! `RwSignal<SessionStore>`. The route guard reads it to pick chrome, login
//! screens call [`SessionStore::login`] after the API accepted credentials,
//! and the sidebars call [`SessionStore::logout`].
//!
//! DESIGN
//! ======
//! The session persists as a single versioned record so a reload can never
//! observe a token without its audience. Sessions written by older builds as
//! two loose keys (`member_token`, `member_data`) are migrated on first read.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails. Corrupt records read as "no session" and storage
//! write failures are logged while the in-memory state still changes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::util::storage::SessionStorage;

/// Storage key of the versioned session record.
pub const SESSION_KEY: &str = "factcheck_session";
/// Storage key of the bare token written by older builds.
pub const LEGACY_TOKEN_KEY: &str = "member_token";
/// Storage key of the JSON identity written by older builds.
pub const LEGACY_IDENTITY_KEY: &str = "member_data";
/// Current session record layout.
pub const SESSION_VERSION: u32 = 1;

/// Which side of the dashboard an authenticated session belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Admin,
    Member,
}

impl Audience {
    /// Public login route for this audience.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Admin => "/login",
            Self::Member => "/m_login",
        }
    }

    /// Landing route after a successful login.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/",
            Self::Member => "/member",
        }
    }
}

/// The authenticated user's profile record, as returned by the login APIs.
///
/// Only `id` is guaranteed; everything else is informational.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Any further fields the API sent, kept so they survive a reload.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Identity {
    /// Identity carrying only an id.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            email: None,
            role: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Display label: username, then email, then `#id`.
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// An authenticated session. `token` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub audience: Audience,
    pub identity: Option<Identity>,
}

/// Who, if anyone, is signed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(AuthSession),
}

impl Session {
    /// Build an authenticated session, or `Anonymous` when `token` is empty.
    pub fn authenticated(audience: Audience, identity: Option<Identity>, token: impl Into<String>) -> Self {
        let token = token.into();
        if token.is_empty() {
            return Self::Anonymous;
        }
        Self::Authenticated(AuthSession { token, audience, identity })
    }

    /// True iff a non-empty token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(auth) => Some(auth.token.as_str()),
        }
    }

    pub fn audience(&self) -> Option<Audience> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(auth) => Some(auth.audience),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(auth) => auth.identity.as_ref(),
        }
    }

    /// Id of the signed-in user, used to build per-member API paths.
    pub fn identity_id(&self) -> Option<i64> {
        self.identity().map(|identity| identity.id)
    }
}

/// On-disk layout of a session.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    version: u32,
    token: String,
    audience: Audience,
    #[serde(default)]
    identity: Option<Identity>,
}

/// Decode the versioned record. Anything unexpected reads as no session.
fn decode_record(raw: &str) -> Option<AuthSession> {
    let record: PersistedSession = serde_json::from_str(raw).ok()?;
    if record.version != SESSION_VERSION || record.token.is_empty() {
        return None;
    }
    Some(AuthSession {
        token: record.token,
        audience: record.audience,
        identity: record.identity,
    })
}

/// Decode the two loose keys written by older builds.
///
/// Those builds only stored a session for members, and treated a missing
/// identity as the admin layout; the audience is derived the same way.
fn decode_legacy(token: Option<String>, identity_raw: Option<String>) -> Option<AuthSession> {
    let token = token.filter(|t| !t.is_empty())?;
    let identity = identity_raw.and_then(|raw| serde_json::from_str::<Identity>(&raw).ok());
    let audience = if identity.is_some() { Audience::Member } else { Audience::Admin };
    Some(AuthSession { token, audience, identity })
}

fn encode_record(auth: &AuthSession) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PersistedSession {
        version: SESSION_VERSION,
        token: auth.token.clone(),
        audience: auth.audience,
        identity: auth.identity.clone(),
    })
}

/// Single source of truth for the signed-in user, surviving page reloads.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    session: Session,
    restored: bool,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &self.session)
            .field("restored", &self.restored)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Anonymous store that has not read `storage` yet.
    ///
    /// Used for the server render and the first hydrated frame so both
    /// produce identical markup; call [`Self::restore`] once in the browser.
    pub fn pending(storage: impl SessionStorage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
            session: Session::Anonymous,
            restored: false,
        }
    }

    /// Store populated from whatever `storage` holds.
    pub fn initialize(storage: impl SessionStorage + 'static) -> Self {
        let mut store = Self::pending(storage);
        store.restore();
        store
    }

    /// Re-read the persisted session, replacing in-memory state.
    pub fn restore(&mut self) {
        self.session = self.load();
        self.restored = true;
    }

    fn load(&self) -> Session {
        if let Some(raw) = self.storage.get(SESSION_KEY) {
            return match decode_record(&raw) {
                Some(auth) => Session::Authenticated(auth),
                None => {
                    log::warn!("discarding unreadable session record");
                    Session::Anonymous
                }
            };
        }

        let legacy = decode_legacy(
            self.storage.get(LEGACY_TOKEN_KEY),
            self.storage.get(LEGACY_IDENTITY_KEY),
        );
        match legacy {
            Some(auth) => {
                log::info!("migrating legacy session record");
                self.persist(&auth);
                Session::Authenticated(auth)
            }
            None => Session::Anonymous,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True iff a non-empty token is held.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Whether durable storage has been read yet.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Record a session the API has already accepted.
    ///
    /// Identity, token and audience are replaced together and written as one
    /// record. An empty token signs the user out instead.
    pub fn login(&mut self, audience: Audience, identity: Option<Identity>, token: impl Into<String>) {
        match Session::authenticated(audience, identity, token) {
            Session::Authenticated(auth) => {
                self.persist(&auth);
                self.session = Session::Authenticated(auth);
                self.restored = true;
            }
            Session::Anonymous => {
                log::warn!("login called without a token; clearing session");
                self.logout();
            }
        }
    }

    /// Forget the session in memory and in durable storage.
    pub fn logout(&mut self) {
        self.remove_keys(&[SESSION_KEY, LEGACY_TOKEN_KEY, LEGACY_IDENTITY_KEY]);
        self.session = Session::Anonymous;
        self.restored = true;
    }

    /// Write `auth` as the only stored record.
    ///
    /// When the write fails every stored key is cleared, so a reload comes
    /// back anonymous rather than as whoever was signed in before.
    fn persist(&self, auth: &AuthSession) {
        let written = match encode_record(auth) {
            Ok(raw) => self.storage.set(SESSION_KEY, &raw).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match written {
            Ok(()) => self.remove_keys(&[LEGACY_TOKEN_KEY, LEGACY_IDENTITY_KEY]),
            Err(e) => {
                log::warn!("failed to persist session: {e}");
                self.remove_keys(&[SESSION_KEY, LEGACY_TOKEN_KEY, LEGACY_IDENTITY_KEY]);
            }
        }
    }

    fn remove_keys(&self, keys: &[&str]) {
        for key in keys {
            if let Err(e) = self.storage.remove(key) {
                log::warn!("failed to clear {key}: {e}");
            }
        }
    }
}
