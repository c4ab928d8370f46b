//! Auth endpoints plus local session keeping. The client persists the
//! session in browser storage, hands it back on demand, and notifies
//! registered listeners on every session transition it observes: sign-in,
//! sign-out, token refresh, or an expiry discovered on read.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use courseshare_core::models::{AuthSession, AuthUser};

use super::{error_from_response, ApiError};
use crate::config::BackendConfig;

const SESSION_STORAGE_KEY: &str = "courseshare.auth.session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

type Listener = Rc<dyn Fn(AuthEvent, Option<&AuthSession>)>;

pub struct AuthClient {
    base: String,
    anon_key: String,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
}

/// Registration handle for session-change notifications. Dropping it (or
/// calling [`AuthSubscription::unsubscribe`]) removes the listener, so
/// teardown is deterministic.
pub struct AuthSubscription {
    id: u64,
    client: Weak<AuthClient>,
}

impl AuthSubscription {
    pub fn unsubscribe(self) {}
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Some(client) = self.client.upgrade() {
            client
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// What a successful signup tells us about the account. The session, if the
/// backend returned one, is deliberately not kept: sign-in stays gated on
/// email verification.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpResult {
    pub user_id: Uuid,
    pub identity_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: i64,
    #[serde(default)]
    expires_at: Option<i64>,
    user: RawUser,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    is_anonymous: bool,
    #[serde(default)]
    identities: Option<Vec<serde_json::Value>>,
}

impl RawUser {
    fn into_user(self) -> AuthUser {
        AuthUser {
            id: self.id,
            email: self.email,
            created_at: self.created_at,
            is_anonymous: self.is_anonymous,
        }
    }
}

impl AuthClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            base: config.project_url.to_string(),
            anon_key: config.anon_key.to_string(),
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
        }
    }

    pub(crate) fn anon_key(&self) -> &str {
        &self.anon_key
    }

    pub(crate) fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    /// Bearer value for tabular calls: the live access token when signed in,
    /// the publishable key otherwise.
    pub(crate) fn bearer(&self) -> String {
        self.current_session()
            .map(|session| session.access_token)
            .unwrap_or_else(|| self.anon_key.clone())
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base, path)
    }

    /// Register a session-change listener. The callback may fire at any time
    /// relative to other UI updates; the UI has to tolerate turning
    /// unauthenticated mid-session.
    pub fn on_auth_state_change(
        self: &Rc<Self>,
        callback: impl Fn(AuthEvent, Option<&AuthSession>) + 'static,
    ) -> AuthSubscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(callback)));
        AuthSubscription {
            id,
            client: Rc::downgrade(self),
        }
    }

    fn emit(&self, event: AuthEvent, session: Option<&AuthSession>) {
        // Snapshot first so a callback can register or drop listeners.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(event, session);
        }
    }

    /// The persisted session, if any, with no expiry check. Startup recovery
    /// uses this so an expired-but-refreshable session still gets its one
    /// refresh attempt.
    pub fn stored_session(&self) -> Option<AuthSession> {
        LocalStorage::get(SESSION_STORAGE_KEY).ok()
    }

    /// The live session. An expired one is purged and listeners are told the
    /// user signed out.
    pub fn current_session(&self) -> Option<AuthSession> {
        let session = self.stored_session()?;
        if session.is_expired(Utc::now().timestamp()) {
            self.forget_session();
            return None;
        }
        Some(session)
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.current_session().map(|session| session.user)
    }

    /// Drop the local session without telling the backend. Used when the
    /// session is already dead (expired, failed refresh). No-op when nothing
    /// is stored, so repeated calls emit a single sign-out.
    pub fn forget_session(&self) {
        if self.stored_session().is_none() {
            return;
        }
        LocalStorage::delete(SESSION_STORAGE_KEY);
        self.emit(AuthEvent::SignedOut, None);
    }

    fn store_session(&self, token: TokenResponse) -> AuthSession {
        let expires_at = token
            .expires_at
            .unwrap_or_else(|| Utc::now().timestamp() + token.expires_in);
        let session = AuthSession {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at,
            user: token.user.into_user(),
        };
        if let Err(error) = LocalStorage::set(SESSION_STORAGE_KEY, &session) {
            warn!("Failed to persist session: {error}");
        }
        session
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let response = Request::post(&self.auth_url("token?grant_type=password"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(&response).await);
        }
        let token: TokenResponse = response.json().await.map_err(ApiError::decode)?;
        let session = self.store_session(token);
        self.emit(AuthEvent::SignedIn, Some(&session));
        Ok(session)
    }

    /// Create an account. Never authenticates: verification happens over
    /// email before the first sign-in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SignUpResult, ApiError> {
        let response = Request::post(&self.auth_url("signup"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(&response).await);
        }
        // Depending on project settings the body is either the bare user or a
        // session wrapping one.
        let value: serde_json::Value = response.json().await.map_err(ApiError::decode)?;
        let user_value = value.get("user").cloned().unwrap_or(value);
        let raw: RawUser = serde_json::from_value(user_value)
            .map_err(|error| ApiError::Decode(error.to_string()))?;
        Ok(SignUpResult {
            user_id: raw.id,
            identity_count: raw.identities.as_ref().map(Vec::len),
        })
    }

    /// Anonymous sign-in: a dedicated throwaway identity from the backend,
    /// not a shared guest account.
    pub async fn sign_in_anonymously(&self) -> Result<AuthSession, ApiError> {
        let response = Request::post(&self.auth_url("signup"))
            .header("apikey", &self.anon_key)
            .json(&json!({}))
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(&response).await);
        }
        let token: TokenResponse = response.json().await.map_err(ApiError::decode)?;
        let session = self.store_session(token);
        self.emit(AuthEvent::SignedIn, Some(&session));
        Ok(session)
    }

    /// Revoke the session remotely, then drop it locally. A remote failure
    /// leaves everything as it was.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let Some(session) = self.current_session() else {
            // Nothing to revoke; make sure the local copy is gone.
            self.forget_session();
            return Ok(());
        };
        let response = Request::post(&self.auth_url("logout"))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", session.access_token))
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.ok() {
            return Err(error_from_response(&response).await);
        }
        self.forget_session();
        Ok(())
    }

    /// Exchange the refresh token for a fresh session. On rejection the
    /// stored session is unusable, so it is dropped.
    pub async fn refresh_session(&self) -> Result<AuthSession, ApiError> {
        let Some(session) = self.stored_session() else {
            return Err(ApiError::Unauthenticated);
        };
        if session.refresh_token.is_empty() {
            return Err(ApiError::Unauthenticated);
        }
        let response = Request::post(&self.auth_url("token?grant_type=refresh_token"))
            .header("apikey", &self.anon_key)
            .json(&json!({ "refresh_token": session.refresh_token }))
            .map_err(ApiError::network)?
            .send()
            .await
            .map_err(ApiError::network)?;
        if !response.ok() {
            let error = error_from_response(&response).await;
            self.forget_session();
            return Err(error);
        }
        let token: TokenResponse = response.json().await.map_err(ApiError::decode)?;
        let session = self.store_session(token);
        self.emit(AuthEvent::TokenRefreshed, Some(&session));
        Ok(session)
    }
}
