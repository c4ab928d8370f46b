//! Session controller: one context object provided at the app root and
//! injected into every view. It owns the backend auth client, mirrors the
//! authenticated flag into a signal, and carries the login/signup/guest/
//! logout flows so views stay presentational.

use std::rc::Rc;

use chrono::Utc;
use dioxus::prelude::*;
use tracing::{info, warn};

use courseshare_core::auth::{
    classify_sign_up, map_sign_in_error, map_sign_up_error, username_from_email,
    validate_credentials, SignUpOutcome,
};
use courseshare_core::models::AuthUser;

use crate::api::auth::AuthClient;
use crate::api::db::{Db, PROFILES_TABLE};
use crate::api::ApiError;
use crate::config;

#[derive(Clone, Copy)]
pub struct SessionContext {
    authenticated: Signal<bool>,
    client: Signal<Rc<AuthClient>>,
}

/// Set up the session context for the component tree. Restores any persisted
/// session once at startup and keeps a session-change subscription alive for
/// the app's lifetime; the handle unsubscribes when the root unmounts.
pub fn use_session_provider() -> SessionContext {
    let authenticated = use_signal(|| false);
    let client = use_signal(|| Rc::new(AuthClient::new(config::backend())));

    use_hook(|| {
        let client = (*client.peek()).clone();
        let subscription = client.on_auth_state_change(move |event, session| {
            info!("Auth state changed: {event:?}");
            let mut authenticated = authenticated;
            authenticated.set(session.is_some());
        });
        Rc::new(subscription)
    });

    use_future(move || async move {
        let client = (*client.peek()).clone();
        let restored = restore_session(&client).await;
        let mut authenticated = authenticated;
        authenticated.set(restored);
    });

    use_context_provider(|| SessionContext {
        authenticated,
        client,
    })
}

pub fn use_session() -> SessionContext {
    use_context()
}

/// Whether a usable session already exists. An expired session gets exactly
/// one refresh attempt before the user is considered signed out.
async fn restore_session(client: &Rc<AuthClient>) -> bool {
    let Some(session) = client.stored_session() else {
        return false;
    };
    if !session.is_expired(Utc::now().timestamp()) {
        return true;
    }
    if session.refresh_token.is_empty() {
        client.forget_session();
        return false;
    }
    match client.refresh_session().await {
        Ok(_) => true,
        Err(error) => {
            warn!("Session restore failed: {error}");
            false
        }
    }
}

impl SessionContext {
    pub fn is_authenticated(&self) -> bool {
        (self.authenticated)()
    }

    pub fn client(&self) -> Rc<AuthClient> {
        (*self.client.peek()).clone()
    }

    pub fn db(&self) -> Db {
        Db::new(self.client())
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.client().current_user()
    }

    /// Uniform absent-identity policy: every view that needs an identity
    /// reports the same error text when there is none.
    pub fn require_user(&self) -> Result<AuthUser, String> {
        self.current_user()
            .ok_or_else(|| ApiError::Unauthenticated.to_string())
    }

    /// Validates locally first: an empty field or malformed address never
    /// reaches the backend. The authenticated flag flips via the
    /// session-change listener once sign-in succeeds.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        validate_credentials(email, password).map_err(|error| error.to_string())?;
        match self.client().sign_in(email, password).await {
            Ok(_) => Ok(()),
            Err(ApiError::Service { message, .. }) => Err(map_sign_in_error(&message)),
            Err(error) => {
                warn!("Sign-in failed: {error}");
                Err(error.to_string())
            }
        }
    }

    /// Same local gate as login. On a fresh account, performs the one
    /// follow-up write this app ever makes to `profiles`: seeding the
    /// username from the email's local part. Never authenticates; the
    /// confirmation email gate does that later.
    pub async fn signup(&self, email: &str, password: &str) -> Result<SignUpOutcome, String> {
        validate_credentials(email, password).map_err(|error| error.to_string())?;
        let client = self.client();
        let result = match client.sign_up(email, password).await {
            Ok(result) => result,
            Err(ApiError::Service { message, .. }) => return Err(map_sign_up_error(&message)),
            Err(error) => {
                warn!("Sign-up failed: {error}");
                return Err(error.to_string());
            }
        };
        let outcome = classify_sign_up(result.identity_count);
        if outcome == SignUpOutcome::ConfirmationRequired {
            let username = username_from_email(email);
            let patch = serde_json::json!({ "username": username });
            if let Err(error) = Db::new(client)
                .update(PROFILES_TABLE, &patch, "id", &result.user_id.to_string())
                .await
            {
                warn!("Failed to seed username after signup: {error}");
            }
        }
        Ok(outcome)
    }

    /// Anonymous identity from the backend; the failure text stays generic.
    pub async fn guest_login(&self) -> Result<(), String> {
        match self.client().sign_in_anonymously().await {
            Ok(_) => Ok(()),
            Err(error) => {
                warn!("Guest sign-in failed: {error}");
                Err("Failed to sign in as guest.".to_string())
            }
        }
    }

    /// On failure the session is left untouched; on success the listener
    /// clears the authenticated flag and the caller resets navigation.
    pub async fn logout(&self) -> Result<(), String> {
        self.client()
            .sign_out()
            .await
            .map_err(|error| error.to_string())
    }
}
