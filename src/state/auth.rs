//! Session state machine and login flow.
//!
//! DESIGN
//! ======
//! `AuthState` is a closed set of session phases selected over with
//! exhaustive matches, so screens cannot drift into impossible
//! combinations such as a user being present while unauthenticated.
//! The async drivers take the HTTP capability as a parameter so the
//! whole flow runs in host-side tests.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::api;
use crate::net::http::HttpClient;
use crate::net::types::{Credentials, User};

/// Marker token for sessions created without a backend round trip.
pub const FALLBACK_ACCESS_TOKEN: &str = "local-browser-session";

/// Session phase for the whole app.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    /// No session; the login screen is shown.
    #[default]
    Unauthenticated,
    /// Credentials submitted, waiting on the backend.
    Authenticating,
    /// Live session; the dashboard is shown.
    Authenticated(User),
    /// Login failed and the local fallback was disabled.
    Error(String),
}

impl AuthState {
    /// Current user, if a session is live.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Whether a login round trip is in flight.
    pub fn is_authenticating(&self) -> bool {
        matches!(self, Self::Authenticating)
    }

    /// Login failure text, if the last attempt failed hard.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Local session used when the backend cannot authenticate us.
pub fn fallback_session(username: &str) -> User {
    User {
        username: username.to_owned(),
        access_token: FALLBACK_ACCESS_TOKEN.to_owned(),
    }
}

/// Resolve submitted credentials to the next session phase.
///
/// A backend rejection or network failure degrades to a local fallback
/// session when the config allows it; otherwise it surfaces as
/// [`AuthState::Error`].
pub async fn establish_session(
    client: &dyn HttpClient,
    config: &AppConfig,
    username: &str,
    password: &str,
) -> AuthState {
    let credentials = Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    match api::login(client, config, &credentials).await {
        Ok(user) => AuthState::Authenticated(user),
        Err(e) if config.allow_insecure_fallback => {
            log::warn!("login failed, falling back to a local session: {e}");
            AuthState::Authenticated(fallback_session(username))
        }
        Err(e) => AuthState::Error(format!("login failed: {e}")),
    }
}

/// Drive the signal through `Authenticating` into the resolved phase.
pub async fn run_login(
    auth: RwSignal<AuthState>,
    client: &dyn HttpClient,
    config: &AppConfig,
    username: &str,
    password: &str,
) {
    auth.set(AuthState::Authenticating);
    let next = establish_session(client, config, username, password).await;
    auth.set(next);
}
