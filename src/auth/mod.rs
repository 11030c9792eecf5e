//! Authentication: login details, session state, token persistence.
//!
//! ## Session Model
//!
//! - `login()` posts [`LoginDetails`] to `/userSessions` and stores the
//!   returned user id, token, machine id and expiry inside the client.
//!   The token is never exposed through the public API.
//! - Every later request carries `Authorization: neos {userId}:{token}`.
//! - Before each request the session gate compares the time since the last
//!   update against the configured renewal window: inside it, a keep-alive
//!   `PATCH /userSessions` is sent first; past it, the request fails with
//!   [`AuthError::InvalidToken`](crate::error::AuthError::InvalidToken) and
//!   the caller has to log in again.
//! - Sessions can be saved to and restored from a token file
//!   (see [`token::TokenFile`]).

pub mod client;
pub mod session;
pub mod token;

use std::fmt;

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::shared::serde_util::iso8601;

/// Length of generated secret machine ids.
const MACHINE_ID_LEN: usize = 32;

/// Generate a random secret machine id.
pub fn generate_secret_machine_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(MACHINE_ID_LEN)
        .map(char::from)
        .collect()
}

// ============================================================================
// Login details
// ============================================================================

/// Credentials posted to `/userSessions`.
///
/// Built through [`LoginDetails::builder`]; an instance always has an
/// identity (owner id, username or email) and a password.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    owner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    password: String,
    secret_machine_id: String,
    remember_me: bool,
}

impl LoginDetails {
    pub fn builder() -> LoginDetailsBuilder {
        LoginDetailsBuilder::default()
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn secret_machine_id(&self) -> &str {
        &self.secret_machine_id
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }
}

impl fmt::Debug for LoginDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDetails")
            .field("owner_id", &self.owner_id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("secret_machine_id", &self.secret_machine_id)
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Builder for [`LoginDetails`].
#[derive(Default, Clone)]
pub struct LoginDetailsBuilder {
    owner_id: Option<String>,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    secret_machine_id: Option<String>,
    remember_me: bool,
}

impl LoginDetailsBuilder {
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.owner_id = Some(owner_id.into());
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Reuse a known machine id instead of generating one.
    pub fn secret_machine_id(mut self, id: impl Into<String>) -> Self {
        self.secret_machine_id = Some(id.into());
        self
    }

    pub fn remember_me(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }

    pub fn build(self) -> Result<LoginDetails, SdkError> {
        let owner_id = non_empty(self.owner_id);
        let username = non_empty(self.username);
        let email = non_empty(self.email);

        if owner_id.is_none() && username.is_none() && email.is_none() {
            return Err(SdkError::Validation(
                "Either an ownerId, a username or an email is needed".to_string(),
            ));
        }
        let password = non_empty(self.password)
            .ok_or_else(|| SdkError::Validation("A password is needed".to_string()))?;

        Ok(LoginDetails {
            owner_id,
            username,
            email,
            password,
            secret_machine_id: non_empty(self.secret_machine_id)
                .unwrap_or_else(generate_secret_machine_id),
            remember_me: self.remember_me,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// Session types
// ============================================================================

/// Response from `POST /userSessions`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub user_id: String,
    pub token: String,
    pub secret_machine_id: String,
    #[serde(with = "iso8601")]
    pub expire: DateTime<Utc>,
}

/// Public view of the active session. The token is intentionally absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCredentials {
    pub user_id: String,
    pub secret_machine_id: String,
    pub expire: DateTime<Utc>,
    /// Last login or keep-alive; `None` for sessions restored from disk.
    pub last_update: Option<DateTime<Utc>>,
}

/// Lifecycle state of the client session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
    /// Past the renewal window; requests fail until the next login.
    Expired,
}
