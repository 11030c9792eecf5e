//! Session state and the refresh gate.

use std::sync::Arc;

use async_lock::RwLock;
use chrono::{DateTime, TimeDelta, Utc};

use crate::auth::{AuthCredentials, AuthState};
use crate::shared::Clock;

/// Full session record, token included. Crate-private.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SessionState {
    pub user_id: String,
    pub token: String,
    pub secret_machine_id: String,
    pub expire: DateTime<Utc>,
    pub last_update: Option<DateTime<Utc>>,
}

impl SessionState {
    fn credentials(&self) -> AuthCredentials {
        AuthCredentials {
            user_id: self.user_id.clone(),
            secret_machine_id: self.secret_machine_id.clone(),
            expire: self.expire,
            last_update: self.last_update,
        }
    }

    /// `Authorization` header value: `neos {userId}:{token}`.
    pub(crate) fn authorization(&self) -> String {
        format!("neos {}:{}", self.user_id, self.token)
    }
}

/// Outcome of the pre-request session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Gate {
    /// Nothing to do (no session, or a session without a last-update mark).
    Open,
    /// Within the renewal window: extend the session before the request.
    KeepAlive,
    /// Past the renewal window: refuse the request.
    Expired,
}

/// Holds the client's session exclusively and decides keep-alive vs. fail.
pub struct SessionManager {
    state: RwLock<Option<SessionState>>,
    clock: Arc<dyn Clock>,
    renewal_window: TimeDelta,
}

impl SessionManager {
    pub(crate) fn new(clock: Arc<dyn Clock>, renewal_window: TimeDelta) -> Self {
        Self {
            state: RwLock::new(None),
            clock,
            renewal_window,
        }
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn renewal_window(&self) -> TimeDelta {
        self.renewal_window
    }

    pub(crate) async fn gate(&self) -> Gate {
        let state = self.state.read().await;
        match state.as_ref().and_then(|s| s.last_update) {
            None => Gate::Open,
            Some(last_update) if self.within_window(last_update) => Gate::KeepAlive,
            Some(_) => Gate::Expired,
        }
    }

    pub async fn state(&self) -> AuthState {
        let state = self.state.read().await;
        match state.as_ref() {
            None => AuthState::Unauthenticated,
            Some(session) => match session.last_update {
                Some(last_update) if !self.within_window(last_update) => AuthState::Expired,
                _ => AuthState::Authenticated,
            },
        }
    }

    fn within_window(&self, last_update: DateTime<Utc>) -> bool {
        self.clock.now() - last_update <= self.renewal_window
    }

    /// `Authorization` header value for the active session.
    pub(crate) async fn authorization(&self) -> Option<String> {
        self.state
            .read()
            .await
            .as_ref()
            .map(SessionState::authorization)
    }

    pub(crate) async fn user_id(&self) -> Option<String> {
        self.state.read().await.as_ref().map(|s| s.user_id.clone())
    }

    pub async fn credentials(&self) -> Option<AuthCredentials> {
        self.state.read().await.as_ref().map(SessionState::credentials)
    }

    pub(crate) async fn snapshot(&self) -> Option<SessionState> {
        self.state.read().await.clone()
    }

    pub(crate) async fn establish(&self, session: SessionState) {
        *self.state.write().await = Some(session);
    }

    /// Advance the last-update mark after a successful keep-alive.
    pub(crate) async fn touch(&self) {
        let now = self.clock.now();
        if let Some(session) = self.state.write().await.as_mut() {
            session.last_update = Some(now);
        }
    }

    pub(crate) async fn clear(&self) -> Option<SessionState> {
        self.state.write().await.take()
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("renewal_window", &self.renewal_window)
            .finish_non_exhaustive()
    }
}
