//! High-level client: `NeosClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared session, and accessor methods.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::TimeDelta;

use crate::auth::client::Auth;
use crate::auth::session::SessionManager;
use crate::domain::cloud_var::client::CloudVars;
use crate::domain::friend::client::Friends;
use crate::domain::message::client::Messages;
use crate::domain::record::client::Records;
use crate::domain::session::client::Sessions;
use crate::domain::user::client::Users;
use crate::error::{AuthError, SdkError};
use crate::http::{NeosHttp, Transport};
use crate::shared::{Clock, SystemClock};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::cloud_var::client::CloudVars as CloudVarsClient;
pub use crate::domain::friend::client::Friends as FriendsClient;
pub use crate::domain::message::client::Messages as MessagesClient;
pub use crate::domain::record::client::Records as RecordsClient;
pub use crate::domain::session::client::Sessions as SessionsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// Default time a session may sit idle before requests are refused.
pub const DEFAULT_RENEWAL_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Default request timeout for the built-in transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The primary entry point for the Neos SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.users()`, `client.records()`, etc.
pub struct NeosClient {
    pub(crate) http: NeosHttp,
    pub(crate) session: Arc<SessionManager>,
    pub(crate) token_path: PathBuf,
}

impl NeosClient {
    pub fn builder() -> NeosClientBuilder {
        NeosClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn sessions(&self) -> Sessions<'_> {
        Sessions { client: self }
    }

    pub fn friends(&self) -> Friends<'_> {
        Friends { client: self }
    }

    pub fn records(&self) -> Records<'_> {
        Records { client: self }
    }

    pub fn messages(&self) -> Messages<'_> {
        Messages { client: self }
    }

    pub fn cloud_vars(&self) -> CloudVars<'_> {
        CloudVars { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn token_path(&self) -> &Path {
        &self.token_path
    }

    /// The logged-in user's id, or `NotAuthenticated`.
    pub(crate) async fn require_user_id(&self) -> Result<String, SdkError> {
        self.session
            .user_id()
            .await
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }
}

impl Clone for NeosClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            token_path: self.token_path.clone(),
        }
    }
}

impl std::fmt::Debug for NeosClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeosClient")
            .field("base_url", &self.http.base_url())
            .field("token_path", &self.token_path)
            .field("session", &self.session)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct NeosClientBuilder {
    base_url: String,
    transport: Option<Arc<dyn Transport>>,
    clock: Arc<dyn Clock>,
    renewal_window: Duration,
    token_path: PathBuf,
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    timeout: Duration,
}

impl Default for NeosClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            transport: None,
            clock: Arc::new(SystemClock),
            renewal_window: DEFAULT_RENEWAL_WINDOW,
            token_path: PathBuf::from(crate::network::DEFAULT_TOKEN_PATH),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl NeosClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Use a custom transport instead of the built-in reqwest one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// How long a session may go without a login or keep-alive before
    /// requests fail with `InvalidToken`.
    pub fn renewal_window(mut self, window: Duration) -> Self {
        self.renewal_window = window;
        self
    }

    pub fn token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = path.into();
        self
    }

    /// Request timeout for the built-in transport. Ignored with a custom one.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<NeosClient, SdkError> {
        let renewal_window = TimeDelta::from_std(self.renewal_window).map_err(|_| {
            SdkError::Validation(format!(
                "renewal window out of range: {:?}",
                self.renewal_window
            ))
        })?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(self.timeout)?,
        };

        let session = Arc::new(SessionManager::new(self.clock, renewal_window));

        Ok(NeosClient {
            http: NeosHttp::new(&self.base_url, transport, session.clone()),
            session,
            token_path: self.token_path,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::with_timeout(timeout)?))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Duration) -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Validation(
        "no transport configured; enable the `http` feature or call `transport()`".to_string(),
    ))
}
