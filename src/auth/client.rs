//! Auth sub-client: login, logout, keep-alive, token persistence.

use crate::auth::session::SessionState;
use crate::auth::token::TokenFile;
use crate::auth::{AuthCredentials, AuthState, LoginDetails, LoginResponse};
use crate::client::NeosClient;
use crate::error::{AuthError, SdkError};
use crate::http::client::USER_SESSIONS_PATH;
use crate::http::{GatePolicy, Method};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a NeosClient,
}

impl<'a> Auth<'a> {
    /// Log in and store the session inside the client.
    ///
    /// Bypasses the refresh gate, so it also works after the session has
    /// gone past the renewal window. Wrong credentials surface as
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, details: &LoginDetails) -> Result<AuthCredentials, SdkError> {
        let http = &self.client.http;
        let request = http
            .request(Method::Post, USER_SESSIONS_PATH)
            .json(serde_json::to_value(details)?);

        let response: LoginResponse = http.execute(request, GatePolicy::Bypass).await?.decode()?;

        let session = SessionState {
            user_id: response.user_id,
            token: response.token,
            secret_machine_id: response.secret_machine_id,
            expire: response.expire,
            last_update: Some(self.client.session.now()),
        };
        tracing::info!(user_id = %session.user_id, expire = %session.expire, "Logged in");
        self.client.session.establish(session).await;

        self.client
            .session
            .credentials()
            .await
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }

    /// End the session on the server and forget it locally.
    ///
    /// Local state is cleared even when the server call fails; the server
    /// error is still returned.
    pub async fn logout(&self) -> Result<(), SdkError> {
        let session = self
            .client
            .session
            .clear()
            .await
            .ok_or(AuthError::NotAuthenticated)?;

        // The session was cleared above, so the header has to be set here.
        let request = self
            .client
            .http
            .request(
                Method::Delete,
                &format!(
                    "{}/{}/{}",
                    USER_SESSIONS_PATH,
                    urlencoding::encode(&session.user_id),
                    urlencoding::encode(&session.token)
                ),
            )
            .header("Authorization", session.authorization());

        match self.client.http.execute(request, GatePolicy::Bypass).await {
            Ok(_) => {
                tracing::info!(user_id = %session.user_id, "Logged out");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(user_id = %session.user_id, error = %e, "Logout failed on the server");
                Err(e)
            }
        }
    }

    /// Extend the server-side session now instead of waiting for the gate.
    pub async fn extend_session(&self) -> Result<(), SdkError> {
        if self.client.session.user_id().await.is_none() {
            return Err(AuthError::NotAuthenticated.into());
        }
        self.client.http.keep_alive().await
    }

    /// Restore a session from the client's token file.
    ///
    /// A missing or expired file is [`AuthError::NoToken`]. A restored
    /// session has no last-update mark, so the refresh gate leaves it alone
    /// until the next login or keep-alive.
    pub async fn load_token(&self) -> Result<AuthCredentials, SdkError> {
        let file = TokenFile::load(&self.client.token_path, self.client.session.now())?;
        tracing::info!(user_id = %file.user_id, path = %self.client.token_path.display(), "Restored session token");

        self.client
            .session
            .establish(SessionState {
                user_id: file.user_id,
                token: file.token,
                secret_machine_id: file.secret_machine_id,
                expire: file.expire,
                last_update: None,
            })
            .await;

        self.client
            .session
            .credentials()
            .await
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }

    /// Write the active session to the client's token file.
    pub async fn save_token(&self) -> Result<(), SdkError> {
        let session = self
            .client
            .session
            .snapshot()
            .await
            .ok_or(AuthError::NotAuthenticated)?;

        TokenFile {
            user_id: session.user_id,
            expire: session.expire,
            token: session.token,
            secret_machine_id: session.secret_machine_id,
        }
        .save(&self.client.token_path)?;

        tracing::debug!(path = %self.client.token_path.display(), "Saved session token");
        Ok(())
    }

    pub async fn state(&self) -> AuthState {
        self.client.session.state().await
    }

    /// Current session details (if any). Never includes the token.
    pub async fn credentials(&self) -> Option<AuthCredentials> {
        self.client.session.credentials().await
    }

    /// True while a session is held and not past the renewal window.
    pub async fn is_authenticated(&self) -> bool {
        self.state().await == AuthState::Authenticated
    }
}
