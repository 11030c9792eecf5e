//! Low-level HTTP client: `NeosHttp`.
//!
//! Owns the transport and the session gate. Every request goes through
//! [`NeosHttp::execute`]: gate check (keep-alive or fail fast), header
//! injection, transport call, then [`classify`].

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::session::{Gate, SessionManager};
use crate::error::{AuthError, SdkError};
use crate::http::response::{classify, Payload};
use crate::http::transport::{HttpRequest, Method, Transport};
use crate::network::USER_AGENT;

/// Keep-alive / login / logout resource.
pub(crate) const USER_SESSIONS_PATH: &str = "/userSessions";

/// Whether a request passes through the session refresh gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePolicy {
    /// Keep the session alive first, or fail if it is past the renewal window.
    Enforce,
    /// Send as-is (login, logout, the keep-alive itself).
    Bypass,
}

/// Low-level HTTP client for the Neos cloud API.
pub struct NeosHttp {
    base_url: String,
    transport: Arc<dyn Transport>,
    session: Arc<SessionManager>,
}

impl NeosHttp {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, session: Arc<SessionManager>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for an API path (leading `/` included).
    pub fn request(&self, method: Method, path: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{}", self.base_url, path))
    }

    // ── Typed helpers ────────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        self.send(self.request(Method::Get, path)).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, SdkError> {
        let mut request = self.request(Method::Get, path);
        for (name, value) in query {
            request = request.query(*name, value);
        }
        self.send(request).await
    }

    /// Execute through the gate and decode the payload into `T`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, SdkError> {
        self.execute(request, GatePolicy::Enforce).await?.decode()
    }

    // ── Core ─────────────────────────────────────────────────────────────

    /// Execute a request and classify the response.
    pub async fn execute(&self, request: HttpRequest, gate: GatePolicy) -> Result<Payload, SdkError> {
        if gate == GatePolicy::Enforce {
            match self.session.gate().await {
                Gate::Open => {}
                Gate::KeepAlive => self.keep_alive().await?,
                Gate::Expired => {
                    tracing::debug!(url = %request.url, "Session past renewal window, refusing request");
                    return Err(AuthError::expired().into());
                }
            }
        }
        self.dispatch(request).await
    }

    /// Extend the server-side session and advance the last-update mark.
    pub(crate) async fn keep_alive(&self) -> Result<(), SdkError> {
        tracing::debug!("Sending session keep-alive");
        self.dispatch(self.request(Method::Patch, USER_SESSIONS_PATH))
            .await?;
        self.session.touch().await;
        Ok(())
    }

    async fn dispatch(&self, mut request: HttpRequest) -> Result<Payload, SdkError> {
        request = request.header("User-Agent", USER_AGENT);
        if request.header_value("Authorization").is_none() {
            match self.session.authorization().await {
                Some(value) => request = request.header("Authorization", value),
                None => tracing::debug!(url = %request.url, "Sending request without credentials"),
            }
        }

        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await?;
        tracing::debug!(
            status = response.status,
            method = %method,
            url = %url,
            "Neos API request"
        );

        classify(response)
    }
}

impl Clone for NeosHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
            session: self.session.clone(),
        }
    }
}
