//! Response classification: the single policy applied to every reply.
//!
//! Precedence:
//! 1. status not in {200, 204} and body mentions invalid credentials → [`AuthError::InvalidCredentials`]
//! 2. 403 → [`AuthError::InvalidToken`] (with response headers)
//! 3. any other status not in {200, 204} → [`ApiError`]
//! 4. 200 with a JSON object carrying `message` → [`ApiError`] with that message
//! 5. 200 with JSON → [`Payload::Json`]
//! 6. 200 with anything else → [`Payload::Text`]
//! 7. 204 → [`Payload::Empty`]

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, AuthError, SdkError};
use crate::http::transport::HttpResponse;

/// Body marker the server uses for rejected logins.
pub const INVALID_CREDENTIALS_MARKER: &str = "Invalid credentials";

/// A successfully classified response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
    Empty,
}

impl Payload {
    /// Decode into `T`.
    ///
    /// Text bodies decode as a JSON string and empty bodies as `null`, so
    /// `String`, `()` and `Option<_>` targets all work.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, SdkError> {
        let value = match self {
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
            Payload::Empty => Value::Null,
        };
        Ok(serde_json::from_value(value)?)
    }

    /// The JSON value, if the body was JSON.
    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}

/// Classify a raw response.
pub fn classify(response: HttpResponse) -> Result<Payload, SdkError> {
    let HttpResponse {
        status,
        headers,
        body,
    } = response;

    match status {
        200 => classify_ok(body),
        204 => Ok(Payload::Empty),
        _ if body.contains(INVALID_CREDENTIALS_MARKER) => {
            Err(AuthError::InvalidCredentials(body).into())
        }
        403 => Err(AuthError::InvalidToken {
            reason: "Forbidden".to_string(),
            headers,
        }
        .into()),
        _ => {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| message_field(&v));
            Err(ApiError {
                status,
                message,
                body,
            }
            .into())
        }
    }
}

fn classify_ok(body: String) -> Result<Payload, SdkError> {
    if body.trim().is_empty() {
        return Ok(Payload::Empty);
    }

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => {
            if let Some(message) = message_field(&value) {
                return Err(ApiError {
                    status: 200,
                    message: Some(message),
                    body,
                }
                .into());
            }
            Ok(Payload::Json(value))
        }
        Err(_) => Ok(Payload::Text(body)),
    }
}

fn message_field(value: &Value) -> Option<String> {
    let message = value.as_object()?.get("message")?;
    Some(match message {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
