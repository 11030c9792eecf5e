//! Session domain: live world sessions and their users.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::iso8601;

/// Owner and record id of the world a session runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldId {
    pub owner_id: String,
    pub record_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub is_present: bool,
    /// Wire name is `userID`.
    #[serde(default, rename = "userID")]
    pub user_id: Option<String>,
    pub username: String,
}

/// A world session as returned by `GET /sessions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    pub normalized_session_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub corresponding_world_id: Option<WorldId>,
    pub host_user_id: String,
    pub host_machine_id: String,
    pub host_username: String,
    #[serde(default)]
    pub compatibility_hash: Option<String>,
    pub neos_version: String,
    pub headless_host: bool,
    #[serde(rename = "sessionURLs", default)]
    pub session_urls: Vec<String>,
    #[serde(default)]
    pub session_users: Vec<SessionUser>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub joined_users: i64,
    pub active_users: i64,
    pub total_joined_users: i64,
    pub total_active_users: i64,
    pub max_users: i64,
    pub mobile_friendly: bool,
    #[serde(with = "iso8601")]
    pub session_begin_time: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub last_update: DateTime<Utc>,
    pub has_ended: bool,
    pub is_valid: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Not documented by the server; kept raw.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_sessions: Option<serde_json::Value>,
}

impl Session {
    /// Users currently present in the session.
    pub fn present_users(&self) -> impl Iterator<Item = &SessionUser> {
        self.session_users.iter().filter(|u| u.is_present)
    }

    pub fn is_full(&self) -> bool {
        self.joined_users >= self.max_users
    }
}
