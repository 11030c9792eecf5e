//! Online status and session presence of a user.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::session::Session;
use crate::shared::serde_util::iso8601;
use crate::shared::{wire_enum, UnknownVariant};

wire_enum! {
    pub enum OnlineStatus {
        Online => "Online",
        Away => "Away",
        Busy => "Busy",
        Offline => "Offline",
    }
}

/// Who may join the user's current session. Ordered from most to least
/// restrictive; numeric on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum CurrentSessionAccessLevel {
    Private = 0,
    Lan = 1,
    Contacts = 2,
    ContactsPlus = 3,
    RegisteredUsers = 4,
    Anyone = 5,
}

impl CurrentSessionAccessLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            CurrentSessionAccessLevel::Private => "Private",
            CurrentSessionAccessLevel::Lan => "LAN",
            CurrentSessionAccessLevel::Contacts => "Contacts",
            CurrentSessionAccessLevel::ContactsPlus => "Contacts+",
            CurrentSessionAccessLevel::RegisteredUsers => "Registered Users",
            CurrentSessionAccessLevel::Anyone => "Anyone",
        }
    }
}

impl TryFrom<u8> for CurrentSessionAccessLevel {
    type Error = UnknownVariant;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Ok(match level {
            0 => CurrentSessionAccessLevel::Private,
            1 => CurrentSessionAccessLevel::Lan,
            2 => CurrentSessionAccessLevel::Contacts,
            3 => CurrentSessionAccessLevel::ContactsPlus,
            4 => CurrentSessionAccessLevel::RegisteredUsers,
            5 => CurrentSessionAccessLevel::Anyone,
            _ => {
                return Err(UnknownVariant {
                    kind: "CurrentSessionAccessLevel",
                    value: level.to_string(),
                })
            }
        })
    }
}

impl From<CurrentSessionAccessLevel> for u8 {
    fn from(level: CurrentSessionAccessLevel) -> Self {
        level as u8
    }
}

impl fmt::Display for CurrentSessionAccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicRsaKey {
    #[serde(rename = "Exponent")]
    pub exponent: String,
    #[serde(rename = "Modulus")]
    pub modulus: String,
}

/// `GET /users/{id}/status/`, also embedded in friend entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatus {
    pub online_status: OnlineStatus,
    #[serde(with = "iso8601")]
    pub last_status_change: DateTime<Utc>,
    #[serde(default)]
    pub current_session_id: Option<String>,
    pub current_session_access_level: CurrentSessionAccessLevel,
    pub current_session_hidden: bool,
    pub current_hosting: bool,
    #[serde(default)]
    pub current_session: Option<Session>,
    #[serde(default)]
    pub active_sessions: Option<Vec<Session>>,
    #[serde(default)]
    pub compatibility_hash: Option<String>,
    #[serde(default)]
    pub neos_version: Option<String>,
    pub is_mobile: bool,
    #[serde(default, rename = "OutputDevice")]
    pub output_device: Option<String>,
    #[serde(default, rename = "publicRSAKey")]
    pub public_rsa_key: Option<PublicRsaKey>,
}

impl UserStatus {
    pub fn is_online(&self) -> bool {
        self.online_status != OnlineStatus::Offline
    }
}
