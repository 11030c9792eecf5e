//! Friend domain: contact list entries.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::{Profile, UserStatus};
use crate::shared::serde_util::iso8601;
use crate::shared::wire_enum;

wire_enum! {
    pub enum FriendStatus {
        Accepted => "Accepted",
        Ignored => "Ignored",
        Requested => "Requested",
        None => "None",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: String,
    pub friend_username: String,
    pub friend_status: FriendStatus,
    pub is_accepted: bool,
    pub user_status: UserStatus,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(with = "iso8601")]
    pub latest_message_time: DateTime<Utc>,
}
