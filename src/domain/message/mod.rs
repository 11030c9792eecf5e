//! Message domain: legacy (REST) direct messages.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::serde_util::iso8601;
use crate::shared::wire_enum;

/// Default page size for message queries.
pub const DEFAULT_MAX_ITEMS: u32 = 100;

wire_enum! {
    pub enum MessageType {
        Text => "Text",
        Object => "Object",
        Sound => "Sound",
        SessionInvite => "SessionInvite",
        CreditTransfer => "CreditTransfer",
        SugarCubes => "SugarCubes",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub owner_id: String,
    #[serde(with = "iso8601")]
    pub send_time: DateTime<Utc>,
    pub recipient_id: String,
    pub message_type: MessageType,
    /// Plain text for `Text`, JSON-encoded payload for the other types.
    pub content: String,
}

impl Message {
    /// A new outgoing text message owned by the sender.
    pub fn text(sender_id: &str, recipient_id: &str, content: &str) -> Self {
        Self {
            id: new_message_id(),
            sender_id: sender_id.to_string(),
            owner_id: sender_id.to_string(),
            send_time: Utc::now(),
            recipient_id: recipient_id.to_string(),
            message_type: MessageType::Text,
            content: content.to_string(),
        }
    }
}

/// `MSG-` followed by a random UUID.
pub fn new_message_id() -> String {
    format!("MSG-{}", Uuid::new_v4())
}

/// Paging controls for the legacy message listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageQuery {
    /// Not supported by the legacy endpoint; setting it makes the query fail.
    pub from_time: Option<DateTime<Utc>>,
    pub max_items: u32,
    pub unread_only: bool,
    /// Only messages exchanged with this user.
    pub user: Option<String>,
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self {
            from_time: None,
            max_items: DEFAULT_MAX_ITEMS,
            unread_only: false,
            user: None,
        }
    }
}

impl MessageQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_time(mut self, from_time: DateTime<Utc>) -> Self {
        self.from_time = Some(from_time);
        self
    }

    pub fn max_items(mut self, max_items: u32) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn unread_only(mut self, unread_only: bool) -> Self {
        self.unread_only = unread_only;
        self
    }

    pub fn user(mut self, user_id: impl Into<String>) -> Self {
        self.user = Some(user_id.into());
        self
    }

    /// Query-string parameters for the request.
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("maxItems", self.max_items.to_string()),
            ("unreadOnly", self.unread_only.to_string()),
        ];
        if let Some(user) = &self.user {
            params.push(("user", user.clone()));
        }
        params
    }
}
