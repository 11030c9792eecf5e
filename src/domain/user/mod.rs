//! User domain: profiles, credits, patreon data, online status.

pub mod client;
pub mod status;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::iso8601;

pub use status::{CurrentSessionAccessLevel, OnlineStatus, PublicRsaKey, UserStatus};

/// A user account as returned by `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub normalized_username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(with = "iso8601")]
    pub registration_date: DateTime<Utc>,
    pub is_verified: bool,
    #[serde(default)]
    pub quota_bytes: Option<i64>,
    pub is_locked: bool,
    #[serde(default, with = "iso8601::option")]
    pub account_ban_expiration: Option<DateTime<Utc>>,
    #[serde(default, with = "iso8601::option")]
    pub public_ban_expiration: Option<DateTime<Utc>>,
    #[serde(default, with = "iso8601::option")]
    pub spectator_ban_expiration: Option<DateTime<Utc>>,
    #[serde(default, with = "iso8601::option")]
    pub mute_ban_expiration: Option<DateTime<Utc>>,
    #[serde(default)]
    pub used_bytes: Option<i64>,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub credits: Option<Credits>,
    #[serde(default, rename = "NCRdepositAddress")]
    pub ncr_deposit_address: Option<String>,
    #[serde(default)]
    pub patreon_data: Option<PatreonData>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl User {
    /// HTTP URL of the profile icon, when it is a `neosdb` asset.
    pub fn icon_url(&self) -> Option<String> {
        self.profile.as_ref().and_then(Profile::icon_http_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Wire name is `tokenOutOut`.
    #[serde(default, rename = "tokenOutOut")]
    pub token_opt_out: Option<Vec<String>>,
}

impl Profile {
    pub fn icon_http_url(&self) -> Option<String> {
        self.icon_url
            .as_deref()
            .and_then(crate::shared::neosdb_to_http)
    }
}

/// Balances per currency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(rename = "KFC", default)]
    pub kfc: f64,
    #[serde(rename = "NCR", default)]
    pub ncr: f64,
    #[serde(rename = "CDFT", default)]
    pub cdft: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatreonData {
    pub is_patreon_supporter: bool,
    pub patreon_id: Option<String>,
    pub last_patreon_pledge_cents: i64,
    pub last_total_cents: i64,
    pub minimum_total_units: i64,
    pub external_cents: i64,
    pub last_external_cents: i64,
    pub has_supported: bool,
    pub last_is_anorak: bool,
    pub priority_issue: i64,
    #[serde(with = "iso8601")]
    pub last_plus_activation_time: DateTime<Utc>,
    #[serde(with = "iso8601")]
    pub last_activation_time: DateTime<Utc>,
    pub last_plus_pledge_amount: i64,
    pub last_paid_pledge_amount: i64,
    pub account_name: String,
    pub current_account_type: i64,
    pub current_account_cents: i64,
    pub pledged_account_type: i64,
}
