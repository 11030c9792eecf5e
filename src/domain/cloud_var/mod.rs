//! Cloud variable domain: values and their definitions.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util::iso8601;

/// A stored cloud variable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudVar {
    pub owner_id: String,
    pub path: String,
    /// Serialized value; interpretation depends on the definition's type hint.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub partition_key: Option<String>,
    #[serde(default)]
    pub row_key: Option<String>,
    #[serde(default, with = "iso8601::option")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub e_tag: Option<String>,
}

/// Definition (`vardefs`) of a cloud variable: type and permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudVarDefinition {
    pub definition_owner_id: String,
    pub subpath: String,
    pub type_hint: String,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub variable_owner_can_read: bool,
    #[serde(default)]
    pub variable_owner_can_write: bool,
    #[serde(default)]
    pub anyone_can_read: bool,
    #[serde(default)]
    pub anyone_can_write: bool,
}

/// Body of `PUT /{owner}/{ownerId}/vars/{path}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CloudVarWrite<'a> {
    pub owner_id: &'a str,
    pub path: &'a str,
    pub value: &'a str,
}
