//! Record domain: inventory entries, polymorphic by `recordType`.
//!
//! A record payload is decoded in two steps (see `convert.rs`): the
//! `recordType` discriminant is read first, then the whole object is decoded
//! into the shape [`RecordType`] selects. Unknown types are an error.

pub mod client;
mod convert;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SdkError;
use crate::shared::serde_util::iso8601;
use crate::shared::wire_enum;

/// Path separator used by the cloud for record paths.
pub const PATH_SEPARATOR: char = '\\';

wire_enum! {
    /// Record discriminant (`recordType` on the wire).
    pub enum RecordType {
        Object => "object",
        Link => "link",
        Directory => "directory",
        World => "world",
        Texture => "texture",
        Audio => "audio",
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────────

/// Fields shared by every record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordBase {
    pub id: String,
    pub global_version: i64,
    pub local_version: i64,
    #[serde(default)]
    pub last_modifying_user_id: Option<String>,
    pub name: String,
    pub record_type: RecordType,
    #[serde(default)]
    pub path: Option<String>,
    pub is_public: bool,
    pub is_for_patrons: bool,
    pub is_listed: bool,
    pub is_deleted: bool,
    #[serde(with = "iso8601")]
    pub last_modification_time: DateTime<Utc>,
    pub visits: i64,
    pub rating: f64,
    pub owner_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    #[serde(flatten)]
    pub base: RecordBase,
    pub asset_uri: Url,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRecord {
    #[serde(flatten)]
    pub base: RecordBase,
    #[serde(default)]
    pub last_modifying_machine_id: Option<String>,
    pub owner_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, with = "iso8601::option")]
    pub creation_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRecord {
    #[serde(flatten)]
    pub base: RecordBase,
    /// Opaque asset reference, usually `neosdb:///…`.
    pub asset_uri: String,
    pub last_modifying_machine_id: String,
    pub owner_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "iso8601")]
    pub creation_time: DateTime<Utc>,
}

impl DirectoryRecord {
    /// Path of this directory's children: `path` joined with `name` using
    /// backslashes, whatever the host OS.
    pub fn content_path(&self) -> String {
        let name = self.base.name.replace('/', "\\");
        let parent = self
            .base
            .path
            .as_deref()
            .map(|p| p.replace('/', "\\"))
            .unwrap_or_default();
        let parent = parent.trim_end_matches(PATH_SEPARATOR);

        if parent.is_empty() {
            name
        } else {
            format!("{}{}{}", parent, PATH_SEPARATOR, name)
        }
    }
}

impl ObjectRecord {
    /// HTTP URL of the object's asset, when it is a `neosdb` reference.
    pub fn asset_url(&self) -> Option<String> {
        crate::shared::neosdb_to_http(&self.asset_uri)
    }
}

impl LinkRecord {
    /// Owner id and record id of the link target: the last two segments of
    /// the asset URI path.
    pub fn target(&self) -> Result<(String, String), SdkError> {
        let segments: Vec<&str> = self
            .asset_uri
            .path_segments()
            .map(|s| s.filter(|segment| !segment.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [.., owner_id, record_id] => Ok((decode_segment(owner_id), decode_segment(record_id))),
            _ => Err(SdkError::Validation(format!(
                "link asset URI has no owner/record path: {}",
                self.asset_uri
            ))),
        }
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// A decoded record, one variant per [`RecordType`].
///
/// Serializes back to the flat wire shape. Deserialization goes through the
/// discriminant table (see [`Record::try_from`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Object(ObjectRecord),
    Link(LinkRecord),
    Directory(DirectoryRecord),
    World(RecordBase),
    Texture(RecordBase),
    Audio(RecordBase),
}

impl Record {
    pub fn base(&self) -> &RecordBase {
        match self {
            Record::Object(r) => &r.base,
            Record::Link(r) => &r.base,
            Record::Directory(r) => &r.base,
            Record::World(base) | Record::Texture(base) | Record::Audio(base) => base,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Record::Object(_) => RecordType::Object,
            Record::Link(_) => RecordType::Link,
            Record::Directory(_) => RecordType::Directory,
            Record::World(_) => RecordType::World,
            Record::Texture(_) => RecordType::Texture,
            Record::Audio(_) => RecordType::Audio,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn owner_id(&self) -> &str {
        &self.base().owner_id
    }

    pub fn as_directory(&self) -> Option<&DirectoryRecord> {
        match self {
            Record::Directory(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&LinkRecord> {
        match self {
            Record::Link(l) => Some(l),
            _ => None,
        }
    }

    pub fn into_directory(self) -> Option<DirectoryRecord> {
        match self {
            Record::Directory(d) => Some(d),
            _ => None,
        }
    }
}

// ─── Errors ──────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum RecordDecodeError {
    #[error("record has no recordType")]
    MissingRecordType,

    #[error("unknown recordType: {0}")]
    UnknownRecordType(String),

    #[error("malformed record: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<RecordDecodeError> for SdkError {
    fn from(err: RecordDecodeError) -> Self {
        match err {
            RecordDecodeError::UnknownRecordType(kind) => SdkError::UnknownRecordType(kind),
            RecordDecodeError::MissingRecordType => {
                SdkError::Validation("record has no recordType".to_string())
            }
            RecordDecodeError::Malformed(e) => SdkError::Serde(e),
        }
    }
}
