//! Polymorphic record decoding.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Record, RecordDecodeError, RecordType};

impl TryFrom<Value> for Record {
    type Error = RecordDecodeError;

    /// Read `recordType`, then decode the whole payload into that variant.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let kind = match value.get("recordType") {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => return Err(RecordDecodeError::UnknownRecordType(other.to_string())),
            None => return Err(RecordDecodeError::MissingRecordType),
        };
        let record_type: RecordType = kind
            .parse()
            .map_err(|_| RecordDecodeError::UnknownRecordType(kind))?;

        let record = match record_type {
            RecordType::Object => Record::Object(serde_json::from_value(value)?),
            RecordType::Link => Record::Link(serde_json::from_value(value)?),
            RecordType::Directory => Record::Directory(serde_json::from_value(value)?),
            RecordType::World => Record::World(serde_json::from_value(value)?),
            RecordType::Texture => Record::Texture(serde_json::from_value(value)?),
            RecordType::Audio => Record::Audio(serde_json::from_value(value)?),
        };
        Ok(record)
    }
}

impl Record {
    /// Decode a JSON array of records, failing on the first bad entry.
    pub fn decode_list(value: Value) -> Result<Vec<Record>, RecordDecodeError> {
        let items: Vec<Value> = serde_json::from_value(value)?;
        items.into_iter().map(Record::try_from).collect()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Record::try_from(value).map_err(serde::de::Error::custom)
    }
}
