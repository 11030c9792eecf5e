//! Records sub-client: inventory, directory listing, link resolution.

use serde_json::Value;

use crate::client::NeosClient;
use crate::domain::record::{DirectoryRecord, LinkRecord, Record};
use crate::error::SdkError;
use crate::shared::owner_path;

/// Root directory of every user's inventory.
pub const INVENTORY_ROOT: &str = "Inventory";

/// Sub-client for record operations.
pub struct Records<'a> {
    pub(crate) client: &'a NeosClient,
}

impl<'a> Records<'a> {
    /// Records at the root of the logged-in user's inventory.
    pub async fn inventory(&self) -> Result<Vec<Record>, SdkError> {
        let user_id = self.client.require_user_id().await?;
        self.list(&user_id, INVENTORY_ROOT).await
    }

    /// Children of a directory record.
    pub async fn directory(&self, directory: &DirectoryRecord) -> Result<Vec<Record>, SdkError> {
        self.list(&directory.base.owner_id, &directory.content_path())
            .await
    }

    /// Records of `owner_id` stored under `path`.
    pub async fn list(&self, owner_id: &str, path: &str) -> Result<Vec<Record>, SdkError> {
        let endpoint = format!(
            "/{}/{}/records",
            owner_path(owner_id)?,
            urlencoding::encode(owner_id)
        );
        let value: Value = self
            .client
            .http
            .get_with_query(&endpoint, &[("path", path.to_string())])
            .await?;
        Ok(Record::decode_list(value)?)
    }

    /// A single record, decoded into its concrete variant.
    pub async fn get(&self, owner_id: &str, record_id: &str) -> Result<Record, SdkError> {
        let endpoint = format!(
            "/{}/{}/records/{}",
            owner_path(owner_id)?,
            urlencoding::encode(owner_id),
            urlencoding::encode(record_id)
        );
        let value: Value = self.client.http.get(&endpoint).await?;
        Ok(Record::try_from(value)?)
    }

    /// The directory a link points at.
    ///
    /// Fails with a validation error when the target is not a directory.
    pub async fn resolve_link(&self, link: &LinkRecord) -> Result<DirectoryRecord, SdkError> {
        let (owner_id, record_id) = link.target()?;
        tracing::debug!(link = %link.base.id, owner_id = %owner_id, record_id = %record_id, "Resolving link");

        let record = self.get(&owner_id, &record_id).await?;
        let kind = record.record_type();
        record.into_directory().ok_or_else(|| {
            SdkError::Validation(format!(
                "link {} points at a {} record, not a directory",
                link.base.id, kind
            ))
        })
    }
}
