//! Friends sub-client.

use crate::client::NeosClient;
use crate::domain::friend::Friend;
use crate::error::SdkError;

/// Sub-client for the logged-in user's contact list.
pub struct Friends<'a> {
    pub(crate) client: &'a NeosClient,
}

impl<'a> Friends<'a> {
    pub async fn list(&self) -> Result<Vec<Friend>, SdkError> {
        let user_id = self.client.require_user_id().await?;
        self.client
            .http
            .get(&format!("/users/{}/friends", urlencoding::encode(&user_id)))
            .await
    }
}
