//! Sessions sub-client.

use crate::client::NeosClient;
use crate::domain::session::Session;
use crate::error::SdkError;

/// Sub-client for world session lookups.
pub struct Sessions<'a> {
    pub(crate) client: &'a NeosClient,
}

impl<'a> Sessions<'a> {
    pub async fn get(&self, session_id: &str) -> Result<Session, SdkError> {
        self.client
            .http
            .get(&format!("/sessions/{}", urlencoding::encode(session_id)))
            .await
    }
}
