//! Users sub-client: profile, status, search.

use crate::client::NeosClient;
use crate::domain::user::{User, UserStatus};
use crate::error::SdkError;

/// Sub-client for user operations.
pub struct Users<'a> {
    pub(crate) client: &'a NeosClient,
}

impl<'a> Users<'a> {
    /// A user profile. `None` means the logged-in user.
    pub async fn get(&self, user_id: Option<&str>) -> Result<User, SdkError> {
        let user_id = self.resolve(user_id).await?;
        self.client
            .http
            .get(&format!("/users/{}", urlencoding::encode(&user_id)))
            .await
    }

    /// Online status and session presence. `None` means the logged-in user.
    pub async fn status(&self, user_id: Option<&str>) -> Result<UserStatus, SdkError> {
        let user_id = self.resolve(user_id).await?;
        self.client
            .http
            .get(&format!("/users/{}/status/", urlencoding::encode(&user_id)))
            .await
    }

    /// Users whose name contains `name`.
    pub async fn search(&self, name: &str) -> Result<Vec<User>, SdkError> {
        self.client
            .http
            .get_with_query("/users", &[("name", name.to_string())])
            .await
    }

    async fn resolve(&self, user_id: Option<&str>) -> Result<String, SdkError> {
        match user_id {
            Some(id) => Ok(id.to_string()),
            None => self.client.require_user_id().await,
        }
    }
}
