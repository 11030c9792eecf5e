//! Cloud variables sub-client.
//!
//! The owner id picks the storage prefix: `U-…` uses `users`, `G-…` uses
//! `groups`, anything else is rejected before a request is made.

use serde_json::Value;

use crate::client::NeosClient;
use crate::domain::cloud_var::{CloudVar, CloudVarDefinition, CloudVarWrite};
use crate::error::SdkError;
use crate::http::Method;
use crate::shared::owner_path;

/// Sub-client for cloud variable operations.
pub struct CloudVars<'a> {
    pub(crate) client: &'a NeosClient,
}

impl<'a> CloudVars<'a> {
    pub async fn list(&self, owner_id: &str) -> Result<Vec<CloudVar>, SdkError> {
        let endpoint = owner_endpoint(owner_id, "vars", None)?;
        self.client.http.get(&endpoint).await
    }

    pub async fn get(&self, owner_id: &str, path: &str) -> Result<CloudVar, SdkError> {
        let endpoint = owner_endpoint(owner_id, "vars", Some(path))?;
        self.client.http.get(&endpoint).await
    }

    pub async fn set(&self, owner_id: &str, path: &str, value: &str) -> Result<(), SdkError> {
        let http = &self.client.http;
        let endpoint = owner_endpoint(owner_id, "vars", Some(path))?;
        let body = CloudVarWrite {
            owner_id,
            path,
            value,
        };
        let request = http
            .request(Method::Put, &endpoint)
            .json(serde_json::to_value(&body)?);

        let _: Value = http.send(request).await?;
        tracing::debug!(owner_id, path, "Cloud variable written");
        Ok(())
    }

    /// Type and permission metadata for a variable path.
    pub async fn definition(&self, owner_id: &str, path: &str) -> Result<CloudVarDefinition, SdkError> {
        let endpoint = owner_endpoint(owner_id, "vardefs", Some(path))?;
        self.client.http.get(&endpoint).await
    }
}

fn owner_endpoint(owner_id: &str, resource: &str, path: Option<&str>) -> Result<String, SdkError> {
    let mut endpoint = format!(
        "/{}/{}/{}",
        owner_path(owner_id)?,
        urlencoding::encode(owner_id),
        resource
    );
    if let Some(path) = path {
        endpoint.push('/');
        endpoint.push_str(&urlencoding::encode(path));
    }
    Ok(endpoint)
}
