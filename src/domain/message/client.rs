//! Messages sub-client: legacy send and fetch.

use serde_json::Value;

use crate::client::NeosClient;
use crate::domain::message::{Message, MessageQuery};
use crate::error::SdkError;
use crate::http::Method;

/// Sub-client for legacy direct messages.
pub struct Messages<'a> {
    pub(crate) client: &'a NeosClient,
}

impl<'a> Messages<'a> {
    /// Send a text message from the logged-in user.
    pub async fn send_text(&self, recipient_id: &str, content: &str) -> Result<Message, SdkError> {
        let sender_id = self.client.require_user_id().await?;
        let message = Message {
            send_time: self.client.session.now(),
            ..Message::text(&sender_id, recipient_id, content)
        };
        self.send(&message).await?;
        Ok(message)
    }

    /// Post a prepared message to its recipient's inbox.
    pub async fn send(&self, message: &Message) -> Result<(), SdkError> {
        let http = &self.client.http;
        let request = http
            .request(
                Method::Post,
                &format!(
                    "/users/{}/messages",
                    urlencoding::encode(&message.recipient_id)
                ),
            )
            .json(serde_json::to_value(message)?);

        let _: Value = http.send(request).await?;
        tracing::debug!(id = %message.id, recipient = %message.recipient_id, "Message sent");
        Ok(())
    }

    /// Messages of the logged-in user.
    ///
    /// `from_time` is not supported by the legacy endpoint and fails with
    /// [`SdkError::UnsupportedOperation`] before anything is sent.
    pub async fn list(&self, query: &MessageQuery) -> Result<Vec<Message>, SdkError> {
        if query.from_time.is_some() {
            return Err(SdkError::UnsupportedOperation(
                "fromTime is not supported by the legacy message endpoint".to_string(),
            ));
        }
        let user_id = self.client.require_user_id().await?;

        self.client
            .http
            .get_with_query(
                &format!("/users/{}/messages", urlencoding::encode(&user_id)),
                &query.params(),
            )
            .await
    }
}
