//! # Chat Gateway
//!
//! The `conversations` collection and its `messages` subcollections.
//!
//! Sending is a single POST: the backend assigns the message id and
//! timestamp and returns the confirmed record. The optimistic pending entry
//! shown while the POST is in flight lives purely in the view-model layer
//! (vitrina-app) and never touches this gateway.

use tracing::debug;

use crate::client::{DocumentClient, ListQuery, SortDirection};
use crate::error::RemoteResult;
use vitrina_core::record::{ConversationRecord, MessageRecord};

const CONVERSATIONS: &str = "conversations";

fn messages_collection(conversation_id: &str) -> String {
    format!("conversations/{}/messages", conversation_id)
}

/// Body of a send-message request; the backend fills id and created_at.
#[derive(Debug, serde::Serialize)]
struct OutgoingMessage<'a> {
    sender_id: &'a str,
    text: &'a str,
}

/// Gateway for conversations and messages.
#[derive(Debug, Clone)]
pub struct ChatGateway {
    client: DocumentClient,
}

impl ChatGateway {
    /// Creates a new ChatGateway.
    pub fn new(client: DocumentClient) -> Self {
        ChatGateway { client }
    }

    /// Lists the conversations a user participates in, most recent first.
    pub async fn conversations_for_user(
        &self,
        user_id: &str,
        limit: u32,
    ) -> RemoteResult<Vec<ConversationRecord>> {
        let query = ListQuery::new(limit)
            .filter_contains("participant_ids", user_id)
            .order_by("last_message_at", SortDirection::Descending);

        let records: Vec<ConversationRecord> = self.client.list(CONVERSATIONS, &query).await?;
        debug!(user_id = %user_id, count = records.len(), "Fetched conversations");
        Ok(records)
    }

    /// Lists a conversation's messages, oldest first.
    pub async fn messages(
        &self,
        conversation_id: &str,
        limit: u32,
    ) -> RemoteResult<Vec<MessageRecord>> {
        let query = ListQuery::new(limit).order_by("created_at", SortDirection::Ascending);

        self.client
            .list(&messages_collection(conversation_id), &query)
            .await
    }

    /// Sends a message; returns the server-confirmed record with its
    /// assigned id and timestamp.
    pub async fn send(
        &self,
        conversation_id: &str,
        sender_id: &str,
        text: &str,
    ) -> RemoteResult<MessageRecord> {
        debug!(conversation_id = %conversation_id, "Sending message");

        let body = OutgoingMessage { sender_id, text };
        self.client
            .create(&messages_collection(conversation_id), &body)
            .await
    }
}
