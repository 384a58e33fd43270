//! # Chat Service
//!
//! Conversation and message reads, plus the confirmed-send write.
//!
//! The optimistic pending entry a screen shows while a send is in flight is
//! not this crate's concern; the `ChatStore` in vitrina-app owns that
//! lifecycle and calls [`ChatService::send`] for the remote leg.

use crate::remote_failure;
use crate::traits::ChatTransport;
use vitrina_core::error::FailureResult;
use vitrina_core::mapper;
use vitrina_core::{Conversation, Message, DEFAULT_PAGE_SIZE};

/// Service for conversations and messages.
#[derive(Debug, Clone)]
pub struct ChatService<T> {
    transport: T,
}

impl<T: ChatTransport> ChatService<T> {
    /// Creates a new ChatService.
    pub fn new(transport: T) -> Self {
        ChatService { transport }
    }

    /// Lists the user's conversations, most recent first.
    pub async fn conversations(&self, user_id: &str) -> FailureResult<Vec<Conversation>> {
        let records = self
            .transport
            .conversations_for_user(user_id, DEFAULT_PAGE_SIZE)
            .await
            .map_err(remote_failure)?;

        Ok(records.iter().map(mapper::map_conversation).collect())
    }

    /// Lists a conversation's messages, oldest first. Wire messages always
    /// map as confirmed.
    pub async fn messages(&self, conversation_id: &str) -> FailureResult<Vec<Message>> {
        let records = self
            .transport
            .messages(conversation_id, DEFAULT_PAGE_SIZE * 5)
            .await
            .map_err(remote_failure)?;

        Ok(records.iter().map(mapper::map_message).collect())
    }

    /// Sends a message and returns the server-confirmed view model.
    pub async fn send(
        &self,
        conversation_id: &str,
        sender_id: &str,
        text: &str,
    ) -> FailureResult<Message> {
        let record = self
            .transport
            .send(conversation_id, sender_id, text)
            .await
            .map_err(remote_failure)?;

        Ok(mapper::map_message(&record))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use vitrina_core::record::{ConversationRecord, MessageRecord, Timestamp};
    use vitrina_core::{Failure, MessageStatus};
    use vitrina_remote::{RemoteError, RemoteResult};

    #[derive(Default)]
    struct FakeTransport {
        messages: Mutex<Vec<MessageRecord>>,
        network_down: bool,
    }

    impl ChatTransport for &FakeTransport {
        async fn conversations_for_user(
            &self,
            user_id: &str,
            _limit: u32,
        ) -> RemoteResult<Vec<ConversationRecord>> {
            Ok(vec![ConversationRecord {
                id: "conv-1".into(),
                participant_ids: vec![user_id.to_string(), "user-2".into()],
                last_message: "see you there".into(),
                last_message_at: Timestamp::from_millis(1_700_000_000_000),
                unread_count: 2,
            }])
        }

        async fn messages(
            &self,
            conversation_id: &str,
            _limit: u32,
        ) -> RemoteResult<Vec<MessageRecord>> {
            Ok(self
                .messages
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.conversation_id == conversation_id)
                .cloned()
                .collect())
        }

        async fn send(
            &self,
            conversation_id: &str,
            sender_id: &str,
            text: &str,
        ) -> RemoteResult<MessageRecord> {
            if self.network_down {
                return Err(RemoteError::Network("connection reset".into()));
            }

            let record = MessageRecord {
                id: format!("srv-{}", self.messages.lock().unwrap().len() + 1),
                conversation_id: conversation_id.to_string(),
                sender_id: sender_id.to_string(),
                text: text.to_string(),
                created_at: Timestamp::from_millis(1_700_000_000_500),
            };
            self.messages.lock().unwrap().push(record.clone());
            Ok(record)
        }
    }

    #[tokio::test]
    async fn test_send_returns_the_confirmed_message() {
        let transport = FakeTransport::default();
        let service = ChatService::new(&transport);

        let message = service.send("conv-1", "user-1", "hello").await.unwrap();
        assert_eq!(message.id, "srv-1");
        assert_eq!(message.status, MessageStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_sent_messages_appear_in_the_history() {
        let transport = FakeTransport::default();
        let service = ChatService::new(&transport);

        service.send("conv-1", "user-1", "hello").await.unwrap();
        service.send("conv-2", "user-1", "elsewhere").await.unwrap();

        let history = service.messages("conv-1").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "hello");
    }

    #[tokio::test]
    async fn test_offline_send_is_a_network_failure() {
        let transport = FakeTransport {
            network_down: true,
            ..Default::default()
        };
        let service = ChatService::new(&transport);

        let err = service.send("conv-1", "user-1", "hello").await.unwrap_err();
        assert!(matches!(err, Failure::Network { .. }));
    }

    #[tokio::test]
    async fn test_conversations_are_mapped() {
        let transport = FakeTransport::default();
        let service = ChatService::new(&transport);

        let conversations = service.conversations("user-1").await.unwrap();
        assert_eq!(conversations[0].id, "conv-1");
        assert_eq!(conversations[0].unread_count, 2);
    }
}
