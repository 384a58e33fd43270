//! # Chat State
//!
//! The conversation screen's message list with the optimistic send
//! lifecycle, and the async controller that drives a send end to end.
//!
//! ## Optimistic Send Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Logical Message, Three States                  │
//! │                                                                         │
//! │  begin_send(text)                                                       │
//! │    └─► append Message { id: synthetic uuid, status: Pending }           │
//! │              │                                                          │
//! │              │  remote send ──── Ok(confirmed) ───┐                     │
//! │              │                                    ▼                     │
//! │              │                  confirm_send: replace the pending       │
//! │              │                  entry with the server record in place   │
//! │              │                                                          │
//! │              └── Err ──► fail_send: remove the pending entry and        │
//! │                          record the error - no trace remains            │
//! │                                                                         │
//! │  INVARIANT: at most one list entry per logical message at any instant.  │
//! │  The pending entry and its confirmation never coexist.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use vitrina_core::error::FailureResult;
use vitrina_core::{Message, MessageStatus};
use vitrina_data::traits::ChatTransport;
use vitrina_data::ChatService;

/// One conversation's message list.
#[derive(Debug, Clone, Default)]
pub struct ChatThread {
    messages: Vec<Message>,
    last_error: Option<String>,
}

impl ChatThread {
    /// Replaces the whole list with server history (screen entry).
    pub fn set_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.last_error = None;
    }

    /// Appends the optimistic pending entry for an outgoing message.
    ///
    /// ## Returns
    /// The synthetic id identifying the pending entry until the server
    /// confirms or the send fails.
    pub fn begin_send(&mut self, conversation_id: &str, sender_id: &str, text: &str) -> String {
        let pending_id = format!("pending-{}", Uuid::new_v4());

        self.messages.push(Message {
            id: pending_id.clone(),
            conversation_id: conversation_id.to_string(),
            sender_id: sender_id.to_string(),
            text: text.to_string(),
            sent_at: Utc::now(),
            status: MessageStatus::Pending,
        });
        self.last_error = None;

        pending_id
    }

    /// Replaces the pending entry with the server-confirmed message.
    ///
    /// The swap happens in place so the entry keeps its list position. A
    /// confirmation for an unknown pending id (already failed out) appends
    /// instead of being dropped.
    pub fn confirm_send(&mut self, pending_id: &str, confirmed: Message) {
        match self.messages.iter_mut().find(|m| m.id == pending_id) {
            Some(slot) => *slot = confirmed,
            None => self.messages.push(confirmed),
        }
    }

    /// Removes the pending entry and records the error.
    pub fn fail_send(&mut self, pending_id: &str, message: impl Into<String>) {
        self.messages.retain(|m| m.id != pending_id);
        self.last_error = Some(message.into());
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Shared conversation state.
#[derive(Debug, Clone, Default)]
pub struct ChatStore {
    thread: Arc<Mutex<ChatThread>>,
}

impl ChatStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ChatStore::default()
    }

    /// Executes a function with read access to the thread.
    pub fn with_thread<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ChatThread) -> R,
    {
        let thread = self.thread.lock().expect("Chat thread mutex poisoned");
        f(&thread)
    }

    /// Executes a function with write access to the thread.
    pub fn with_thread_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ChatThread) -> R,
    {
        let mut thread = self.thread.lock().expect("Chat thread mutex poisoned");
        f(&mut thread)
    }
}

/// Drives the full optimistic send sequence for one conversation.
#[derive(Debug, Clone)]
pub struct ChatController<T> {
    conversation_id: String,
    store: ChatStore,
    service: ChatService<T>,
}

impl<T: ChatTransport> ChatController<T> {
    /// Creates a controller for one conversation.
    pub fn new(conversation_id: impl Into<String>, store: ChatStore, service: ChatService<T>) -> Self {
        ChatController {
            conversation_id: conversation_id.into(),
            store,
            service,
        }
    }

    /// Loads the conversation history into the store.
    pub async fn load(&self) -> FailureResult<()> {
        let messages = self.service.messages(&self.conversation_id).await?;
        self.store.with_thread_mut(|t| t.set_messages(messages));
        Ok(())
    }

    /// Sends a message: pending entry first, then the remote write, then
    /// confirmation or rollback.
    pub async fn send(&self, sender_id: &str, text: &str) -> FailureResult<()> {
        let pending_id = self
            .store
            .with_thread_mut(|t| t.begin_send(&self.conversation_id, sender_id, text));

        match self.service.send(&self.conversation_id, sender_id, text).await {
            Ok(confirmed) => {
                debug!(id = %confirmed.id, "Message confirmed");
                self.store
                    .with_thread_mut(|t| t.confirm_send(&pending_id, confirmed));
                Ok(())
            }
            Err(failure) => {
                self.store
                    .with_thread_mut(|t| t.fail_send(&pending_id, failure.message()));
                Err(failure)
            }
        }
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
    use vitrina_remote::{RemoteError, RemoteResult};

    // -------------------------------------------------------------------------
    // Thread reducer
    // -------------------------------------------------------------------------

    fn confirmed(id: &str, text: &str) -> Message {
        Message {
            id: id.to_string(),
            conversation_id: "conv-1".into(),
            sender_id: "user-1".into(),
            text: text.to_string(),
            sent_at: Utc::now(),
            status: MessageStatus::Confirmed,
        }
    }

    #[test]
    fn test_begin_send_appends_exactly_one_pending_entry() {
        let mut thread = ChatThread::default();
        thread.begin_send("conv-1", "user-1", "hello");

        assert_eq!(thread.messages().len(), 1);
        assert_eq!(thread.messages()[0].status, MessageStatus::Pending);
        assert_eq!(thread.messages()[0].text, "hello");
    }

    #[test]
    fn test_confirm_send_replaces_in_place() {
        let mut thread = ChatThread::default();
        thread.set_messages(vec![confirmed("srv-1", "earlier")]);

        let pending_id = thread.begin_send("conv-1", "user-1", "hello");
        thread.confirm_send(&pending_id, confirmed("srv-2", "hello"));

        // Still two entries: the history row plus exactly one for the send
        assert_eq!(thread.messages().len(), 2);
        assert_eq!(thread.messages()[1].id, "srv-2");
        assert_eq!(thread.messages()[1].status, MessageStatus::Confirmed);
        assert!(thread.messages().iter().all(|m| m.id != pending_id));
    }

    #[test]
    fn test_fail_send_leaves_no_trace() {
        let mut thread = ChatThread::default();
        let pending_id = thread.begin_send("conv-1", "user-1", "hello");
        thread.fail_send(&pending_id, "connection reset");

        assert!(thread.messages().is_empty());
        assert_eq!(thread.last_error(), Some("connection reset"));
    }

    #[test]
    fn test_next_begin_send_clears_the_error() {
        let mut thread = ChatThread::default();
        let pending_id = thread.begin_send("conv-1", "user-1", "hello");
        thread.fail_send(&pending_id, "connection reset");

        thread.begin_send("conv-1", "user-1", "hello again");
        assert!(thread.last_error().is_none());
    }

    // -------------------------------------------------------------------------
    // Controller over a fake transport
    // -------------------------------------------------------------------------

    #[derive(Default)]
    struct FakeTransport {
        sent: Mutex<Vec<String>>,
        network_down: bool,
    }

    impl ChatTransport for &FakeTransport {
        async fn conversations_for_user(
            &self,
            _user_id: &str,
            _limit: u32,
        ) -> RemoteResult<Vec<ConversationRecord>> {
            Ok(vec![])
        }

        async fn messages(
            &self,
            conversation_id: &str,
            _limit: u32,
        ) -> RemoteResult<Vec<MessageRecord>> {
            Ok(vec![MessageRecord {
                id: "srv-0".into(),
                conversation_id: conversation_id.to_string(),
                sender_id: "user-2".into(),
                text: "welcome".into(),
                created_at: Timestamp::from_millis(1_700_000_000_000),
            }])
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
            self.sent.lock().unwrap().push(text.to_string());
            Ok(MessageRecord {
                id: "srv-42".into(),
                conversation_id: conversation_id.to_string(),
                sender_id: sender_id.to_string(),
                text: text.to_string(),
                created_at: Timestamp::from_millis(1_700_000_001_000),
            })
        }
    }

    fn make_controller(transport: &FakeTransport) -> (ChatController<&FakeTransport>, ChatStore) {
        let store = ChatStore::new();
        let controller = ChatController::new(
            "conv-1",
            store.clone(),
            ChatService::new(transport),
        );
        (controller, store)
    }

    #[tokio::test]
    async fn test_successful_send_ends_with_one_confirmed_entry() {
        let transport = FakeTransport::default();
        let (controller, store) = make_controller(&transport);

        controller.send("user-1", "hello").await.unwrap();

        store.with_thread(|t| {
            assert_eq!(t.messages().len(), 1);
            assert_eq!(t.messages()[0].id, "srv-42");
            assert_eq!(t.messages()[0].status, MessageStatus::Confirmed);
        });
        assert_eq!(transport.sent.lock().unwrap().as_slice(), ["hello"]);
    }

    #[tokio::test]
    async fn test_failed_send_ends_with_zero_entries() {
        let transport = FakeTransport {
            network_down: true,
            ..Default::default()
        };
        let (controller, store) = make_controller(&transport);

        let err = controller.send("user-1", "hello").await.unwrap_err();
        assert!(err.message().contains("connection reset"));

        store.with_thread(|t| {
            assert!(t.messages().is_empty());
            assert!(t.last_error().unwrap().contains("connection reset"));
        });
    }

    #[tokio::test]
    async fn test_load_populates_history() {
        let transport = FakeTransport::default();
        let (controller, store) = make_controller(&transport);

        controller.load().await.unwrap();
        store.with_thread(|t| {
            assert_eq!(t.messages().len(), 1);
            assert_eq!(t.messages()[0].id, "srv-0");
        });
    }

    #[tokio::test]
    async fn test_sends_are_ordered_after_history() {
        let transport = FakeTransport::default();
        let (controller, store) = make_controller(&transport);

        controller.load().await.unwrap();
        controller.send("user-1", "hello").await.unwrap();

        store.with_thread(|t| {
            assert_eq!(t.messages().len(), 2);
            assert_eq!(t.messages()[0].id, "srv-0");
            assert_eq!(t.messages()[1].id, "srv-42");
        });
    }
}
