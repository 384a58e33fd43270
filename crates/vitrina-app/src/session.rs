//! # Session State
//!
//! Who is signed in. Read on almost every screen (favorite flags, chat
//! sender id, owner checks), written only at sign-in/sign-out.

use std::sync::{Arc, Mutex};

use serde::Serialize;

/// The current session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Signed-in user id; `None` while browsing anonymously.
    pub user_id: Option<String>,
}

impl Session {
    /// Returns true when a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Shared session state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates an anonymous session state.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Records a sign-in.
    pub fn sign_in(&self, user_id: impl Into<String>) {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        session.user_id = Some(user_id.into());
    }

    /// Clears the session.
    pub fn sign_out(&self) {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        session.user_id = None;
    }

    /// Returns the signed-in user id, if any.
    pub fn user_id(&self) -> Option<String> {
        self.session
            .lock()
            .expect("Session mutex poisoned")
            .user_id
            .clone()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let state = SessionState::new();
        assert!(state.user_id().is_none());

        state.sign_in("user-1");
        assert_eq!(state.user_id().as_deref(), Some("user-1"));
        assert!(state.with_session(|s| s.is_signed_in()));

        state.sign_out();
        assert!(state.user_id().is_none());
    }

    #[test]
    fn test_clones_share_the_session() {
        let state = SessionState::new();
        let other = state.clone();

        state.sign_in("user-1");
        assert_eq!(other.user_id().as_deref(), Some("user-1"));
    }
}
