//! # Loadable Screen State
//!
//! The four-phase primitive every data-bound screen region cycles through.
//! Failure carries the display message only; the typed
//! [`Failure`](vitrina_core::Failure) is consumed at the call site that
//! produced it.

use serde::Serialize;

/// Lifecycle of an async-loaded screen region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "value")]
pub enum Loadable<T> {
    /// Nothing requested yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// Loaded successfully.
    Ready(T),
    /// The request failed; the string is the display message.
    Failed(String),
}

impl<T> Loadable<T> {
    /// Returns true while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    /// Returns the loaded value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_accessors() {
        let idle: Loadable<i32> = Loadable::Idle;
        assert!(!idle.is_loading());
        assert!(idle.ready().is_none());
        assert!(idle.error().is_none());

        assert!(Loadable::<i32>::Loading.is_loading());
        assert_eq!(Loadable::Ready(7).ready(), Some(&7));
        assert_eq!(
            Loadable::<i32>::Failed("boom".into()).error(),
            Some("boom")
        );
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_value(Loadable::Ready(vec![1, 2])).unwrap();
        assert_eq!(json["state"], "ready");
        assert_eq!(json["value"][0], 1);
    }
}
