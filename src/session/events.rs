//! Page events and the handler contract.

use std::fmt::Debug;

use crate::dom::{Document, NodeId};

use super::PageContext;

/// A keyboard key, as reported by a key-down event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_string()),
        }
    }
}

/// User input delivered to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Pointer activation of an element.
    Click(NodeId),
    /// Document-level key press; the target is whatever holds focus.
    KeyDown(Key),
    /// Submission of a form element.
    Submit(NodeId),
}

/// A component's subscription to page events.
///
/// Every subscribed handler sees every event and ignores the ones that do not
/// target elements it owns. Handlers run while the document lock is held and
/// must use [`PageContext::schedule`] for deferred work rather than locking
/// the document themselves.
pub trait EventHandler: Debug + Send + Sync {
    fn handle(&self, ctx: &PageContext, doc: &mut Document, event: &PageEvent);
}
