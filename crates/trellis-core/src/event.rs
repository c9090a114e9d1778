//! Inbound message events.
//!
//! A [`MessageEvent`] is the router's entire view of an incoming chat
//! message: who sent it and what they typed. The surrounding webhook layer
//! owns transport concerns (signature verification, platform payload
//! parsing) and hands the router a ready-made event.

use serde::{Deserialize, Serialize};

/// An inbound text message from a chat platform.
///
/// The `text` field is rewritten as dispatch descends the route tree: each
/// consumed head token is stripped and the remaining tail written back, so
/// a handler at depth N sees only the arguments addressed to it. Callers
/// that need the original text should keep their own copy.
///
/// # Example
///
/// ```rust
/// use trellis_core::MessageEvent;
///
/// let event = MessageEvent::new("U1234", "weather Tokyo");
/// assert_eq!(event.sender_id, "U1234");
/// assert_eq!(event.text, "weather Tokyo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    /// Opaque identity of the sender, as assigned by the chat platform.
    pub sender_id: String,

    /// The whitespace-delimited command text.
    pub text: String,
}

impl MessageEvent {
    /// Creates a new event from a sender identity and message text.
    pub fn new(sender_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            text: text.into(),
        }
    }
}
