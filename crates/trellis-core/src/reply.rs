//! Outbound reply payloads.
//!
//! The router is generic over its reply type and treats whatever a handler
//! returns as opaque. [`Reply`] is the concrete payload most applications
//! route: a tagged enum of the message kinds a chat platform can send back,
//! ready for the outer delivery layer to serialize.

use serde::{Deserialize, Serialize};

/// A reply message to send back to the chat platform.
///
/// # Example
///
/// ```rust
/// use trellis_core::Reply;
///
/// let reply = Reply::text("Hello!");
/// assert_eq!(reply, Reply::Text { text: "Hello!".into() });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    /// A plain text message.
    Text {
        /// The message body.
        text: String,
    },

    /// A shared location.
    Location {
        /// Display name of the place.
        title: String,
        /// Street address.
        address: String,
        /// Latitude in degrees.
        latitude: f64,
        /// Longitude in degrees.
        longitude: f64,
    },
}

impl Reply {
    /// Creates a plain text reply.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}
