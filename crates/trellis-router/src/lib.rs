//! # Trellis Router
//!
//! A hierarchical, pattern-matched command router for chat-bot messages.
//!
//! Incoming text is tokenized on whitespace; each tree level consumes the
//! head token, matching it against child routes in registration order, and
//! recurses into the matched child with the tail. Leaves invoke handlers,
//! restricted nodes gate on the sender identity, and every level can carry
//! a default reply for unmatched or denied input.
//!
//! This layer provides:
//! - [`Router`]: the route tree plus dispatch and help-text generation
//! - [`Route`]: the builder describing one node at registration time
//! - [`Handler`]: the trait async handler functions are lifted into
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_core::{MessageEvent, Reply};
//! use trellis_router::{NodeId, Route, Router};
//!
//! async fn greet(event: MessageEvent) -> Option<Reply> {
//!     Some(Reply::text(format!("Hello, {}!", event.sender_id)))
//! }
//!
//! let mut router = Router::new();
//! router.register(NodeId::ROOT, Route::new("^hello$").handler(greet))?;
//!
//! let mut event = MessageEvent::new("U1234", "hello");
//! assert!(router.process(&mut event).await.is_some());
//! ```

pub mod error;
pub mod handler;
pub mod route;
pub mod router;

pub use error::PatternError;
pub use handler::{BoxFuture, BoxedHandler, Handler, into_handler, noop_handler};
pub use route::Route;
pub use router::{NodeId, Router};
