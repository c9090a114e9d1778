//! Handler system for the Trellis router.
//!
//! A handler is the function bound to a route node: it receives the
//! [`MessageEvent`] and asynchronously produces an optional reply. `None`
//! means "no reply", which dispatch treats as an invitation to keep trying
//! later sibling routes.
//!
//! Handlers are plain async functions or closures; a blanket implementation
//! lifts them into the [`Handler`] trait so they can be stored type-erased
//! in the route tree:
//!
//! ```rust,ignore
//! use trellis_core::{MessageEvent, Reply};
//!
//! async fn greet(event: MessageEvent) -> Option<Reply> {
//!     Some(Reply::text(format!("Hello, {}!", event.sender_id)))
//! }
//!
//! let route = Route::new("^hello$").handler(greet);
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use trellis_core::MessageEvent;

/// A type alias for a boxed, pinned future that is `Send`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The trait implemented by everything that can be bound to a route.
///
/// `R` is the reply payload type; the router never inspects it beyond
/// checking for presence. Handlers may perform I/O (calling an external
/// service, say); dispatch simply awaits them.
pub trait Handler<R>: Send + Sync {
    /// Invoke the handler with a snapshot of the event.
    fn call(&self, event: MessageEvent) -> BoxFuture<'static, Option<R>>;
}

impl<F, Fut, R> Handler<R> for F
where
    F: Fn(MessageEvent) -> Fut + Send + Sync,
    Fut: Future<Output = Option<R>> + Send + 'static,
{
    fn call(&self, event: MessageEvent) -> BoxFuture<'static, Option<R>> {
        Box::pin((self)(event))
    }
}

/// A type-erased handler that can be stored in the route tree.
pub type BoxedHandler<R> = Arc<dyn Handler<R>>;

/// Convert a handler function into a boxed handler.
pub fn into_handler<R, H>(handler: H) -> BoxedHandler<R>
where
    H: Handler<R> + 'static,
{
    Arc::new(handler)
}

/// The default bound handler: matches, does nothing, replies with nothing.
pub fn noop_handler<R>() -> BoxedHandler<R>
where
    R: Send + 'static,
{
    into_handler(|_event: MessageEvent| std::future::ready(None))
}
