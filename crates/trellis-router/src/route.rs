//! Route definitions for registration.
//!
//! A [`Route`] is the builder-style input to
//! [`Router::register`](crate::Router::register): it collects the pattern,
//! the bound handler and the optional metadata for one node before the node
//! is attached to the tree. The pattern is held as text here and compiled
//! when the route is registered.

use crate::handler::{BoxedHandler, Handler, into_handler, noop_handler};

/// A single route definition, ready to be registered.
///
/// # Example
///
/// ```rust,ignore
/// let route = Route::new("^weather$")
///     .name("weather")
///     .describe("weather: forecast for Tokyo")
///     .handler(weather_handler);
/// let weather = router.register(NodeId::ROOT, route)?;
/// ```
pub struct Route<R> {
    pub(crate) pattern: String,
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) default_reply: Option<R>,
    pub(crate) authorized: Vec<String>,
    pub(crate) handler: BoxedHandler<R>,
}

impl<R: Send + 'static> Route<R> {
    /// Creates a route matching `pattern` against the head token.
    ///
    /// The pattern is matched anchored at the start of the token and
    /// unanchored at the end; anchor with `$` for an exact token match.
    /// Until [`handler`](Self::handler) is called the route is bound to a
    /// no-op handler that produces no reply.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            name: None,
            description: None,
            default_reply: None,
            authorized: Vec::new(),
            handler: noop_handler(),
        }
    }

    /// Sets a diagnostic name for the route (shows up in logs only).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the human-readable description used by help-text generation.
    ///
    /// Routes without a description are still routable; they just
    /// contribute no line to the generated help.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the fallback reply.
    ///
    /// It is returned when this node matches but access is denied, and when
    /// dispatch reaches this node and none of its children produce a reply.
    pub fn default_reply(mut self, reply: R) -> Self {
        self.default_reply = Some(reply);
        self
    }

    /// Restricts the route to the given sender identities.
    ///
    /// An empty set leaves the route open to everyone.
    pub fn restrict<I, S>(mut self, senders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authorized.extend(senders.into_iter().map(Into::into));
        self
    }

    /// Binds the handler invoked when dispatch terminates at this route.
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: Handler<R> + 'static,
    {
        self.handler = into_handler(handler);
        self
    }
}

impl<R> std::fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("name", &self.name)
            .field("restricted", &!self.authorized.is_empty())
            .finish()
    }
}
