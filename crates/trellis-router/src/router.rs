//! The route tree and its dispatch algorithm.
//!
//! A [`Router`] is a tree of pattern-keyed nodes. Dispatch tokenizes the
//! incoming text on whitespace, matches the head token against the current
//! node's children in registration order, and either recurses into the
//! matched child with the remaining tail or invokes the child's bound
//! handler when no tail is left:
//!
//! ```text
//! "weather Osaka tomorrow"
//!  └─ head "weather" ──▶ child matching ^weather$
//!      └─ head "Osaka" ──▶ child matching .+
//!          └─ head "tomorrow" ──▶ handler("tomorrow")
//! ```
//!
//! Nodes live in a flat arena owned by the router and are addressed by
//! [`NodeId`]; parent links are plain indices, so the tree has a single
//! ownership direction. The tree is built once at startup and is read-only
//! afterwards: a shared `Router` can serve any number of concurrent
//! `process` calls without locking.
//!
//! # Fall-through
//!
//! A child that matches the head token but produces no reply (its handler
//! or its whole subtree returned `None`) does not end the search: later
//! siblings are still tried, even ones with the same pattern. The same
//! applies to a restricted child without a default reply when the sender is
//! not authorized. This makes "no reply" double as a continue signal, which
//! overlapping patterns rely on; the tests pin it down.

use std::collections::HashSet;

use regex::Regex;
use tracing::{debug, trace};

use trellis_core::MessageEvent;

use crate::error::PatternError;
use crate::handler::{BoxFuture, BoxedHandler};
use crate::route::Route;

/// Identifies a node within one [`Router`]'s tree.
///
/// Ids are handed out by [`Router::register`] and are only meaningful for
/// the router that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root of every router's tree.
    pub const ROOT: NodeId = NodeId(0);
}

/// One node of the route tree.
struct Node<R> {
    /// Compiled head-token pattern. The root carries none; it is never
    /// matched against.
    pattern: Option<Regex>,
    handler: BoxedHandler<R>,
    /// Children in registration order, which is also match priority.
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    /// Senders allowed to trigger this node; empty means unrestricted.
    authorized: HashSet<String>,
    /// Fallback reply for denied access and for unmatched input below this
    /// node.
    default_reply: Option<R>,
    name: Option<String>,
    description: Option<String>,
}

impl<R> Node<R> {
    /// Matches the head token anchored at the start, unanchored at the end.
    fn matches(&self, head: &str) -> bool {
        match &self.pattern {
            Some(re) => re.find(head).is_some_and(|m| m.start() == 0),
            None => false,
        }
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

/// A hierarchical command router for chat-bot messages.
///
/// `R` is the reply payload type. The router never looks inside it; any
/// `Clone + Send + Sync` value works, [`trellis_core::Reply`] being the
/// usual choice.
///
/// # Example
///
/// ```rust,ignore
/// let mut router = Router::with_default_reply(Reply::text("unknown command"));
///
/// let weather = router.register(
///     NodeId::ROOT,
///     Route::new("^weather$")
///         .describe("weather: forecast for Tokyo")
///         .handler(weather_today),
/// )?;
/// router.register(weather, Route::new(".+").handler(weather_for_place))?;
///
/// let mut event = MessageEvent::new("U1234", "weather Osaka");
/// let reply = router.process(&mut event).await;
/// ```
pub struct Router<R> {
    nodes: Vec<Node<R>>,
}

impl<R> Router<R>
where
    R: Clone + Send + Sync + 'static,
{
    /// Creates an empty router whose root has no default reply.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                pattern: None,
                handler: crate::handler::noop_handler(),
                children: Vec::new(),
                parent: None,
                authorized: HashSet::new(),
                default_reply: None,
                name: Some("root".to_string()),
                description: None,
            }],
        }
    }

    /// Creates an empty router that falls back to `reply` when nothing in
    /// the tree matches.
    pub fn with_default_reply(reply: R) -> Self {
        let mut router = Self::new();
        router.nodes[NodeId::ROOT.0].default_reply = Some(reply);
        router
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Registers `route` as a child of `parent`, returning the new node's id
    /// for chained sub-registration.
    ///
    /// Children are tried in the order they were registered; there is no way
    /// to unregister or reorder them. Fails with [`PatternError`] when the
    /// route's pattern is not a valid regular expression.
    pub fn register(&mut self, parent: NodeId, route: Route<R>) -> Result<NodeId, PatternError> {
        let pattern = Regex::new(&route.pattern).map_err(|source| PatternError {
            pattern: route.pattern.clone(),
            source,
        })?;

        let id = NodeId(self.nodes.len());
        debug!(
            route = route.name.as_deref().unwrap_or("unnamed"),
            pattern = %route.pattern,
            parent = parent.0,
            "registered route"
        );
        self.nodes.push(Node {
            pattern: Some(pattern),
            handler: route.handler,
            children: Vec::new(),
            parent: Some(parent),
            authorized: route.authorized.into_iter().collect(),
            default_reply: route.default_reply,
            name: route.name,
            description: route.description,
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Restricts an already-registered node to the given sender identities
    /// and installs its denied-access fallback, in place.
    ///
    /// The authorized set and the fallback belong together: a node is either
    /// fully open or carries both (a `None` fallback meaning "deny by
    /// producing nothing"). Returns the same id so registration chains keep
    /// flowing. An empty identity set leaves the node open.
    pub fn restrict<I, S>(&mut self, id: NodeId, senders: I, default_reply: Option<R>) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let node = &mut self.nodes[id.0];
        node.authorized.extend(senders.into_iter().map(Into::into));
        node.default_reply = default_reply;
        id
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Routes an event through the tree from the root.
    ///
    /// Returns the first reply produced, the nearest default reply when
    /// nothing matched, or `None` when no reply should be sent at all. The
    /// event's text is consumed token by token as dispatch descends.
    pub async fn process(&self, event: &mut MessageEvent) -> Option<R> {
        debug!(sender = %event.sender_id, text = %event.text, "dispatching message");
        self.dispatch(NodeId::ROOT, event).await
    }

    /// Routes an event through the subtree rooted at `id`.
    ///
    /// Every node is itself a routable sub-tree; this is `process` with an
    /// explicit starting point.
    pub async fn process_at(&self, id: NodeId, event: &mut MessageEvent) -> Option<R> {
        self.dispatch(id, event).await
    }

    /// One level of dispatch: split off the head token, scan children in
    /// registration order, recurse or invoke.
    ///
    /// Boxed for async recursion.
    fn dispatch<'a>(&'a self, id: NodeId, event: &'a mut MessageEvent) -> BoxFuture<'a, Option<R>> {
        Box::pin(async move {
            let mut tokens = event.text.split_whitespace();
            let head = tokens.next().unwrap_or("").to_string();
            let tail = tokens.collect::<Vec<_>>().join(" ");

            let mut result = None;
            for &child_id in &self.nodes[id.0].children {
                let child = &self.nodes[child_id.0];
                if !child.matches(&head) {
                    trace!(route = child.display_name(), head = %head, "no pattern match");
                    continue;
                }

                if !child.authorized.is_empty() && !child.authorized.contains(&event.sender_id) {
                    if child.default_reply.is_some() {
                        debug!(
                            route = child.display_name(),
                            sender = %event.sender_id,
                            "sender not authorized, replying with route default"
                        );
                        result = child.default_reply.clone();
                        break;
                    }
                    debug!(
                        route = child.display_name(),
                        sender = %event.sender_id,
                        "sender not authorized, trying next route"
                    );
                    continue;
                }

                let outcome = if tail.is_empty() {
                    debug!(route = child.display_name(), "invoking handler");
                    child.handler.call(event.clone()).await
                } else {
                    trace!(route = child.display_name(), tail = %tail, "descending into subtree");
                    event.text.clone_from(&tail);
                    self.dispatch(child_id, event).await
                };

                // A reply ends the scan; no reply falls through to the next
                // sibling, matched or not.
                if outcome.is_some() {
                    result = outcome;
                    break;
                }
            }

            if result.is_none() {
                result = self.nodes[id.0].default_reply.clone();
            }
            result
        })
    }

    // ========================================================================
    // Help text
    // ========================================================================

    /// Builds the help text for the subtree rooted at `id`.
    ///
    /// Descriptions are collected depth-first in registration order, one
    /// line per described node. The starting node's own description leads
    /// when it has one; undescribed nodes contribute nothing but their
    /// children are still visited.
    pub fn describe(&self, id: NodeId) -> String {
        let mut lines = Vec::new();
        if let Some(desc) = self.nodes[id.0].description.as_deref()
            && !desc.is_empty()
        {
            lines.push(desc);
        }
        self.collect_descriptions(id, &mut lines);
        lines.join("\n")
    }

    fn collect_descriptions<'a>(&'a self, id: NodeId, lines: &mut Vec<&'a str>) {
        for &child_id in &self.nodes[id.0].children {
            if let Some(desc) = self.nodes[child_id.0].description.as_deref()
                && !desc.is_empty()
            {
                lines.push(desc);
            }
            self.collect_descriptions(child_id, lines);
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the parent of `id`, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Returns the children of `id` in registration order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Returns the total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<R> Default for Router<R>
where
    R: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("node_count", &self.nodes.len())
            .finish()
    }
}
