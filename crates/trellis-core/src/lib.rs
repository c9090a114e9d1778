//! # Trellis Core
//!
//! Foundation types for the Trellis command router.
//!
//! This crate defines the two shapes the router exchanges with the outside
//! world:
//!
//! - [`MessageEvent`]: an inbound message, sender identity plus the mutable
//!   command text.
//! - [`Reply`]: an outbound payload, the concrete reply type most
//!   applications route. The router itself is generic over the reply type,
//!   so anything `Clone + Send + Sync` can stand in for it.
//!
//! Transport is explicitly not modeled here: webhook endpoints, signature
//! verification and platform clients live outside the router and only
//! exchange these types with it.

pub mod event;
pub mod reply;

pub use event::MessageEvent;
pub use reply::Reply;
