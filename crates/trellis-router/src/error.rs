//! Error types for the Trellis router.

use thiserror::Error;

/// An invalid regular expression was supplied to route registration.
///
/// Registration happens during application startup, so this is a fatal
/// configuration error: it is reported before the service begins handling
/// messages and can never surface during dispatch. Denied access and
/// unmatched input are ordinary dispatch outcomes, not errors.
#[derive(Debug, Clone, Error)]
#[error("invalid route pattern '{pattern}': {source}")]
pub struct PatternError {
    /// The pattern that failed to compile.
    pub pattern: String,

    /// The underlying regex error.
    #[source]
    pub source: regex::Error,
}
