//! Error types used across the crate.

use thiserror::Error;

/// Convenience alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported at the crate's API boundary.
///
/// Precondition checks fail fast with one of these kinds; internal invariants
/// (run totals, canonical form) are `debug_assert!`ed instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input dimensions exceed the curve's bounding box.
    #[error("bounds {requested:?} exceed the curve's dimensionality {available:?}")]
    OutOfDomain {
        /// The per-axis lengths the caller asked for.
        requested: Vec<u32>,
        /// The per-axis lengths the curve actually covers.
        available: Vec<u32>,
    },

    /// Empty input where a non-empty one is required, a degenerate span, or a
    /// malformed encoding.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A computed quantity does not fit the supported integer width.
    #[error("{what} ({value}) overflows the supported width")]
    Overflow {
        /// What was being computed.
        what: &'static str,
        /// The offending value.
        value: u64,
    },

    /// Coordinates whose rank differs from the curve's dimensionality.
    #[error("rank {got} does not match the curve's rank {expected}")]
    StrategyMismatch {
        /// Rank of the supplied coordinates or bounds.
        got: usize,
        /// Rank of the curve.
        expected: usize,
    },
}

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`] with a formatted message.
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
