//! Error types for ordered map operations.

//-----------------------------------------------------------------------------
// Error Types
//-----------------------------------------------------------------------------

use thiserror::Error;

/// Errors raised by [`crate::OrderedMap`] operations.
///
/// All failures are synchronous and non-retryable; the map is left unchanged
/// whenever an operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Insertion attempted with a key that is already present.
    #[error("key '{0}' already in tree")]
    DuplicateKey(String),

    /// Lookup or deletion referenced a key that is not present.
    #[error("key '{0}' not found")]
    KeyNotFound(String),

    /// Structural query (`min`, `max`, `balance`) on an empty map.
    #[error("tree is empty")]
    EmptyTree,

    /// Mutation attempted through a read-only snapshot iterator.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Result type alias for ordered map operations.
pub type MapResult<T> = Result<T, MapError>;
