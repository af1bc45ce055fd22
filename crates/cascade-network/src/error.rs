//! Error types for the network and propagation engine.

//-----------------------------------------------------------------------------
// Error Types
//-----------------------------------------------------------------------------

use cascade_graph::GraphError;
use thiserror::Error;

/// Errors raised by [`crate::Network`] operations.
///
/// All failures are synchronous and non-retryable, and no partial mutation
/// is observable on a failure path: a rejected `add_follower` performs no
/// counter updates, a rejected `make_post` records nothing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// A user with this name already exists.
    #[error("user '{0}' already exists in network")]
    DuplicateUser(String),

    /// Operation referenced a user that does not exist.
    #[error("user '{0}' does not exist in network")]
    UserNotFound(String),

    /// User name is empty or contains the reserved ':' character.
    #[error("invalid user name '{0}': names must be non-empty and cannot contain ':'")]
    InvalidName(String),

    /// A user cannot follow themselves.
    #[error("user '{0}' cannot follow themselves")]
    SelfFollow(String),

    /// The follower relationship already exists.
    #[error("'{follower}' already follows '{followed}'")]
    DuplicateFollow { follower: String, followed: String },

    /// The follower relationship does not exist.
    #[error("'{follower}' does not follow '{followed}'")]
    FollowNotFound { follower: String, followed: String },

    /// Post content is empty or contains the reserved ':' character.
    #[error("invalid post content: {0}")]
    InvalidContent(&'static str),

    /// Probability outside the [0, 1] range.
    #[error("probability {0} is outside the range [0, 1]")]
    InvalidProbability(f64),

    /// Clickbait factor is negative or not finite.
    #[error("clickbait factor {0} must be finite and >= 0")]
    InvalidClickbaitFactor(f64),

    /// An error passed up from the underlying graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type alias for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;
