//! Error types for file parsing and report rendering.

//-----------------------------------------------------------------------------
// Error Types
//-----------------------------------------------------------------------------

use cascade_graph::GraphError;
use cascade_network::NetworkError;
use thiserror::Error;

/// Maximum length of a user name in a network file.
pub const MAX_NAME_LEN: usize = 30;

/// Errors raised while reading, parsing, or rendering network files.
#[derive(Debug, Error)]
pub enum IoError {
    /// A line did not match the expected record shape. Line numbers are
    /// 1-based.
    #[error("line {line}: malformed record '{content}': {reason}")]
    MalformedLine {
        line: usize,
        content: String,
        reason: &'static str,
    },

    /// A parsed record was rejected by the network. Line numbers are
    /// 1-based.
    #[error("line {line}: {source}")]
    RejectedRecord {
        line: usize,
        #[source]
        source: NetworkError,
    },

    /// A network operation failed outside of any particular line.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// A graph rendering operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Underlying filesystem failure.
    #[error("io failure on '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for IO operations.
pub type IoResult<T> = Result<T, IoError>;
