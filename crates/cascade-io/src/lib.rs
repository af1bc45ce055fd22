//! Cascade IO
//!
//! The collaborator layer between on-disk files and the in-memory
//! [`cascade_network::Network`]: line-oriented parsers for network and event
//! files, the matching serializer, timestep report rendering, and thin
//! filesystem helpers.
//!
//! Two file formats are supported, both plain text with one record per line:
//!
//! - **Network files** describe users and follower relationships: a bare
//!   `name` line adds a user, `follower:followed` records a follow.
//! - **Event files** mutate an existing network: `A:name` adds a user,
//!   `F:follower:followed` adds a follow, and `P:author:content` (optionally
//!   `P:author:content:clickbait`) creates a post.

//-----------------------------------------------------------------------------
// Module Exports
//-----------------------------------------------------------------------------

pub mod error;
pub mod files;
pub mod parse;
pub mod report;

//-----------------------------------------------------------------------------
// Type Re-exports
//-----------------------------------------------------------------------------

pub use error::{IoError, IoResult};
pub use files::{log_file_name, read_lines, write_lines};
pub use parse::{apply_events, load_network, save_network, SkippedEvent};
pub use report::render_timestep_log;
