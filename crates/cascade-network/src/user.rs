//! Per-user account state.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use std::fmt;

use serde::{Deserialize, Serialize};

//-----------------------------------------------------------------------------
// Type Definitions
//-----------------------------------------------------------------------------

/// Counters attached to each user vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Number of accounts following this user.
    pub follower_count: usize,
    /// Number of accounts this user follows.
    pub following_count: usize,
    /// Number of posts this user has authored.
    pub post_count: usize,
    /// Timestep at which the user joined the network.
    pub joined_at: u64,
}

impl UserInfo {
    /// A fresh account joined at the given timestep.
    pub fn joined_at(timestep: u64) -> Self {
        Self {
            joined_at: timestep,
            ..Self::default()
        }
    }
}

impl fmt::Display for UserInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "followers: {}, following: {}, posts: {}, joined at t={}",
            self.follower_count, self.following_count, self.post_count, self.joined_at
        )
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------
