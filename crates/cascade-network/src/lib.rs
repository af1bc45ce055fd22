//! Cascade Network
//!
//! Social network model layered on [`cascade_graph::DirectedGraph`], plus the
//! timestep engine that simulates the stochastic spread of posts through it.
//!
//! Users are vertices carrying [`UserInfo`] payloads. "Follower follows
//! followed" is stored as a graph edge directed followed -> follower, because
//! posts propagate from the followed account outward to its followers. Each
//! [`Post`] tracks who has seen it, who liked it, and the frontier of users
//! who may still react in the current timestep; a post whose frontier empties
//! out goes stale and never mutates again.
//!
//! Simulations are replayable: all probabilistic decisions draw from a
//! [`SeededRng`] whose seed is recorded at construction.

//-----------------------------------------------------------------------------
// Module Exports
//-----------------------------------------------------------------------------

pub mod config;
pub mod error;
pub mod network;
pub mod post;
pub mod randomness;
pub mod user;

//-----------------------------------------------------------------------------
// Type Re-exports
//-----------------------------------------------------------------------------

pub use config::SimulationConfig;
pub use error::{NetworkError, NetworkResult};
pub use network::Network;
pub use post::Post;
pub use randomness::SeededRng;
pub use user::UserInfo;
