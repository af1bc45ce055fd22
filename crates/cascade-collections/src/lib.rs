//! Cascade Collections
//!
//! Ordered key/value storage used by every layer of the Cascade social graph.
//! The central type is [`OrderedMap`], an unbalanced binary search tree keyed
//! by `String` in lexicographic order. The tree is deliberately *not*
//! self-balancing: depth can degrade to O(n) under adversarial insertion
//! order, which is an accepted property of the structure, not a defect.
//!
//! All descent operations (insert, delete, find, min/max, height) are
//! iterative, so stack usage stays bounded regardless of tree shape.
//! Traversal iterators buffer the full visitation order at creation time and
//! never observe later mutation of the map.

//-----------------------------------------------------------------------------
// Module Exports
//-----------------------------------------------------------------------------

pub mod error;
pub mod iter;
pub mod ordered_map;

//-----------------------------------------------------------------------------
// Type Re-exports
//-----------------------------------------------------------------------------

pub use error::{MapError, MapResult};
pub use iter::SnapshotIter;
pub use ordered_map::OrderedMap;
