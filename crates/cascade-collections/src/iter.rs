//! Snapshot iterators over ordered maps.
//!
//! Rather than a lazy cursor walking live node links, an iterator eagerly
//! buffers the full traversal order when it is created. The view therefore
//! does not reflect any mutation performed after construction, and a fresh
//! iterator restarts the traversal from the beginning.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use crate::error::{MapError, MapResult};

//-----------------------------------------------------------------------------
// Type Definitions
//-----------------------------------------------------------------------------

/// Read-only iterator over `(key, value)` entries captured at creation time.
#[derive(Debug)]
pub struct SnapshotIter<'a, V> {
    entries: std::vec::IntoIter<(&'a str, &'a V)>,
}

impl<'a, V> SnapshotIter<'a, V> {
    pub(crate) fn new(entries: Vec<(&'a str, &'a V)>) -> Self {
        Self {
            entries: entries.into_iter(),
        }
    }

    /// Removal through the iterator is not supported; the snapshot is
    /// decoupled from the live tree, so this always fails with
    /// [`MapError::UnsupportedOperation`].
    pub fn remove(&mut self) -> MapResult<()> {
        Err(MapError::UnsupportedOperation(
            "cannot remove entries through a snapshot iterator",
        ))
    }
}

impl<'a, V> Iterator for SnapshotIter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<V> ExactSizeIterator for SnapshotIter<'_, V> {}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::OrderedMap;

    #[test]
    fn test_snapshot_is_exact_size() {
        let mut map = OrderedMap::new();
        for key in ["c", "a", "b"] {
            map.insert(key, ()).unwrap();
        }
        let iter = map.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.count(), 3);
    }
}
