//! Unbalanced binary search tree mapping unique `String` keys to values.
//!
//! Keys are ordered lexicographically. Each node exclusively owns its two
//! child links; values move in on insert and move back out on delete. The
//! node count is maintained incrementally so `len` is O(1).

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use std::cmp::Ordering;

use crate::error::{MapError, MapResult};
use crate::iter::SnapshotIter;

//-----------------------------------------------------------------------------
// Type Definitions
//-----------------------------------------------------------------------------

type Link<V> = Option<Box<Node<V>>>;

/// A single tree node: unique key, stored value, owned child links.
#[derive(Debug, Clone)]
struct Node<V> {
    key: String,
    value: V,
    left: Link<V>,
    right: Link<V>,
}

impl<V> Node<V> {
    fn leaf(key: String, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced binary search tree keyed by `String`.
///
/// Invariant: for every node, all keys in the left subtree compare less than
/// the node's key, and all keys in the right subtree compare greater.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    root: Link<V>,
    len: usize,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

//-----------------------------------------------------------------------------
// Mutation
//-----------------------------------------------------------------------------

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts a new key/value pair, attaching a fresh leaf at the position
    /// the key's ordering dictates. Fails with [`MapError::DuplicateKey`] if
    /// an equal key is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> MapResult<()> {
        let key = key.into();
        let mut cur = &mut self.root;
        while let Some(node) = cur {
            match key.as_str().cmp(node.key.as_str()) {
                Ordering::Equal => return Err(MapError::DuplicateKey(key)),
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
            }
        }
        *cur = Some(Node::leaf(key, value));
        self.len += 1;
        Ok(())
    }

    /// Deletes the node with the given key and returns its value, relinking
    /// the remaining nodes so the ordering invariant holds. Fails with
    /// [`MapError::KeyNotFound`] if the key is absent.
    ///
    /// A node with two children is replaced by its in-order successor (the
    /// leftmost node of its right subtree), which is first detached from its
    /// original position by relinking its former parent to the successor's
    /// right child. The successor is the smallest key greater than the
    /// deleted one, so ordering is preserved.
    pub fn delete(&mut self, key: &str) -> MapResult<V> {
        // Walk to the link that owns the node with `key`.
        let mut cur = &mut self.root;
        loop {
            let step = match cur.as_deref() {
                None => return Err(MapError::KeyNotFound(key.to_owned())),
                Some(node) => key.cmp(node.key.as_str()),
            };
            if step == Ordering::Equal {
                break;
            }
            let node = cur.as_mut().expect("link checked non-empty");
            cur = if step == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let mut removed = cur.take().expect("link holds the located node");
        *cur = match (removed.left.take(), removed.right.take()) {
            // No children: the parent link simply becomes empty.
            (None, None) => None,
            // One child: splice it into the parent link.
            (Some(child), None) | (None, Some(child)) => Some(child),
            // Two children: promote the in-order successor.
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                let mut succ_link = &mut right;
                while succ_link.as_deref().is_some_and(|n| n.left.is_some()) {
                    succ_link = &mut succ_link.as_mut().expect("link checked non-empty").left;
                }
                let mut successor = succ_link.take().expect("right subtree is non-empty");
                // Detach: the successor's former parent takes over its right
                // child. When the successor *is* the right child, this hands
                // its right subtree back through `right` below.
                *succ_link = successor.right.take();
                successor.left = Some(left);
                successor.right = right;
                Some(successor)
            }
        };
        self.len -= 1;
        Ok(removed.value)
    }
}

//-----------------------------------------------------------------------------
// Lookup
//-----------------------------------------------------------------------------

impl<V> OrderedMap<V> {
    fn locate(&self, key: &str) -> Option<&Node<V>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(node),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
        }
        None
    }

    /// Returns the value stored under `key`, or [`MapError::KeyNotFound`].
    pub fn find(&self, key: &str) -> MapResult<&V> {
        self.locate(key)
            .map(|node| &node.value)
            .ok_or_else(|| MapError::KeyNotFound(key.to_owned()))
    }

    /// Mutable counterpart of [`OrderedMap::find`].
    pub fn find_mut(&mut self, key: &str) -> MapResult<&mut V> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Ok(&mut node.value),
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
            }
        }
        Err(MapError::KeyNotFound(key.to_owned()))
    }

    /// Returns whether the map contains `key`.
    pub fn has(&self, key: &str) -> bool {
        self.locate(key).is_some()
    }

    /// Returns the entry with the smallest key, or [`MapError::EmptyTree`].
    pub fn min(&self) -> MapResult<(&str, &V)> {
        let mut cur = self.root.as_deref().ok_or(MapError::EmptyTree)?;
        while let Some(next) = cur.left.as_deref() {
            cur = next;
        }
        Ok((cur.key.as_str(), &cur.value))
    }

    /// Returns the entry with the largest key, or [`MapError::EmptyTree`].
    pub fn max(&self) -> MapResult<(&str, &V)> {
        let mut cur = self.root.as_deref().ok_or(MapError::EmptyTree)?;
        while let Some(next) = cur.right.as_deref() {
            cur = next;
        }
        Ok((cur.key.as_str(), &cur.value))
    }
}

//-----------------------------------------------------------------------------
// Shape Metrics
//-----------------------------------------------------------------------------

impl<V> OrderedMap<V> {
    /// Number of nodes in the map. Maintained incrementally, O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the map holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: -1 for an empty map, 0 for a single node, else
    /// `1 + max(height(left), height(right))`.
    pub fn height(&self) -> i32 {
        let mut tallest: i32 = -1;
        let mut stack: Vec<(&Node<V>, i32)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0));
        }
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        tallest
    }

    fn subtree_size(link: &Link<V>) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<V>> = Vec::new();
        if let Some(node) = link.as_deref() {
            stack.push(node);
        }
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }
        count
    }

    /// Balance of the tree as a percentage ratio between the sizes of the
    /// root's two subtrees: `min(|L|, |R|) / max(|L|, |R|) * 100`. A map
    /// whose root has no children reports 100.0. Fails with
    /// [`MapError::EmptyTree`] on an empty map.
    pub fn balance(&self) -> MapResult<f64> {
        let root = self.root.as_deref().ok_or(MapError::EmptyTree)?;
        let left = Self::subtree_size(&root.left);
        let right = Self::subtree_size(&root.right);
        if left == 0 && right == 0 {
            return Ok(100.0);
        }
        let (smaller, larger) = if left < right { (left, right) } else { (right, left) };
        Ok(smaller as f64 / larger as f64 * 100.0)
    }
}

//-----------------------------------------------------------------------------
// Traversal
//-----------------------------------------------------------------------------

impl<V> OrderedMap<V> {
    fn inorder_entries(&self) -> Vec<(&str, &V)> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<V>> = Vec::new();
        let mut cur = self.root.as_deref();
        loop {
            while let Some(node) = cur {
                stack.push(node);
                cur = node.left.as_deref();
            }
            match stack.pop() {
                None => break,
                Some(node) => {
                    out.push((node.key.as_str(), &node.value));
                    cur = node.right.as_deref();
                }
            }
        }
        out
    }

    fn preorder_entries(&self) -> Vec<(&str, &V)> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<V>> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            out.push((node.key.as_str(), &node.value));
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
        }
        out
    }

    fn postorder_entries(&self) -> Vec<(&str, &V)> {
        // Reverse of a node-right-left walk.
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&Node<V>> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            out.push((node.key.as_str(), &node.value));
            if let Some(left) = node.left.as_deref() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref() {
                stack.push(right);
            }
        }
        out.reverse();
        out
    }

    /// In-order (ascending key) snapshot iterator. The iterator buffers the
    /// full traversal at creation and does not observe later mutation; create
    /// a new iterator to restart.
    pub fn iter(&self) -> SnapshotIter<'_, V> {
        SnapshotIter::new(self.inorder_entries())
    }

    /// Pre-order (node before children) snapshot iterator.
    pub fn iter_preorder(&self) -> SnapshotIter<'_, V> {
        SnapshotIter::new(self.preorder_entries())
    }

    /// Post-order (children before node) snapshot iterator.
    pub fn iter_postorder(&self) -> SnapshotIter<'_, V> {
        SnapshotIter::new(self.postorder_entries())
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }

    /// Values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Mutable borrows of every stored value, in no particular order.
    pub fn values_mut(&mut self) -> Vec<&mut V> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<&mut Node<V>> = Vec::new();
        if let Some(root) = self.root.as_deref_mut() {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            out.push(&mut node.value);
            if let Some(left) = node.left.as_deref_mut() {
                stack.push(left);
            }
            if let Some(right) = node.right.as_deref_mut() {
                stack.push(right);
            }
        }
        out
    }
}

impl<'a, V> IntoIterator for &'a OrderedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = SnapshotIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------
