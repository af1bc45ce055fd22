//! Per-post spread state.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

//-----------------------------------------------------------------------------
// Type Definitions
//-----------------------------------------------------------------------------

/// A post and the state of its spread through the network.
///
/// State machine: a post starts fresh (author seen, frontier seeded with the
/// author's followers), spreads while its frontier remains non-empty, and
/// goes stale the first timestep no new users become eligible. A stale post
/// never mutates again; posts are never deleted, so the network keeps an
/// append-only log for statistics.
///
/// `users_seen` only ever grows, and an ordered set keeps frontier iteration
/// deterministic under a fixed RNG seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    author: String,
    content: String,
    like_count: usize,
    clickbait_factor: f64,
    created_at: u64,
    stale: bool,
    users_liked: BTreeSet<String>,
    users_seen: BTreeSet<String>,
    /// Frontier of users who can still react this timestep. Cleared once the
    /// post goes stale.
    eligible: BTreeSet<String>,
}

impl Post {
    /// A new post with the author pre-seeded as having seen it. The frontier
    /// starts empty; the engine performs the author's initial share.
    pub(crate) fn new(
        author: String,
        content: String,
        clickbait_factor: f64,
        created_at: u64,
    ) -> Self {
        let users_seen = BTreeSet::from([author.clone()]);
        Self {
            author,
            content,
            like_count: 0,
            clickbait_factor,
            created_at,
            stale: false,
            users_liked: BTreeSet::new(),
            users_seen,
            eligible: BTreeSet::new(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn like_count(&self) -> usize {
        self.like_count
    }

    pub fn clickbait_factor(&self) -> f64 {
        self.clickbait_factor
    }

    /// Timestep at which the post was created.
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Whether the post's frontier has emptied out for good.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Users who have liked the post.
    pub fn users_liked(&self) -> &BTreeSet<String> {
        &self.users_liked
    }

    /// Users who have seen the post (monotonically non-decreasing).
    pub fn users_seen(&self) -> &BTreeSet<String> {
        &self.users_seen
    }

    /// Users who may still react in the current timestep.
    pub fn eligible(&self) -> &BTreeSet<String> {
        &self.eligible
    }

    //-------------------------------------------------------------------------
    // Engine-internal mutation
    //-------------------------------------------------------------------------

    /// Records a like by the given user.
    pub(crate) fn register_like(&mut self, user: &str) {
        self.like_count += 1;
        self.users_liked.insert(user.to_owned());
    }

    /// Marks a user as having seen the post. Returns whether they were new.
    pub(crate) fn mark_seen(&mut self, user: &str) -> bool {
        self.users_seen.insert(user.to_owned())
    }

    /// Takes the current frontier, leaving it empty.
    pub(crate) fn take_frontier(&mut self) -> BTreeSet<String> {
        std::mem::take(&mut self.eligible)
    }

    /// Installs the frontier for the next timestep.
    pub(crate) fn set_frontier(&mut self, frontier: BTreeSet<String>) {
        self.eligible = frontier;
    }

    /// Transitions the post to its terminal stale state.
    pub(crate) fn mark_stale(&mut self) {
        self.stale = true;
        self.eligible.clear();
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' by {} (likes: {}, seen by: {}, clickbait: {}{})",
            self.content,
            self.author,
            self.like_count,
            self.users_seen.len(),
            self.clickbait_factor,
            if self.stale { ", stale" } else { "" }
        )
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_pre_seeded_as_seen() {
        let post = Post::new("alice".into(), "hello".into(), 1.0, 0);
        assert!(post.users_seen().contains("alice"));
        assert!(post.users_liked().is_empty());
        assert!(!post.is_stale());
    }

    #[test]
    fn test_mark_seen_is_idempotent() {
        let mut post = Post::new("alice".into(), "hello".into(), 1.0, 0);
        assert!(post.mark_seen("bob"));
        assert!(!post.mark_seen("bob"));
        assert_eq!(post.users_seen().len(), 2);
    }

    #[test]
    fn test_stale_clears_frontier() {
        let mut post = Post::new("alice".into(), "hello".into(), 1.0, 0);
        post.set_frontier(BTreeSet::from(["bob".to_owned()]));
        post.mark_stale();
        assert!(post.is_stale());
        assert!(post.eligible().is_empty());
    }

    #[test]
    fn test_summary_string() {
        let mut post = Post::new("alice".into(), "hello".into(), 2.0, 1);
        post.register_like("bob");
        post.mark_seen("bob");
        assert_eq!(
            post.to_string(),
            "'hello' by alice (likes: 1, seen by: 2, clickbait: 2)"
        );
    }
}
