//! The network model and timestep propagation engine.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use std::collections::{BTreeMap, BTreeSet};

use cascade_graph::DirectedGraph;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::{NetworkError, NetworkResult};
use crate::post::Post;
use crate::randomness::SeededRng;
use crate::user::UserInfo;

//-----------------------------------------------------------------------------
// Type Definitions
//-----------------------------------------------------------------------------

/// A social network of user accounts plus the posts spreading through it.
///
/// Follower relationships are held as graph edges directed followed ->
/// follower, so a user's adjacency set is exactly the set of their
/// followers and post propagation walks edges forward.
#[derive(Debug, Clone)]
pub struct Network {
    graph: DirectedGraph<UserInfo>,
    /// Append-only post log; posts are never deleted.
    posts: Vec<Post>,
    like_chance: f64,
    follow_chance: f64,
    timestep: u64,
    rng: SeededRng,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

//-----------------------------------------------------------------------------
// Construction
//-----------------------------------------------------------------------------

impl Network {
    /// Creates an empty network with an entropy-drawn (but recorded) seed.
    pub fn new() -> Self {
        Self::with_rng(SeededRng::from_entropy())
    }

    /// Creates an empty network whose simulation is reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SeededRng::new(seed))
    }

    /// Creates a network from a validated configuration.
    pub fn from_config(config: &SimulationConfig) -> NetworkResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => SeededRng::new(seed),
            None => SeededRng::from_entropy(),
        };
        let mut network = Self::with_rng(rng);
        network.like_chance = config.like_chance;
        network.follow_chance = config.follow_chance;
        Ok(network)
    }

    fn with_rng(rng: SeededRng) -> Self {
        let defaults = SimulationConfig::default();
        Self {
            graph: DirectedGraph::new(),
            posts: Vec::new(),
            like_chance: defaults.like_chance,
            follow_chance: defaults.follow_chance,
            timestep: 0,
            rng,
        }
    }

    /// Seed of the RNG driving this network's probabilistic decisions.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

//-----------------------------------------------------------------------------
// Users and Followers
//-----------------------------------------------------------------------------

impl Network {
    fn validate_name(name: &str) -> NetworkResult<()> {
        if name.is_empty() || name.contains(':') {
            return Err(NetworkError::InvalidName(name.to_owned()));
        }
        Ok(())
    }

    /// Adds a user account. Fails with [`NetworkError::InvalidName`] for an
    /// empty or colon-containing name, [`NetworkError::DuplicateUser`] if
    /// the name is taken.
    pub fn add_user(&mut self, name: &str) -> NetworkResult<()> {
        Self::validate_name(name)?;
        self.graph
            .add_vertex(name, UserInfo::joined_at(self.timestep))
            .map_err(|_| NetworkError::DuplicateUser(name.to_owned()))?;
        debug!(user = name, timestep = self.timestep, "user added");
        Ok(())
    }

    /// Removes a user, all their incident follower relationships, and
    /// recomputes every surviving user's follower/following counters from
    /// the edge set so the counters stay consistent.
    ///
    /// Posts authored by or already seen by the removed user are untouched;
    /// if the user sits in a post's frontier they are skipped at the next
    /// timestep.
    pub fn remove_user(&mut self, name: &str) -> NetworkResult<()> {
        self.graph
            .remove_vertex(name)
            .map_err(|_| NetworkError::UserNotFound(name.to_owned()))?;
        self.recount_follow_counters()?;
        debug!(user = name, "user removed");
        Ok(())
    }

    fn recount_follow_counters(&mut self) -> NetworkResult<()> {
        let labels: Vec<String> = self.graph.labels().map(str::to_owned).collect();
        let mut followers: BTreeMap<String, usize> = BTreeMap::new();
        let mut following: BTreeMap<String, usize> = BTreeMap::new();
        for label in &labels {
            let adjacent = self.graph.adjacent(label)?;
            followers.insert(label.clone(), adjacent.len());
            for target in adjacent {
                *following.entry(target.to_owned()).or_insert(0) += 1;
            }
        }
        for label in &labels {
            let info = self.graph.value_mut(label)?;
            info.follower_count = followers.get(label).copied().unwrap_or(0);
            info.following_count = following.get(label).copied().unwrap_or(0);
        }
        Ok(())
    }

    /// Records that `follower` follows `followed`, stored as the edge
    /// followed -> follower. Fails if either user is absent, the
    /// relationship already exists, or `follower == followed`; counters are
    /// only updated on success.
    pub fn add_follower(&mut self, follower: &str, followed: &str) -> NetworkResult<()> {
        if follower == followed {
            return Err(NetworkError::SelfFollow(follower.to_owned()));
        }
        if self.has_follower(follower, followed)? {
            return Err(NetworkError::DuplicateFollow {
                follower: follower.to_owned(),
                followed: followed.to_owned(),
            });
        }
        self.graph.add_edge(followed, follower)?;
        self.graph.value_mut(followed)?.follower_count += 1;
        self.graph.value_mut(follower)?.following_count += 1;
        Ok(())
    }

    /// Removes the `follower` follows `followed` relationship and
    /// decrements both counters.
    pub fn remove_follower(&mut self, follower: &str, followed: &str) -> NetworkResult<()> {
        if !self.has_follower(follower, followed)? {
            return Err(NetworkError::FollowNotFound {
                follower: follower.to_owned(),
                followed: followed.to_owned(),
            });
        }
        self.graph.remove_edge(followed, follower)?;
        let followed_info = self.graph.value_mut(followed)?;
        followed_info.follower_count = followed_info.follower_count.saturating_sub(1);
        let follower_info = self.graph.value_mut(follower)?;
        follower_info.following_count = follower_info.following_count.saturating_sub(1);
        Ok(())
    }

    /// Returns whether `follower` follows `followed`. Fails with
    /// [`NetworkError::UserNotFound`] if either user is absent.
    pub fn has_follower(&self, follower: &str, followed: &str) -> NetworkResult<bool> {
        self.graph.has_edge(followed, follower).map_err(|err| {
            match err {
                cascade_graph::GraphError::VertexNotFound(label) => {
                    NetworkError::UserNotFound(label)
                }
                other => NetworkError::Graph(other),
            }
        })
    }

    /// The followers of a user, in ascending name order.
    pub fn followers(&self, name: &str) -> NetworkResult<Vec<String>> {
        let adjacent = self
            .graph
            .adjacent(name)
            .map_err(|_| NetworkError::UserNotFound(name.to_owned()))?;
        Ok(adjacent.into_iter().map(str::to_owned).collect())
    }

    /// The users a user follows, in ascending name order.
    pub fn following(&self, name: &str) -> NetworkResult<Vec<String>> {
        if !self.graph.has_vertex(name) {
            return Err(NetworkError::UserNotFound(name.to_owned()));
        }
        let mut out = Vec::new();
        for other in self.graph.labels() {
            if other != name && self.graph.has_edge(other, name)? {
                out.push(other.to_owned());
            }
        }
        Ok(out)
    }

    /// All user names in ascending order.
    pub fn user_list(&self) -> Vec<String> {
        self.graph.labels().map(str::to_owned).collect()
    }

    /// The counters attached to a user.
    pub fn user_info(&self, name: &str) -> NetworkResult<&UserInfo> {
        self.graph
            .value(name)
            .map_err(|_| NetworkError::UserNotFound(name.to_owned()))
    }

    pub fn user_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// The underlying graph, for display collaborators.
    pub fn graph(&self) -> &DirectedGraph<UserInfo> {
        &self.graph
    }
}

//-----------------------------------------------------------------------------
// Probabilities
//-----------------------------------------------------------------------------

impl Network {
    fn validate_probability(chance: f64) -> NetworkResult<f64> {
        if !(0.0..=1.0).contains(&chance) || chance.is_nan() {
            return Err(NetworkError::InvalidProbability(chance));
        }
        Ok(chance)
    }

    pub fn like_chance(&self) -> f64 {
        self.like_chance
    }

    pub fn follow_chance(&self) -> f64 {
        self.follow_chance
    }

    /// Sets the base like probability. Fails with
    /// [`NetworkError::InvalidProbability`] outside [0, 1].
    pub fn set_like_chance(&mut self, chance: f64) -> NetworkResult<()> {
        self.like_chance = Self::validate_probability(chance)?;
        Ok(())
    }

    /// Sets the follow probability. Fails with
    /// [`NetworkError::InvalidProbability`] outside [0, 1].
    pub fn set_follow_chance(&mut self, chance: f64) -> NetworkResult<()> {
        self.follow_chance = Self::validate_probability(chance)?;
        Ok(())
    }
}

//-----------------------------------------------------------------------------
// Posts and Propagation
//-----------------------------------------------------------------------------

impl Network {
    /// Creates a post by `author` and performs the author's initial share,
    /// seeding the frontier with all direct followers. Fails if the author
    /// is unknown, the content is empty or contains ':', or the clickbait
    /// factor is negative or not finite.
    pub fn make_post(
        &mut self,
        author: &str,
        content: &str,
        clickbait_factor: f64,
    ) -> NetworkResult<()> {
        if !self.graph.has_vertex(author) {
            return Err(NetworkError::UserNotFound(author.to_owned()));
        }
        if content.is_empty() {
            return Err(NetworkError::InvalidContent("content cannot be empty"));
        }
        if content.contains(':') {
            return Err(NetworkError::InvalidContent("content cannot contain ':'"));
        }
        if !clickbait_factor.is_finite() || clickbait_factor < 0.0 {
            return Err(NetworkError::InvalidClickbaitFactor(clickbait_factor));
        }

        let mut post = Post::new(
            author.to_owned(),
            content.to_owned(),
            clickbait_factor,
            self.timestep,
        );
        let mut frontier = BTreeSet::new();
        self.spread(&mut post, author, &mut frontier)?;
        post.set_frontier(frontier);

        self.graph.value_mut(author)?.post_count += 1;
        info!(
            author,
            frontier = post.eligible().len(),
            clickbait = clickbait_factor,
            timestep = self.timestep,
            "post created"
        );
        self.posts.push(post);
        Ok(())
    }

    /// Shares `post` from `from_user`: every follower who has not yet seen
    /// the post is marked seen and added to `out`.
    fn spread(
        &self,
        post: &mut Post,
        from_user: &str,
        out: &mut BTreeSet<String>,
    ) -> NetworkResult<()> {
        for follower in self.graph.adjacent(from_user)? {
            if post.mark_seen(follower) {
                out.insert(follower.to_owned());
            }
        }
        Ok(())
    }

    /// Advances the whole network by one timestep.
    ///
    /// For every non-stale post, the frontier is taken as it stood before
    /// this timestep; each user in it independently samples a Bernoulli
    /// trial with probability `min(like_chance * clickbait_factor, 1.0)`.
    /// On success they like the post, share it onward to their unseen
    /// followers, and independently sample a follow trial against
    /// `follow_chance` (a success follows the post's author unless they
    /// already do, or are the author). Users that spread the post form the
    /// next frontier; if nobody did, the post goes stale.
    ///
    /// Returns the new timestep.
    pub fn time_step(&mut self) -> NetworkResult<u64> {
        self.timestep += 1;
        let follow_chance = self.follow_chance;

        for idx in 0..self.posts.len() {
            if self.posts[idx].is_stale() {
                continue;
            }
            // Move the post out so the graph can be mutated mid-walk; the
            // frontier is fixed before any mutation applies.
            let mut post = std::mem::take(&mut self.posts[idx]);
            let frontier = post.take_frontier();
            let like_probability = (self.like_chance * post.clickbait_factor()).min(1.0);
            let author = post.author().to_owned();
            let mut just_shared: BTreeSet<String> = BTreeSet::new();

            for user in &frontier {
                // Skip users removed from the network since they became
                // eligible.
                if !self.graph.has_vertex(user) {
                    continue;
                }
                if !self.rng.chance(like_probability) {
                    continue;
                }
                post.register_like(user);
                self.spread(&mut post, user, &mut just_shared)?;
                if self.rng.chance(follow_chance)
                    && user != &author
                    && self.graph.has_vertex(&author)
                    && !self.has_follower(user, &author)?
                {
                    self.add_follower(user, &author)?;
                }
            }

            if just_shared.is_empty() {
                post.mark_stale();
                info!(
                    post = idx,
                    author = %author,
                    likes = post.like_count(),
                    timestep = self.timestep,
                    "post went stale"
                );
            } else {
                debug!(
                    post = idx,
                    author = %author,
                    frontier = just_shared.len(),
                    timestep = self.timestep,
                    "post advanced"
                );
                post.set_frontier(just_shared);
            }
            self.posts[idx] = post;
        }
        Ok(self.timestep)
    }

    /// Whether every post has gone stale. Vacuously true with zero posts;
    /// this is the simulation's natural termination predicate.
    pub fn all_posts_stale(&self) -> bool {
        self.posts.iter().all(Post::is_stale)
    }

    /// All posts in creation order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// The post at the given creation index, if any.
    pub fn post(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// The current simulation time, in timesteps.
    pub fn current_time(&self) -> u64 {
        self.timestep
    }
}

//-----------------------------------------------------------------------------
// Derived Views
//-----------------------------------------------------------------------------

impl Network {
    /// Users ordered by descending follower count; ties keep ascending name
    /// (traversal) order.
    pub fn users_by_followers(&self) -> Vec<(String, UserInfo)> {
        let mut users: Vec<(String, UserInfo)> = self
            .graph
            .labels()
            .filter_map(|label| {
                self.graph
                    .value(label)
                    .ok()
                    .map(|info| (label.to_owned(), info.clone()))
            })
            .collect();
        users.sort_by(|a, b| b.1.follower_count.cmp(&a.1.follower_count));
        users
    }

    /// Posts ordered by descending like count; ties keep creation order.
    pub fn posts_by_likes(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
        posts
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn network_with_users(names: &[&str]) -> Network {
        let mut network = Network::with_seed(7);
        for name in names {
            network.add_user(name).unwrap();
        }
        network
    }

    #[test]
    fn test_add_user_validation() {
        let mut network = Network::with_seed(1);
        network.add_user("alice").unwrap();
        assert_eq!(
            network.add_user("alice"),
            Err(NetworkError::DuplicateUser("alice".to_owned()))
        );
        assert_eq!(
            network.add_user("a:b"),
            Err(NetworkError::InvalidName("a:b".to_owned()))
        );
        assert_eq!(
            network.add_user(""),
            Err(NetworkError::InvalidName(String::new()))
        );
        assert_eq!(network.user_count(), 1);
    }

    #[test]
    fn test_follow_updates_counters() {
        let mut network = network_with_users(&["alice", "bob"]);
        network.add_follower("bob", "alice").unwrap();

        assert!(network.has_follower("bob", "alice").unwrap());
        assert!(!network.has_follower("alice", "bob").unwrap());
        assert_eq!(network.user_info("alice").unwrap().follower_count, 1);
        assert_eq!(network.user_info("bob").unwrap().following_count, 1);
        assert_eq!(network.followers("alice").unwrap(), vec!["bob"]);
        assert_eq!(network.following("bob").unwrap(), vec!["alice"]);
    }

    #[test]
    fn test_follow_rejections_leave_no_trace() {
        let mut network = network_with_users(&["alice", "bob"]);
        assert_eq!(
            network.add_follower("alice", "alice"),
            Err(NetworkError::SelfFollow("alice".to_owned()))
        );
        assert_eq!(
            network.add_follower("bob", "nobody"),
            Err(NetworkError::UserNotFound("nobody".to_owned()))
        );
        network.add_follower("bob", "alice").unwrap();
        assert_eq!(
            network.add_follower("bob", "alice"),
            Err(NetworkError::DuplicateFollow {
                follower: "bob".to_owned(),
                followed: "alice".to_owned()
            })
        );
        // Counters unaffected by the rejected calls.
        assert_eq!(network.user_info("alice").unwrap().follower_count, 1);
        assert_eq!(network.user_info("bob").unwrap().following_count, 1);
    }

    #[test]
    fn test_remove_follower() {
        let mut network = network_with_users(&["alice", "bob"]);
        network.add_follower("bob", "alice").unwrap();
        network.remove_follower("bob", "alice").unwrap();
        assert!(!network.has_follower("bob", "alice").unwrap());
        assert_eq!(network.user_info("alice").unwrap().follower_count, 0);
        assert_eq!(
            network.remove_follower("bob", "alice"),
            Err(NetworkError::FollowNotFound {
                follower: "bob".to_owned(),
                followed: "alice".to_owned()
            })
        );
    }

    #[test]
    fn test_remove_user_recounts_counters() {
        let mut network = network_with_users(&["alice", "bob", "carol"]);
        network.add_follower("bob", "alice").unwrap();
        network.add_follower("carol", "alice").unwrap();
        network.add_follower("alice", "bob").unwrap();

        network.remove_user("bob").unwrap();
        assert!(!network.graph().has_vertex("bob"));
        // alice lost the follower bob and the account she followed.
        let alice = network.user_info("alice").unwrap();
        assert_eq!(alice.follower_count, 1);
        assert_eq!(alice.following_count, 0);
        let carol = network.user_info("carol").unwrap();
        assert_eq!(carol.following_count, 1);
    }

    #[test]
    fn test_make_post_validation() {
        let mut network = network_with_users(&["alice"]);
        assert_eq!(
            network.make_post("nobody", "hi", 1.0),
            Err(NetworkError::UserNotFound("nobody".to_owned()))
        );
        assert!(matches!(
            network.make_post("alice", "", 1.0),
            Err(NetworkError::InvalidContent(_))
        ));
        assert!(matches!(
            network.make_post("alice", "a:b", 1.0),
            Err(NetworkError::InvalidContent(_))
        ));
        assert_eq!(
            network.make_post("alice", "hi", -1.0),
            Err(NetworkError::InvalidClickbaitFactor(-1.0))
        );
        assert_eq!(network.post_count(), 0);
        assert_eq!(network.user_info("alice").unwrap().post_count, 0);
    }

    #[test]
    fn test_make_post_seeds_frontier() {
        let mut network = network_with_users(&["alice", "bob", "carol"]);
        network.add_follower("bob", "alice").unwrap();
        network.add_follower("carol", "alice").unwrap();
        network.make_post("alice", "hello world", 1.0).unwrap();

        let post = &network.posts()[0];
        assert_eq!(post.author(), "alice");
        assert!(post.users_seen().contains("alice"));
        assert!(post.users_seen().contains("bob"));
        assert!(post.users_seen().contains("carol"));
        assert_eq!(post.eligible().len(), 2);
        assert_eq!(network.user_info("alice").unwrap().post_count, 1);
        assert!(!network.all_posts_stale());
    }

    #[test]
    fn test_certain_like_no_follow() {
        // Users B and C follow A; with like chance 1.0 and follow chance 0.0
        // both like at timestep 1 and the post immediately goes stale.
        let mut network = network_with_users(&["a", "b", "c"]);
        network.add_follower("b", "a").unwrap();
        network.add_follower("c", "a").unwrap();
        network.set_like_chance(1.0).unwrap();
        network.set_follow_chance(0.0).unwrap();
        network.make_post("a", "hi", 1.0).unwrap();

        assert_eq!(network.time_step().unwrap(), 1);
        let post = &network.posts()[0];
        assert_eq!(post.like_count(), 2);
        assert!(post.is_stale());
        assert!(network.all_posts_stale());
        // Nobody followed the author.
        assert_eq!(network.user_info("a").unwrap().follower_count, 2);
    }

    #[test]
    fn test_certain_follow_adds_edge() {
        // b follows a, c follows b. With certain likes and follows, c likes
        // a's post in timestep 2 and then follows a.
        let mut network = network_with_users(&["a", "b", "c"]);
        network.add_follower("b", "a").unwrap();
        network.add_follower("c", "b").unwrap();
        network.set_like_chance(1.0).unwrap();
        network.set_follow_chance(1.0).unwrap();
        network.make_post("a", "hi", 1.0).unwrap();

        network.time_step().unwrap();
        // b liked and shared to c; b already follows a so no new edge.
        assert!(network.has_follower("b", "a").unwrap());
        network.time_step().unwrap();
        assert!(network.has_follower("c", "a").unwrap());
        assert_eq!(network.posts()[0].like_count(), 2);
    }

    #[test]
    fn test_zero_like_chance_stales_immediately() {
        let mut network = network_with_users(&["a", "b"]);
        network.add_follower("b", "a").unwrap();
        network.set_like_chance(0.0).unwrap();
        network.make_post("a", "hi", 5.0).unwrap();

        network.time_step().unwrap();
        let post = &network.posts()[0];
        assert!(post.is_stale());
        assert_eq!(post.like_count(), 0);
        assert!(post.eligible().is_empty());
    }

    #[test]
    fn test_stale_post_never_mutates() {
        let mut network = network_with_users(&["a", "b"]);
        network.add_follower("b", "a").unwrap();
        network.set_like_chance(1.0).unwrap();
        network.set_follow_chance(0.0).unwrap();
        network.make_post("a", "hi", 1.0).unwrap();

        network.time_step().unwrap();
        let snapshot = network.posts()[0].clone();
        assert!(snapshot.is_stale());
        for _ in 0..5 {
            network.time_step().unwrap();
        }
        assert_eq!(network.posts()[0], snapshot);
    }

    #[test]
    fn test_removed_user_skipped_in_frontier() {
        let mut network = network_with_users(&["a", "b", "c"]);
        network.add_follower("b", "a").unwrap();
        network.add_follower("c", "a").unwrap();
        network.set_like_chance(1.0).unwrap();
        network.set_follow_chance(0.0).unwrap();
        network.make_post("a", "hi", 1.0).unwrap();

        network.remove_user("b").unwrap();
        network.time_step().unwrap();
        let post = &network.posts()[0];
        // Only c could react.
        assert_eq!(post.like_count(), 1);
        assert!(post.users_liked().contains("c"));
        assert!(post.is_stale());
    }

    #[test]
    fn test_probability_setters_validate() {
        let mut network = Network::with_seed(1);
        assert_eq!(
            network.set_like_chance(-0.5),
            Err(NetworkError::InvalidProbability(-0.5))
        );
        assert_eq!(
            network.set_follow_chance(1.01),
            Err(NetworkError::InvalidProbability(1.01))
        );
        network.set_like_chance(1.0).unwrap();
        network.set_follow_chance(0.0).unwrap();
    }

    #[test]
    fn test_all_posts_stale_vacuous() {
        let network = Network::with_seed(1);
        assert!(network.all_posts_stale());
    }

    #[test]
    fn test_rankings() {
        let mut network = network_with_users(&["a", "b", "c"]);
        network.add_follower("a", "c").unwrap();
        network.add_follower("b", "c").unwrap();
        network.add_follower("a", "b").unwrap();

        let ranked = network.users_by_followers();
        let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
        // c has 2 followers, b has 1, a has 0.
        assert_eq!(names, vec!["c", "b", "a"]);

        network.set_like_chance(1.0).unwrap();
        network.set_follow_chance(0.0).unwrap();
        network.make_post("c", "popular", 1.0).unwrap();
        network.make_post("a", "ignored", 1.0).unwrap();
        while !network.all_posts_stale() {
            network.time_step().unwrap();
        }
        let by_likes = network.posts_by_likes();
        assert_eq!(by_likes[0].content(), "popular");
        assert_eq!(by_likes[0].like_count(), 2);
        assert_eq!(by_likes[1].like_count(), 0);
    }

    #[test]
    fn test_deterministic_replay_with_seed() {
        let run = |seed: u64| {
            let mut network = Network::with_seed(seed);
            for name in ["a", "b", "c", "d", "e"] {
                network.add_user(name).unwrap();
            }
            for (follower, followed) in
                [("b", "a"), ("c", "a"), ("d", "b"), ("e", "c"), ("a", "e")]
            {
                network.add_follower(follower, followed).unwrap();
            }
            network.set_like_chance(0.6).unwrap();
            network.set_follow_chance(0.4).unwrap();
            network.make_post("a", "seeded run", 1.2).unwrap();
            while !network.all_posts_stale() {
                network.time_step().unwrap();
            }
            (
                network.posts()[0].like_count(),
                network.posts()[0].users_seen().len(),
                network.current_time(),
                network.user_list(),
            )
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_propagation_terminates() {
        // Dense ring with certain likes: users_seen is bounded by the vertex
        // count, so the post must go stale in finitely many steps.
        let mut network = Network::with_seed(3);
        let names: Vec<String> = (0..10).map(|i| format!("u{i}")).collect();
        for name in &names {
            network.add_user(name).unwrap();
        }
        for i in 0..names.len() {
            let follower = &names[(i + 1) % names.len()];
            network.add_follower(follower, &names[i]).unwrap();
        }
        network.set_like_chance(1.0).unwrap();
        network.set_follow_chance(0.0).unwrap();
        network.make_post("u0", "around the ring", 3.0).unwrap();

        let mut steps = 0;
        while !network.all_posts_stale() {
            network.time_step().unwrap();
            steps += 1;
            assert!(steps <= 11, "propagation failed to terminate");
        }
        assert_eq!(network.posts()[0].users_seen().len(), 10);
    }
}
