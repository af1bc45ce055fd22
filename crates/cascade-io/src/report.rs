//! Rendering of per-timestep simulation statistics.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use cascade_network::Network;

//-----------------------------------------------------------------------------
// Report Rendering
//-----------------------------------------------------------------------------

/// Renders the statistics block appended to the simulation log after each
/// timestep: the current time, posts ranked by like count, and users ranked
/// by follower count.
pub fn render_timestep_log(network: &Network) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("=== timestep {} ===", network.current_time()));

    lines.push("posts by likes:".to_owned());
    if network.post_count() == 0 {
        lines.push("  (none)".to_owned());
    }
    for post in network.posts_by_likes() {
        lines.push(format!("  {post}"));
    }

    lines.push("users by followers:".to_owned());
    for (name, info) in network.users_by_followers() {
        lines.push(format!("  {name}: {info}"));
    }
    lines.push(String::new());
    lines
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_block_shape() {
        let mut network = Network::with_seed(1);
        for name in ["alice", "bob"] {
            network.add_user(name).unwrap();
        }
        network.add_follower("bob", "alice").unwrap();
        network.set_like_chance(1.0).unwrap();
        network.set_follow_chance(0.0).unwrap();
        network.make_post("alice", "hello", 1.0).unwrap();
        network.time_step().unwrap();

        let lines = render_timestep_log(&network);
        assert_eq!(lines[0], "=== timestep 1 ===");
        assert_eq!(lines[1], "posts by likes:");
        assert_eq!(
            lines[2],
            "  'hello' by alice (likes: 1, seen by: 2, clickbait: 1, stale)"
        );
        assert_eq!(lines[3], "users by followers:");
        assert_eq!(
            lines[4],
            "  alice: followers: 1, following: 0, posts: 1, joined at t=0"
        );
        assert_eq!(
            lines[5],
            "  bob: followers: 0, following: 1, posts: 0, joined at t=0"
        );
        assert_eq!(lines.last().unwrap(), "");
    }

    #[test]
    fn test_render_empty_network() {
        let network = Network::with_seed(1);
        let lines = render_timestep_log(&network);
        assert_eq!(
            lines,
            vec![
                "=== timestep 0 ===",
                "posts by likes:",
                "  (none)",
                "users by followers:",
                "",
            ]
        );
    }
}
