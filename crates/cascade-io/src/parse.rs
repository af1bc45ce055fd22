//! Line-oriented parsers for network and event files, plus the matching
//! serializer.

//-----------------------------------------------------------------------------
// Imports
//-----------------------------------------------------------------------------

use cascade_network::{Network, NetworkResult};
use tracing::{debug, warn};

use crate::error::{IoError, IoResult, MAX_NAME_LEN};

//-----------------------------------------------------------------------------
// Type Definitions
//-----------------------------------------------------------------------------

/// An event line that could not be applied. Event processing is lenient:
/// bad lines are reported and skipped rather than aborting the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEvent {
    /// 1-based line number within the event file.
    pub line: usize,
    /// The offending line, verbatim.
    pub content: String,
    /// Human-readable reason the line was skipped.
    pub reason: String,
}

//-----------------------------------------------------------------------------
// Network Files
//-----------------------------------------------------------------------------

fn validate_name(line: usize, content: &str, name: &str) -> IoResult<()> {
    if name.is_empty() {
        return Err(IoError::MalformedLine {
            line,
            content: content.to_owned(),
            reason: "empty user name",
        });
    }
    if name.len() > MAX_NAME_LEN {
        return Err(IoError::MalformedLine {
            line,
            content: content.to_owned(),
            reason: "user name longer than 30 characters",
        });
    }
    Ok(())
}

fn reject(line: usize) -> impl FnOnce(cascade_network::NetworkError) -> IoError {
    move |source| IoError::RejectedRecord { line, source }
}

/// Populates `network` from network-file lines.
///
/// A bare `name` line adds a user; `follower:followed` records that
/// `follower` follows `followed`. Blank lines are ignored. Parsing is
/// strict: the first malformed or rejected line aborts with its 1-based
/// line number.
pub fn load_network<I, S>(network: &mut Network, lines: I) -> IoResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (idx, raw) in lines.into_iter().enumerate() {
        let line = idx + 1;
        let record = raw.as_ref().trim();
        if record.is_empty() {
            continue;
        }
        let mut parts = record.split(':');
        let first = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => {
                validate_name(line, record, first)?;
                network.add_user(first).map_err(reject(line))?;
            }
            (Some(followed), None) => {
                validate_name(line, record, first)?;
                validate_name(line, record, followed)?;
                network.add_follower(first, followed).map_err(reject(line))?;
            }
            (Some(_), Some(_)) => {
                return Err(IoError::MalformedLine {
                    line,
                    content: record.to_owned(),
                    reason: "expected 'name' or 'follower:followed'",
                });
            }
        }
    }
    debug!(
        users = network.user_count(),
        "network loaded from file lines"
    );
    Ok(())
}

/// Serializes `network` as network-file lines: all user lines first, then
/// one `follower:followed` line per relationship, both in ascending order.
/// The output round-trips through [`load_network`].
pub fn save_network(network: &Network) -> Vec<String> {
    let users = network.user_list();
    let mut lines: Vec<String> = users.clone();
    for followed in &users {
        // Every listed user exists, so followers() cannot fail here.
        if let Ok(followers) = network.followers(followed) {
            for follower in followers {
                lines.push(format!("{follower}:{followed}"));
            }
        }
    }
    lines
}

//-----------------------------------------------------------------------------
// Event Files
//-----------------------------------------------------------------------------

fn apply_event(network: &mut Network, record: &str) -> Result<(), String> {
    let mut parts = record.split(':');
    let code = parts.next().unwrap_or_default();
    match code {
        "A" => match (parts.next(), parts.next()) {
            (Some(name), None) => describe(network.add_user(name)),
            _ => Err("expected 'A:name'".to_owned()),
        },
        "F" => match (parts.next(), parts.next(), parts.next()) {
            (Some(follower), Some(followed), None) => {
                describe(network.add_follower(follower, followed))
            }
            _ => Err("expected 'F:follower:followed'".to_owned()),
        },
        "P" => {
            let author = parts.next();
            let content = parts.next();
            let factor = parts.next();
            match (author, content, factor, parts.next()) {
                (Some(author), Some(content), None, _) => {
                    describe(network.make_post(author, content, 1.0))
                }
                (Some(author), Some(content), Some(factor), None) => {
                    let factor: f64 = factor
                        .parse()
                        .map_err(|_| format!("unparseable clickbait factor '{factor}'"))?;
                    describe(network.make_post(author, content, factor))
                }
                _ => Err("expected 'P:author:content[:clickbait]'".to_owned()),
            }
        }
        other => Err(format!("unknown event code '{other}'")),
    }
}

fn describe(result: NetworkResult<()>) -> Result<(), String> {
    result.map_err(|err| err.to_string())
}

/// Applies event-file lines to `network`.
///
/// Supported records are `A:name`, `F:follower:followed`, and
/// `P:author:content[:clickbait]` (factor defaults to 1.0). Blank lines are
/// ignored. Unlike [`load_network`], this is lenient: a malformed or
/// rejected line is logged, collected into the returned [`SkippedEvent`]
/// list, and skipped, and every remaining line is still applied.
pub fn apply_events<I, S>(network: &mut Network, lines: I) -> Vec<SkippedEvent>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut skipped = Vec::new();
    for (idx, raw) in lines.into_iter().enumerate() {
        let line = idx + 1;
        let record = raw.as_ref().trim();
        if record.is_empty() {
            continue;
        }
        if let Err(reason) = apply_event(network, record) {
            warn!(line, record, %reason, "event skipped");
            skipped.push(SkippedEvent {
                line,
                content: record.to_owned(),
                reason,
            });
        }
    }
    skipped
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_network_basic() {
        let mut network = Network::with_seed(1);
        load_network(&mut network, ["alice", "bob", "", "bob:alice"]).unwrap();
        assert_eq!(network.user_list(), vec!["alice", "bob"]);
        assert!(network.has_follower("bob", "alice").unwrap());
    }

    #[test]
    fn test_load_network_reports_line_numbers() {
        let mut network = Network::with_seed(1);
        let err = load_network(&mut network, ["alice", "a:b:c"]).unwrap_err();
        assert!(
            matches!(err, IoError::MalformedLine { line: 2, .. }),
            "unexpected error: {err}"
        );

        let mut network = Network::with_seed(1);
        let err = load_network(&mut network, ["alice", "alice"]).unwrap_err();
        assert!(matches!(err, IoError::RejectedRecord { line: 2, .. }));
    }

    #[test]
    fn test_load_network_rejects_long_names() {
        let mut network = Network::with_seed(1);
        let long = "x".repeat(31);
        let err = load_network(&mut network, [long.as_str()]).unwrap_err();
        assert!(matches!(err, IoError::MalformedLine { line: 1, .. }));
        // Exactly 30 characters is fine.
        load_network(&mut network, ["y".repeat(30)]).unwrap();
    }

    #[test]
    fn test_load_network_unknown_follow_target() {
        let mut network = Network::with_seed(1);
        let err = load_network(&mut network, ["alice", "alice:ghost"]).unwrap_err();
        assert!(matches!(err, IoError::RejectedRecord { line: 2, .. }));
    }

    #[test]
    fn test_save_network_round_trips() {
        let mut network = Network::with_seed(1);
        for name in ["carol", "alice", "bob"] {
            network.add_user(name).unwrap();
        }
        network.add_follower("bob", "alice").unwrap();
        network.add_follower("carol", "alice").unwrap();
        network.add_follower("alice", "carol").unwrap();

        let lines = save_network(&network);
        assert_eq!(
            lines,
            vec![
                "alice",
                "bob",
                "carol",
                "bob:alice",
                "carol:alice",
                "alice:carol",
            ]
        );

        let mut reloaded = Network::with_seed(1);
        load_network(&mut reloaded, &lines).unwrap();
        assert_eq!(reloaded.user_list(), network.user_list());
        for followed in network.user_list() {
            assert_eq!(
                reloaded.followers(&followed).unwrap(),
                network.followers(&followed).unwrap()
            );
        }
    }

    #[test]
    fn test_apply_events_mixed() {
        let mut network = Network::with_seed(1);
        load_network(&mut network, ["alice", "bob", "bob:alice"]).unwrap();

        let skipped = apply_events(
            &mut network,
            [
                "A:carol",
                "F:carol:alice",
                "P:alice:hello",
                "P:alice:spicy take:2.5",
                "F:alice:alice",
                "X:whatever",
                "P:ghost:boo",
                "P:alice:bad factor:many",
            ],
        );

        assert!(network.has_follower("carol", "alice").unwrap());
        assert_eq!(network.post_count(), 2);
        assert_eq!(network.posts()[1].clickbait_factor(), 2.5);

        let lines: Vec<usize> = skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![5, 6, 7, 8]);
        assert!(skipped[1].reason.contains("unknown event code"));
        assert!(skipped[3].reason.contains("clickbait"));
    }

    #[test]
    fn test_apply_events_post_defaults_factor() {
        let mut network = Network::with_seed(1);
        network.add_user("alice").unwrap();
        let skipped = apply_events(&mut network, ["P:alice:plain"]);
        assert!(skipped.is_empty());
        assert_eq!(network.posts()[0].clickbait_factor(), 1.0);
    }
}
