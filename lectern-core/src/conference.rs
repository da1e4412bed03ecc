use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::Talk;

/// A conference and its ordered talk schedule
///
/// The schedule is append-only: talks enter through [`Conference::add_talk`]
/// and readers get a snapshot copy, never a live view, so nothing outside
/// this type can reorder or edit the internal list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conference {
    name: String,
    location: String,
    schedule: Vec<Talk>,
}

impl Conference {
    /// Create an empty conference. This bypasses the DSL entirely.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            schedule: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Append a talk to the end of the schedule
    ///
    /// Always succeeds; duplicates are allowed and insertion order is kept.
    pub fn add_talk(&mut self, talk: Talk) {
        debug!(topic = %talk.topic(), kind = %talk.kind(), "talk scheduled");
        self.schedule.push(talk);
    }

    /// Snapshot of the current schedule
    ///
    /// Returns a copy: mutating the returned vector never touches the
    /// conference, and later `add_talk` calls never change a snapshot that
    /// was taken earlier.
    pub fn talks(&self) -> Vec<Talk> {
        self.schedule.clone()
    }

    /// Number of scheduled talks
    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

impl std::fmt::Display for Conference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} @ {} ({} talks)",
            self.name,
            self.location,
            self.schedule.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{parse_talk_time, TalkType};

    fn talk(topic: &str) -> Talk {
        Talk::new(topic, "S1", parse_talk_time("2022-01-05T12:00").unwrap())
    }

    #[test]
    fn test_add_talk_preserves_insertion_order() {
        let mut conf = Conference::new("Rust Guild", "Room 101");
        conf.add_talk(talk("first"));
        conf.add_talk(talk("second"));
        conf.add_talk(talk("third"));

        let topics: Vec<_> = conf.talks().iter().map(|t| t.topic().to_string()).collect();
        assert_eq!(topics, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut conf = Conference::new("Rust Guild", "Room 101");
        conf.add_talk(talk("same"));
        conf.add_talk(talk("same"));
        assert_eq!(conf.len(), 2);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_appends() {
        let mut conf = Conference::new("Rust Guild", "Room 101");
        conf.add_talk(talk("first"));

        let before = conf.talks();
        conf.add_talk(talk("second"));

        assert_eq!(before.len(), 1);
        assert_eq!(conf.talks().len(), 2);
    }

    #[test]
    fn test_mutating_snapshot_never_affects_conference() {
        let mut conf = Conference::new("Rust Guild", "Room 101");
        conf.add_talk(talk("only"));

        let mut snapshot = conf.talks();
        snapshot.clear();
        snapshot.push(Talk::with_kind(
            "intruder",
            "S2",
            parse_talk_time("2022-01-06T09:00").unwrap(),
            TalkType::Keynote,
        ));

        let talks = conf.talks();
        assert_eq!(talks.len(), 1);
        assert_eq!(talks[0].topic(), "only");
    }
}
