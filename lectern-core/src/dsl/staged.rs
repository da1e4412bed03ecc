//! Staged talk construction with compile-time ordering
//!
//! Fields of a talk are supplied in a fixed order (kind, topic, speaker,
//! time) by threading the partial data through a chain of single-use stage
//! types. Each stage is constructed only from its predecessor and exposes
//! exactly one next step, so an out-of-order or incomplete chain is a
//! compile error rather than a runtime one.

use crate::error::LecternResult;
use crate::types::{parse_talk_time, Talk, TalkType};

/// Stage 0: the talk kind has been chosen, nothing else is known
///
/// Created by the talk scope's staged entry points; cannot be built directly.
#[must_use = "a staged talk does nothing until the chain reaches `at()`"]
pub struct EmptyTalk<'a> {
    schedule: &'a mut Vec<Talk>,
    kind: TalkType,
}

impl<'a> EmptyTalk<'a> {
    pub(crate) fn new(schedule: &'a mut Vec<Talk>, kind: TalkType) -> Self {
        Self { schedule, kind }
    }

    /// Supply the topic, advancing to stage 1
    pub fn named(self, topic: impl Into<String>) -> NamedTalk<'a> {
        NamedTalk {
            stage: self,
            topic: topic.into(),
        }
    }
}

/// Stage 1: kind and topic are known
#[must_use = "a staged talk does nothing until the chain reaches `at()`"]
pub struct NamedTalk<'a> {
    stage: EmptyTalk<'a>,
    topic: String,
}

impl<'a> NamedTalk<'a> {
    /// Supply the speaker, advancing to stage 2
    pub fn by(self, speaker: impl Into<String>) -> NamedAndAuthoredTalk<'a> {
        NamedAndAuthoredTalk {
            stage: self,
            speaker: speaker.into(),
        }
    }
}

/// Stage 2: everything but the time slot is known
#[must_use = "a staged talk does nothing until the chain reaches `at()`"]
pub struct NamedAndAuthoredTalk<'a> {
    stage: NamedTalk<'a>,
    speaker: String,
}

impl NamedAndAuthoredTalk<'_> {
    /// Terminal step: parse the time, assemble the talk, append it
    ///
    /// On a malformed time string nothing is appended and the error
    /// propagates to the caller. The chain is consumed either way.
    pub fn at(self, time: &str) -> LecternResult<()> {
        let time = parse_talk_time(time)?;
        let NamedAndAuthoredTalk {
            stage: NamedTalk {
                stage: EmptyTalk { schedule, kind },
                topic,
            },
            speaker,
        } = self;
        schedule.push(Talk::with_kind(topic, speaker, time, kind));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_appends_fully_assembled_talk() {
        let mut schedule = Vec::new();

        EmptyTalk::new(&mut schedule, TalkType::Keynote)
            .named("K1")
            .by("S1")
            .at("2022-01-05T12:00")
            .unwrap();

        let expected = Talk::with_kind(
            "K1",
            "S1",
            parse_talk_time("2022-01-05T12:00").unwrap(),
            TalkType::Keynote,
        );
        assert_eq!(schedule, vec![expected]);

        // These would not compile:
        // EmptyTalk::new(&mut schedule, TalkType::Keynote).by("S1");
        // EmptyTalk::new(&mut schedule, TalkType::Keynote).at("2022-01-05T12:00");
    }

    #[test]
    fn test_bad_time_appends_nothing() {
        let mut schedule = Vec::new();

        let result = EmptyTalk::new(&mut schedule, TalkType::Conference)
            .named("K1")
            .by("S1")
            .at("not a timestamp");

        assert!(result.is_err());
        assert!(schedule.is_empty());
    }
}
