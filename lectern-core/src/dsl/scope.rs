//! Two-level configuration scopes
//!
//! The outer [`ConferenceScope`] only knows how to set conference metadata
//! and how to enter the inner scope. Talk construction lives exclusively on
//! [`TalkScope`], which exists only for the duration of a `talks` block, so
//! adding a talk from the outer level is a compile error rather than a
//! runtime check.

use tracing::{debug, trace};

use crate::conference::Conference;
use crate::dsl::staged::EmptyTalk;
use crate::error::{LecternError, LecternResult};
use crate::types::{parse_talk_time, Talk, TalkType};

/// Outer scope: conference metadata and entry into the talk scope
pub struct ConferenceScope {
    name: Option<String>,
    location: Option<String>,
    is_important: bool,
    schedule: Vec<Talk>,
}

impl ConferenceScope {
    pub(crate) fn new(is_important: bool) -> Self {
        Self {
            name: None,
            location: None,
            is_important,
            schedule: Vec::new(),
        }
    }

    /// Set the conference name (required before the build completes)
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Set the conference location (required before the build completes)
    pub fn location(&mut self, location: impl Into<String>) -> &mut Self {
        self.location = Some(location.into());
        self
    }

    /// Importance flag recorded at scope creation. Informational only.
    pub fn is_important(&self) -> bool {
        self.is_important
    }

    /// Enter the talk scope
    ///
    /// All talks added inside the block land in this scope's single shared
    /// schedule, in call order.
    pub fn talks<F>(&mut self, config: F) -> LecternResult<()>
    where
        F: FnOnce(&mut TalkScope<'_>) -> LecternResult<()>,
    {
        trace!("entering talk scope");
        let mut scope = TalkScope {
            schedule: &mut self.schedule,
        };
        config(&mut scope)
    }

    /// Materialize the conference from the accumulated state
    ///
    /// Fails with [`LecternError::UninitializedField`] if `name` or
    /// `location` was never assigned.
    pub(crate) fn finish(self) -> LecternResult<Conference> {
        let name = self
            .name
            .ok_or(LecternError::UninitializedField { field: "name" })?;
        let location = self
            .location
            .ok_or(LecternError::UninitializedField { field: "location" })?;

        debug!(
            name = %name,
            location = %location,
            talks = self.schedule.len(),
            "finalizing conference"
        );

        let mut conference = Conference::new(name, location);
        for talk in self.schedule {
            conference.add_talk(talk);
        }
        Ok(conference)
    }
}

/// Inner scope: the only place talks can be constructed and added
///
/// Borrows the outer scope's schedule for the duration of the block; every
/// path below appends to that one shared collection.
pub struct TalkScope<'a> {
    schedule: &'a mut Vec<Talk>,
}

impl TalkScope<'_> {
    /// Start a staged chain for a regular conference talk
    pub fn conference_talk(&mut self) -> EmptyTalk<'_> {
        EmptyTalk::new(self.schedule, TalkType::Conference)
    }

    /// Start a staged chain for a keynote
    pub fn keynote_talk(&mut self) -> EmptyTalk<'_> {
        EmptyTalk::new(self.schedule, TalkType::Keynote)
    }

    /// One-call factory for a regular conference talk
    ///
    /// Parses the time string exactly like the staged chain's terminal step;
    /// on failure nothing is appended.
    pub fn add_conference_talk(
        &mut self,
        topic: impl Into<String>,
        speaker: impl Into<String>,
        time: &str,
    ) -> LecternResult<()> {
        self.add_with_kind(topic, speaker, time, TalkType::Conference)
    }

    /// One-call factory for a keynote
    pub fn add_keynote_talk(
        &mut self,
        topic: impl Into<String>,
        speaker: impl Into<String>,
        time: &str,
    ) -> LecternResult<()> {
        self.add_with_kind(topic, speaker, time, TalkType::Keynote)
    }

    fn add_with_kind(
        &mut self,
        topic: impl Into<String>,
        speaker: impl Into<String>,
        time: &str,
        kind: TalkType,
    ) -> LecternResult<()> {
        let time = parse_talk_time(time)?;
        self.schedule.push(Talk::with_kind(topic, speaker, time, kind));
        Ok(())
    }

    /// Insert an already-constructed talk unchanged. Cannot fail.
    pub fn add(&mut self, talk: Talk) {
        self.schedule.push(talk);
    }

    /// Re-enter the talk scope from within itself
    ///
    /// A no-op wrapper around the same shared schedule; nesting never
    /// creates a second independent collection.
    pub fn talks<F>(&mut self, config: F) -> LecternResult<()>
    where
        F: FnOnce(&mut TalkScope<'_>) -> LecternResult<()>,
    {
        config(self)
    }
}
