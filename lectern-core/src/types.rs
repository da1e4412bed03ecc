use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{LecternError, LecternResult};

/// The kind of slot a talk occupies in the schedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TalkType {
    /// Regular conference session
    #[default]
    Conference,
    /// Opening or closing keynote slot
    Keynote,
}

impl TalkType {
    /// Get human-readable kind name
    pub fn as_str(&self) -> &'static str {
        match self {
            TalkType::Conference => "conference",
            TalkType::Keynote => "keynote",
        }
    }
}

impl std::fmt::Display for TalkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scheduled presentation
///
/// A `Talk` is a plain value: equality is structural and no mutation API is
/// exposed once it has been constructed. Empty strings and dates in the past
/// are accepted as-is; this type does not validate its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talk {
    topic: String,
    speaker: String,
    time: NaiveDateTime,
    kind: TalkType,
}

impl Talk {
    /// Create a regular conference talk
    pub fn new(topic: impl Into<String>, speaker: impl Into<String>, time: NaiveDateTime) -> Self {
        Self::with_kind(topic, speaker, time, TalkType::default())
    }

    /// Create a talk with an explicit kind
    pub fn with_kind(
        topic: impl Into<String>,
        speaker: impl Into<String>,
        time: NaiveDateTime,
        kind: TalkType,
    ) -> Self {
        Self {
            topic: topic.into(),
            speaker: speaker.into(),
            time,
            kind,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    pub fn kind(&self) -> TalkType {
        self.kind
    }
}

impl std::fmt::Display for Talk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} {} by {}",
            self.kind, self.time, self.topic, self.speaker
        )
    }
}

/// Parse an ISO-8601 local date-time such as `2022-01-05T12:00`
///
/// Seconds and fractional seconds are optional; timezone offsets are not
/// accepted (the schedule models wall-clock time only).
pub fn parse_talk_time(input: &str) -> LecternResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .map_err(|source| LecternError::InvalidTime {
            input: input.to_string(),
            source,
        })
}
