// Re-export commonly used types
pub use lectern_core::{
    conference::Conference,
    dsl::{build_conference, ConferenceScope, TalkScope},
    error::{LecternError, LecternResult},
    types::{parse_talk_time, Talk, TalkType},
};
