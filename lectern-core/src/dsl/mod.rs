//! The conference-building DSL
//!
//! Entry point is [`build_conference`], which hands the caller an outer
//! [`ConferenceScope`] for metadata and a nested [`TalkScope`] for talk
//! construction. See the crate root docs for a usage sketch.

pub mod scope;
pub mod staged;

pub use scope::{ConferenceScope, TalkScope};
pub use staged::{EmptyTalk, NamedAndAuthoredTalk, NamedTalk};

use tracing::debug;

use crate::conference::Conference;
use crate::error::LecternResult;

/// Build a conference through the scoped DSL
///
/// Runs `config` synchronously against a fresh [`ConferenceScope`], then
/// materializes the result. Each call gets its own scope and schedule;
/// nothing is shared across invocations.
///
/// `is_important` is recorded on the scope as inert metadata.
///
/// Errors raised inside `config` (bad time strings) propagate out unchanged;
/// finalization itself fails if `name` or `location` was never set.
pub fn build_conference<F>(is_important: bool, config: F) -> LecternResult<Conference>
where
    F: FnOnce(&mut ConferenceScope) -> LecternResult<()>,
{
    debug!(is_important, "building conference from DSL scope");
    let mut scope = ConferenceScope::new(is_important);
    config(&mut scope)?;
    scope.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LecternError;
    use crate::types::{parse_talk_time, Talk, TalkType};

    #[test]
    fn test_all_construction_paths_are_equivalent() {
        let time = parse_talk_time("2022-01-05T12:00").unwrap();
        let expected = Talk::with_kind("K1", "S1", time, TalkType::Keynote);

        let conf = build_conference(true, |c| {
            c.name("Rust Guild").location("Room 101");
            c.talks(|t| {
                t.keynote_talk().named("K1").by("S1").at("2022-01-05T12:00")?;
                t.add_keynote_talk("K1", "S1", "2022-01-05T12:00")?;
                t.add(Talk::with_kind("K1", "S1", time, TalkType::Keynote));
                Ok(())
            })
        })
        .unwrap();

        assert_eq!(conf.talks(), vec![expected.clone(), expected.clone(), expected]);
    }

    #[test]
    fn test_missing_location_fails_finalization() {
        let result = build_conference(false, |c| {
            c.name("Rust Guild");
            Ok(())
        });

        assert!(matches!(
            result,
            Err(LecternError::UninitializedField { field: "location" })
        ));
    }

    #[test]
    fn test_parse_failure_aborts_the_build() {
        let result = build_conference(false, |c| {
            c.name("Rust Guild").location("Room 101");
            c.talks(|t| t.add_conference_talk("T1", "S1", "garbage"))
        });

        assert!(matches!(result, Err(LecternError::InvalidTime { .. })));
    }

    #[test]
    fn test_each_invocation_gets_a_fresh_schedule() {
        let build = || {
            build_conference(false, |c| {
                c.name("Rust Guild").location("Room 101");
                c.talks(|t| t.add_conference_talk("T1", "S1", "2022-01-05T12:00"))
            })
            .unwrap()
        };

        assert_eq!(build().len(), 1);
        assert_eq!(build().len(), 1);
    }

    #[test]
    fn test_outer_scope_exposes_no_talk_operations() {
        // Interface-level guarantee. These would not compile:
        // build_conference(false, |c| c.add_conference_talk("T1", "S1", "2022-01-05T12:00"));
        // build_conference(false, |c| c.keynote_talk().named("K1"));
        let conf = build_conference(false, |c| {
            c.name("Rust Guild").location("Room 101");
            Ok(())
        })
        .unwrap();
        assert!(conf.is_empty());
    }
}
