//! Conference schedule model and the staged-builder DSL for assembling one
//!
//! The interesting part is construction, not the data: talks are built
//! through a chain of single-use stage types that fix the field order at
//! compile time, and the two configuration scopes make talk operations
//! unreachable outside a `talks` block.
//!
//! ```
//! use lectern_core::{build_conference, LecternResult};
//!
//! # fn main() -> LecternResult<()> {
//! let conf = build_conference(true, |c| {
//!     c.name("Rust Guild").location("Room 101");
//!     c.talks(|t| {
//!         t.keynote_talk()
//!             .named("Fearless Refactoring")
//!             .by("A. Speaker")
//!             .at("2022-01-05T12:00")?;
//!         t.add_conference_talk("Lifetimes in Anger", "B. Speaker", "2022-01-05T14:00")
//!     })
//! })?;
//! assert_eq!(conf.talks().len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod conference;
pub mod dsl;
pub mod error;
pub mod types;

pub use conference::Conference;
pub use dsl::{build_conference, ConferenceScope, TalkScope};
pub use error::{LecternError, LecternResult};
pub use types::{parse_talk_time, Talk, TalkType};
