//! # Schema-Shaped Matching
//!
//! [`TypedRegex`] pairs a compiled regex with the [`CaptureSchema`](crate::schema::CaptureSchema)
//! of its pattern, and shapes every result by that schema:
//!
//! * [`TypedRegex::is_match`] - does the pattern match at all?
//! * [`TypedRegex::match_one`] - a single [`MatchOutcome`].
//! * [`TypedRegex::match_all`] - every [`MatchRecord`], in order.
//! * [`TypedRegex::captures`] / [`TypedRegex::capture_all`] - just the [`NamedCaptures`].
//!
//! Group values always come from the engine's own named captures; the schema
//! decides which names are present, and non-participating groups are absent.

mod match_outcome;
mod typed_regex;

#[doc(inline)]
pub use match_outcome::*;
#[doc(inline)]
pub use typed_regex::TypedRegex;
