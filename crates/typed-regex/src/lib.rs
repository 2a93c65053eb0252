//! # `typed-regex` Schema-Shaped Regex Matching
//!
//! `typed-regex` reads a regex pattern and derives, before anything is
//! matched, the named capture groups it will produce, and whether each one is
//! guaranteed to be present in a match.
//!
//! Matches are then reported through that schema, rather than as an untyped
//! map of whatever the engine happened to capture.
//!
//! See:
//! * [`schema`] to derive a [`CaptureSchema`] from pattern text.
//! * [`matching`] for [`TypedRegex`] and its results.
//! * [`flags`] for the supported flag characters.
//! * [`engine`] for the `regex` / `fancy_regex` engine wrappers.
//!
//! ```rust
//! use typed_regex::TypedRegex;
//!
//! let re = TypedRegex::with_flags(
//!     r"((?<firstName>\w+) (?<middleName>\w+)? (?<lastName>\w+))+",
//!     "g",
//! )?;
//!
//! assert_eq!(re.schema().is_optional("middleName"), Some(true));
//! assert_eq!(re.schema().is_optional("lastName"), Some(false));
//!
//! let people = re.capture_all("Joe  Mama,Sir Prysing Lee")?;
//! assert_eq!(people.len(), 2);
//! assert_eq!(people[0].get("middleName"), None);
//! assert_eq!(people[1].get("middleName"), Some("Prysing"));
//! # Ok::<(), typed_regex::TypedRegexError>(())
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

extern crate alloc;

pub mod engine;
pub mod errors;
pub mod flags;
pub mod matching;
pub mod options;
pub mod schema;

#[doc(inline)]
pub use errors::{TRResult, TypedRegexError};
#[doc(inline)]
pub use flags::RegexFlags;
#[doc(inline)]
pub use matching::{MatchOutcome, MatchRecord, NamedCaptures, TypedRegex};
#[doc(inline)]
pub use options::TypedRegexOptions;
#[doc(inline)]
pub use schema::{CaptureSchema, GroupDescriptor, extract_schema};
