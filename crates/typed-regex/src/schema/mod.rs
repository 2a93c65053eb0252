//! # Capture Group Schemas
//!
//! A [`CaptureSchema`] describes the named capture groups a pattern will
//! produce, in the textual order of their opening markers, and whether each
//! one is guaranteed to participate in a successful match.
//!
//! Schemas are derived from the pattern text alone, by [`extract_schema`],
//! without compiling or running the pattern:
//!
//! ```rust
//! use typed_regex::schema::extract_schema;
//!
//! let schema = extract_schema(r"foo(?<name>\w+)?-(?<id>\d+)");
//! assert_eq!(schema.names().collect::<Vec<_>>(), vec!["name", "id"]);
//! assert_eq!(schema.is_optional("name"), Some(true));
//! assert_eq!(schema.is_optional("id"), Some(false));
//! ```
//!
//! Only trailing `?` / `*` quantifiers, on a named group or on an enclosing
//! named or non-capturing group, mark a group optional. Groups in alternation
//! branches are not marked optional.

mod capture_schema;
mod extractor;

#[doc(inline)]
pub use capture_schema::*;
#[doc(inline)]
pub use extractor::extract_schema;
