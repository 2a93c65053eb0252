//! # Regex Engines
//!
//! Patterns are matched by one of two engines: the [`regex`] crate, or the
//! [`fancy_regex`] crate for patterns which need backtracking extensions
//! (look-around, backreferences, possessive quantifiers). We'd prefer to avoid
//! [`fancy_regex`] when possible, falling back on [`regex`] when the pattern
//! permits.
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern which was written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which was written for regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! The [`RegexWrapper`] normalizes either engine's captures into a [`NativeMatch`]
//! of positional byte spans.

mod native_match;
mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use native_match::NativeMatch;
#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
