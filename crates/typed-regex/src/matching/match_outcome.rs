//! # Match Results
//!
//! Results borrow from the searched text, and are shaped by the
//! [`CaptureSchema`](crate::schema::CaptureSchema) of the pattern.

use core::ops::Range;

use crate::{
    alloc::{sync::Arc, vec::Vec},
    engine::NativeMatch,
};

/// The named groups of a single match.
///
/// Holds exactly the names of the pattern's schema, in schema order.
/// Groups which did not participate in the match are absent (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedCaptures<'h> {
    entries: Vec<(Arc<str>, Option<&'h str>)>,
}

impl<'h> NamedCaptures<'h> {
    /// Build from `(name, value)` entries.
    pub fn new(entries: Vec<(Arc<str>, Option<&'h str>)>) -> Self {
        Self { entries }
    }

    /// The number of named groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Does the pattern have no named groups?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Does the schema name this group?
    ///
    /// This is `true` even when the group did not participate.
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.entries.iter().any(|(n, _)| n.as_ref() == name)
    }

    /// The value of a named group.
    ///
    /// ## Returns
    /// `None` if the group did not participate, or is not in the schema.
    pub fn get(
        &self,
        name: &str,
    ) -> Option<&'h str> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_ref() == name)
            .and_then(|(_, v)| *v)
    }

    /// Iterate over `(name, value)` pairs, in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&'h str>)> {
        self.entries.iter().map(|(n, v)| (n.as_ref(), *v))
    }

    /// Iterate over the names, in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_ref())
    }

    /// Collect the `(name, value)` pairs, in schema order.
    pub fn to_pairs(&self) -> Vec<(&str, Option<&'h str>)> {
        self.iter().collect()
    }
}

/// A successful match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord<'h> {
    native: NativeMatch<'h>,
    groups: NamedCaptures<'h>,
    has_indices: bool,
}

impl<'h> MatchRecord<'h> {
    pub(crate) fn new(
        native: NativeMatch<'h>,
        groups: NamedCaptures<'h>,
        has_indices: bool,
    ) -> Self {
        Self {
            native,
            groups,
            has_indices,
        }
    }

    /// The named groups.
    pub fn groups(&self) -> &NamedCaptures<'h> {
        &self.groups
    }

    /// Take the named groups.
    pub fn into_groups(self) -> NamedCaptures<'h> {
        self.groups
    }

    /// The positional captures; slot 0 is the full match.
    pub fn raw(&self) -> Vec<Option<&'h str>> {
        (0..self.native.len()).map(|i| self.native.get(i)).collect()
    }

    /// The full matched text.
    pub fn as_str(&self) -> &'h str {
        self.native.as_str()
    }

    /// The byte span of the full match.
    pub fn range(&self) -> Range<usize> {
        self.native.range()
    }

    /// The searched text.
    pub fn full_text(&self) -> &'h str {
        self.native.haystack()
    }

    /// The byte spans of every positional capture.
    ///
    /// ## Returns
    /// `None` unless the pattern was built with the `d` flag.
    pub fn indices(&self) -> Option<&[Option<Range<usize>>]> {
        self.has_indices.then(|| self.native.spans())
    }
}

/// The result of a single match attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'h> {
    /// The pattern did not match.
    NoMatch,

    /// The pattern matched.
    Matched(MatchRecord<'h>),
}

impl<'h> From<Option<MatchRecord<'h>>> for MatchOutcome<'h> {
    fn from(record: Option<MatchRecord<'h>>) -> Self {
        match record {
            Some(record) => Self::Matched(record),
            None => Self::NoMatch,
        }
    }
}

impl<'h> MatchOutcome<'h> {
    /// Did the pattern match?
    pub fn matched(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// The match, if any.
    pub fn record(&self) -> Option<&MatchRecord<'h>> {
        match self {
            Self::Matched(record) => Some(record),
            Self::NoMatch => None,
        }
    }

    /// Take the match, if any.
    pub fn into_record(self) -> Option<MatchRecord<'h>> {
        match self {
            Self::Matched(record) => Some(record),
            Self::NoMatch => None,
        }
    }

    /// The named groups, if matched.
    pub fn groups(&self) -> Option<&NamedCaptures<'h>> {
        self.record().map(MatchRecord::groups)
    }

    /// Take the named groups, if matched.
    pub fn into_groups(self) -> Option<NamedCaptures<'h>> {
        self.into_record().map(MatchRecord::into_groups)
    }
}
