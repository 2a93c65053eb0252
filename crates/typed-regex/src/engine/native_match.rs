//! # Engine-Neutral Match Results

use core::ops::Range;

use crate::alloc::vec::Vec;

/// A single match, as reported by either regex engine.
///
/// Holds the byte span of every positional capture group; slot 0 is the
/// full match. Groups which did not participate in the match are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeMatch<'h> {
    haystack: &'h str,
    spans: Vec<Option<Range<usize>>>,
}

impl<'h> NativeMatch<'h> {
    /// Build a match from positional spans.
    ///
    /// ## Arguments
    /// * `haystack` - the searched text.
    /// * `spans` - the positional capture spans; slot 0 must be `Some`.
    pub fn new(
        haystack: &'h str,
        spans: Vec<Option<Range<usize>>>,
    ) -> Self {
        debug_assert!(matches!(spans.first(), Some(Some(_))));
        Self { haystack, spans }
    }

    pub(crate) fn from_basic(
        haystack: &'h str,
        caps: &regex::Captures<'h>,
    ) -> Self {
        Self::new(
            haystack,
            (0..caps.len())
                .map(|i| caps.get(i).map(|m| m.range()))
                .collect(),
        )
    }

    pub(crate) fn from_fancy(
        haystack: &'h str,
        caps: &fancy_regex::Captures<'h>,
    ) -> Self {
        Self::new(
            haystack,
            (0..caps.len())
                .map(|i| caps.get(i).map(|m| m.start()..m.end()))
                .collect(),
        )
    }

    /// The searched text.
    pub fn haystack(&self) -> &'h str {
        self.haystack
    }

    /// The span of the full match.
    pub fn range(&self) -> Range<usize> {
        self.spans
            .first()
            .cloned()
            .flatten()
            .unwrap_or_default()
    }

    /// The text of the full match.
    pub fn as_str(&self) -> &'h str {
        &self.haystack[self.range()]
    }

    /// The number of positional slots, including the full match.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Always `false`; slot 0 is the full match.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The positional spans.
    pub fn spans(&self) -> &[Option<Range<usize>>] {
        &self.spans
    }

    /// The span of a positional group.
    pub fn span(
        &self,
        index: usize,
    ) -> Option<Range<usize>> {
        self.spans.get(index).cloned().flatten()
    }

    /// The text of a positional group.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&'h str> {
        self.span(index).map(|r| &self.haystack[r])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    #[test]
    fn test_accessors() {
        let m = NativeMatch::new("xx2020-12", vec![Some(2..9), Some(2..6), None]);
        assert_eq!(m.haystack(), "xx2020-12");
        assert_eq!(m.range(), 2..9);
        assert_eq!(m.as_str(), "2020-12");
        assert_eq!(m.len(), 3);
        assert!(!m.is_empty());
        assert_eq!(m.get(1), Some("2020"));
        assert_eq!(m.get(2), None);
        assert_eq!(m.get(3), None);
        assert_eq!(m.span(1), Some(2..6));
    }

    #[test]
    fn test_from_engines_agree() {
        let text = "id: 42";
        let pattern = r"(?<key>\w+): (?<value>\d+)(?<rest>x)?";

        let basic = regex::Regex::new(pattern).unwrap();
        let fancy = fancy_regex::Regex::new(pattern).unwrap();

        let b = NativeMatch::from_basic(text, &basic.captures(text).unwrap());
        let f = NativeMatch::from_fancy(text, &fancy.captures(text).unwrap().unwrap());

        assert_eq!(b, f);
        assert_eq!(b.get(1), Some("id"));
        assert_eq!(b.get(2), Some("42"));
        assert_eq!(b.get(3), None);
    }
}
