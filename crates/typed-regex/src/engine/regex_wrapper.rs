//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use crate::{
    alloc::{boxed::Box, string::String, vec::Vec},
    engine::NativeMatch,
};

/// Error wrapper for regex patterns.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(Box<regex::Error>),

    /// Error from `fancy_regex`.
    Fancy(Box<fancy_regex::Error>),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err.into())
    }
}

impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err.into())
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Wrapper for regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl PartialEq for RegexWrapper {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        match (self, other) {
            (Self::Basic(a), Self::Basic(b)) => a.as_str() == b.as_str(),
            (Self::Fancy(a), Self::Fancy(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            Self::Fancy(_) => false,
        }
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        match self {
            Self::Basic(_) => false,
            Self::Fancy(_) => true,
        }
    }

    /// Get the compiled regex source.
    ///
    /// This includes any inline flag prefix.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// The number of positional capture slots, including the full match.
    pub fn captures_len(&self) -> usize {
        match self {
            Self::Basic(regex) => regex.captures_len(),
            Self::Fancy(regex) => regex.captures_len(),
        }
    }

    /// The name of each positional capture slot.
    ///
    /// ## Returns
    /// One entry per slot; `None` for the full match and unnamed groups.
    pub fn capture_names(&self) -> Vec<Option<String>> {
        match self {
            Self::Basic(regex) => regex
                .capture_names()
                .map(|n| n.map(String::from))
                .collect(),
            Self::Fancy(regex) => regex
                .capture_names()
                .map(|n| n.map(String::from))
                .collect(),
        }
    }

    /// Wrapper for `is_match`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// `true` if the pattern matches anywhere in `haystack`.
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> Result<bool, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.is_match(haystack)),
            Self::Fancy(regex) => regex.is_match(haystack).map_err(ErrorWrapper::from),
        }
    }

    /// Wrapper for `captures_at` / `captures_from_pos`.
    ///
    /// Anchors such as `^` and look-behinds still see the text before `start`.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    /// * `start` - The byte offset to begin searching at; must be a char boundary.
    ///
    /// ## Returns
    /// The leftmost match starting at or after `start`, if any.
    pub fn captures_at<'h>(
        &self,
        haystack: &'h str,
        start: usize,
    ) -> Result<Option<NativeMatch<'h>>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex
                .captures_at(haystack, start)
                .map(|caps| NativeMatch::from_basic(haystack, &caps))),
            Self::Fancy(regex) => Ok(regex
                .captures_from_pos(haystack, start)?
                .map(|caps| NativeMatch::from_fancy(haystack, &caps))),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        alloc::{string::ToString, vec},
        engine::RegexPattern,
    };

    #[test]
    fn test_partial_eq() {
        let b0 = RegexPattern::Basic("hello world".to_string())
            .compile()
            .unwrap();
        let b1 = RegexPattern::Basic("world".to_string()).compile().unwrap();

        let f0 = RegexPattern::Fancy("hello world".to_string())
            .compile()
            .unwrap();
        let f1 = RegexPattern::Fancy("world".to_string()).compile().unwrap();

        assert_eq!(&b0, &b0);
        assert_ne!(&b0, &b1);

        assert_eq!(&f0, &f0);
        assert_ne!(&f0, &f1);

        assert_ne!(&b0, &f0);
        assert_ne!(&f1, &b1);
    }

    #[test]
    fn test_capture_names() {
        let pattern = r"(?<year>\d{4})-(\d{2})-(?<day>\d{2})";
        let expected = vec![
            None,
            Some("year".to_string()),
            None,
            Some("day".to_string()),
        ];

        for rw in [
            RegexPattern::Basic(pattern.to_string()).compile().unwrap(),
            RegexPattern::Fancy(pattern.to_string()).compile().unwrap(),
        ] {
            assert_eq!(rw.captures_len(), 4);
            assert_eq!(rw.capture_names(), expected);
        }
    }

    #[test]
    fn test_captures_at() {
        let text = "a1 b2 c3";
        for rw in [
            RegexPattern::Basic(r"(?<c>[a-z])(?<d>\d)".to_string())
                .compile()
                .unwrap(),
            RegexPattern::Fancy(r"(?<c>[a-z])(?<d>\d)".to_string())
                .compile()
                .unwrap(),
        ] {
            let m = rw.captures_at(text, 0).unwrap().unwrap();
            assert_eq!(m.as_str(), "a1");

            let m = rw.captures_at(text, 1).unwrap().unwrap();
            assert_eq!(m.as_str(), "b2");
            assert_eq!(m.range(), 3..5);
            assert_eq!(m.get(1), Some("b"));

            assert!(rw.captures_at(text, 7).unwrap().is_none());
            assert!(rw.is_match(text).unwrap());
            assert!(!rw.is_match("zz").unwrap());
        }
    }

    #[test]
    fn test_captures_at_keeps_anchor_context() {
        let rw = RegexPattern::Basic("^a".to_string()).compile().unwrap();
        assert!(rw.captures_at("aa", 1).unwrap().is_none());
    }
}
