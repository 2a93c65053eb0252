//! # Regex Pattern Labeled Wrapper

use crate::{
    alloc::string::{String, ToString},
    engine::{ErrorWrapper, RegexWrapper},
    flags::RegexFlags,
};

/// Which engine a pattern should be compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum EngineSelector {
    /// Try the basic engine; then fall-up to the extended engine.
    #[default]
    Adaptive,

    /// Only the basic engine.
    Basic,

    /// Only the extended engine.
    Fancy,
}

impl EngineSelector {
    /// Label a pattern for this engine.
    pub fn label(
        &self,
        pattern: impl Into<String>,
    ) -> RegexPattern {
        let pattern = pattern.into();
        match self {
            Self::Adaptive => RegexPattern::Adaptive(pattern),
            Self::Basic => RegexPattern::Basic(pattern),
            Self::Fancy => RegexPattern::Fancy(pattern),
        }
    }
}

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    Fancy(String),

    /// The requirements of this pattern and may require regex extensions.
    Adaptive(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::Adaptive(pattern.as_ref().to_string())
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`, without flags.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        self.compile_with_flags(&RegexFlags::default())
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// The case, line, and dot flags are applied as a leading inline flag
    /// group; this does not shift any capture group index.
    ///
    /// ## Arguments
    /// * `flags` - the flags to compile with.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile_with_flags(
        &self,
        flags: &RegexFlags,
    ) -> Result<RegexWrapper, ErrorWrapper> {
        let mut source = flags.inline_prefix();
        source.push_str(self.as_str());

        match self {
            Self::Basic(_) => regex::Regex::new(&source)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(_) => fancy_regex::Regex::new(&source)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Adaptive(_) => regex::Regex::new(&source)
                .map(RegexWrapper::from)
                .or_else(|_| {
                    fancy_regex::Regex::new(&source)
                        .map(RegexWrapper::from)
                        .map_err(ErrorWrapper::from)
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::format;

    const FANCY_PATTERN: &str = r"(?<word>\w+)(?=!)";

    #[test]
    fn test_selector_labels() {
        assert_eq!(
            EngineSelector::default().label("a"),
            RegexPattern::Adaptive("a".to_string())
        );
        assert_eq!(
            EngineSelector::Basic.label("a"),
            RegexPattern::Basic("a".to_string())
        );
        assert_eq!(
            EngineSelector::Fancy.label("a"),
            RegexPattern::Fancy("a".to_string())
        );
    }

    #[test]
    fn test_basic_pattern() {
        let pattern = RegexPattern::Basic("hello world".to_string());
        assert_eq!(pattern.as_str(), "hello world");

        let rw = pattern.compile().unwrap();
        assert_eq!(rw.as_str(), "hello world");
        assert!(rw.is_basic());
    }

    #[test]
    fn test_adaptive_pattern() {
        let pattern: RegexPattern = "hello world".into();
        assert!(matches!(pattern, RegexPattern::Adaptive(_)));

        let rw = pattern.compile().unwrap();
        assert!(rw.is_basic());
    }

    #[test]
    fn test_adaptive_pattern_fallback() {
        let pattern: RegexPattern = FANCY_PATTERN.into();
        let rw = pattern.compile().unwrap();
        assert!(rw.is_fancy());
    }

    #[test]
    fn test_basic_pattern_failure() {
        let pattern = RegexPattern::Basic(FANCY_PATTERN.to_string());
        let err = pattern.compile().unwrap_err();
        assert!(matches!(err, ErrorWrapper::Basic(_)));
        assert!(format!("{}", err).contains("regex parse error"));
    }

    #[test]
    fn test_fancy_pattern_failure() {
        let pattern = RegexPattern::Fancy(r"[".to_string());
        let err = pattern.compile().unwrap_err();
        assert!(matches!(err, ErrorWrapper::Fancy(_)));
    }

    #[test]
    fn test_flags_prefix_source() {
        let flags = RegexFlags::parse("gi").unwrap();
        let rw = RegexPattern::Basic("abc".to_string())
            .compile_with_flags(&flags)
            .unwrap();
        assert_eq!(rw.as_str(), "(?i)abc");
        assert!(rw.is_match("xABCx").unwrap());
    }
}
