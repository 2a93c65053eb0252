//! # Typed Regex

use crate::{
    alloc::{string::String, vec::Vec},
    engine::{EngineSelector, NativeMatch, RegexWrapper},
    errors::{TRResult, TypedRegexError},
    flags::RegexFlags,
    matching::{MatchOutcome, MatchRecord, NamedCaptures},
    options::TypedRegexOptions,
    schema::{CaptureSchema, extract_schema},
};

/// A compiled regex, with a [`CaptureSchema`] derived from its pattern.
///
/// Every operation takes `&self` and builds its own search state; repeated
/// calls with the same text return the same results, and a `TypedRegex` may
/// be shared between threads.
///
/// ```rust
/// use typed_regex::TypedRegex;
///
/// let re = TypedRegex::new(r"^(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})$")?;
///
/// let caps = re.captures("2020-12-02")?.unwrap();
/// assert_eq!(caps.get("year"), Some("2020"));
/// assert_eq!(caps.get("month"), Some("12"));
/// assert_eq!(caps.get("day"), Some("02"));
///
/// assert!(!re.match_one("2020-12")?.matched());
/// # Ok::<(), typed_regex::TypedRegexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TypedRegex {
    pattern: String,
    flags: RegexFlags,
    schema: CaptureSchema,
    regex: RegexWrapper,

    /// For each schema group, the engine's positional slot for that name.
    slots: Vec<Option<usize>>,
}

impl TypedRegex {
    /// Compile a pattern without flags.
    ///
    /// ## Arguments
    /// * `pattern` - the regex pattern.
    pub fn new(pattern: impl Into<String>) -> TRResult<Self> {
        TypedRegexOptions::default().build(pattern)
    }

    /// Compile a pattern with a flag string.
    ///
    /// The flags are validated before the pattern is compiled.
    ///
    /// ## Arguments
    /// * `pattern` - the regex pattern.
    /// * `flags` - the flag characters, e.g. `"gi"`.
    pub fn with_flags(
        pattern: impl Into<String>,
        flags: &str,
    ) -> TRResult<Self> {
        TypedRegexOptions::default()
            .with_flags(flags.parse()?)
            .build(pattern)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(pattern)))]
    pub(crate) fn compile(
        pattern: String,
        flags: RegexFlags,
        engine: EngineSelector,
    ) -> TRResult<Self> {
        let schema = extract_schema(&pattern);

        let regex = engine
            .label(pattern.as_str())
            .compile_with_flags(&flags)
            .map_err(TypedRegexError::Compile)?;

        let names = regex.capture_names();
        let slots: Vec<Option<usize>> = schema
            .iter()
            .map(|g| names.iter().position(|n| n.as_deref() == Some(g.name())))
            .collect();

        let engine_named = names.iter().flatten().count();
        if engine_named != schema.len() || slots.iter().any(Option::is_none) {
            log::warn!(
                "capture schema of {pattern:?} has {} named groups; the engine reports {engine_named}",
                schema.len(),
            );
        }
        log::debug!(
            "compiled {pattern:?} /{flags}/ with {} engine: {} named groups ({} optional)",
            if regex.is_fancy() { "fancy" } else { "basic" },
            schema.len(),
            schema.optional().count(),
        );

        Ok(Self {
            pattern,
            flags,
            schema,
            regex,
            slots,
        })
    }

    /// The pattern, as given.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The flags.
    pub fn flags(&self) -> &RegexFlags {
        &self.flags
    }

    /// The schema derived from the pattern.
    pub fn schema(&self) -> &CaptureSchema {
        &self.schema
    }

    /// The compiled engine regex.
    pub fn engine(&self) -> &RegexWrapper {
        &self.regex
    }

    /// Does the pattern match anywhere in `text`?
    ///
    /// With the `y` flag, only a match at the start of `text` counts.
    pub fn is_match(
        &self,
        text: &str,
    ) -> TRResult<bool> {
        if self.flags.sticky() {
            return Ok(self.find_at(text, 0)?.is_some());
        }
        self.regex.is_match(text).map_err(TypedRegexError::Search)
    }

    /// Run a single match attempt from the start of `text`.
    pub fn match_one<'h>(
        &self,
        text: &'h str,
    ) -> TRResult<MatchOutcome<'h>> {
        Ok(self
            .find_at(text, 0)?
            .map(|native| self.to_record(native))
            .into())
    }

    /// Find every match in `text`, in order, without overlaps.
    ///
    /// Without the `g` flag, at most one match is returned.
    /// After an empty match the search resumes one character later.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn match_all<'h>(
        &self,
        text: &'h str,
    ) -> TRResult<Vec<MatchRecord<'h>>> {
        let mut records = Vec::new();
        let mut pos = 0;
        while pos <= text.len() {
            let Some(native) = self.find_at(text, pos)? else {
                break;
            };

            let range = native.range();
            records.push(self.to_record(native));
            if !self.flags.global() {
                break;
            }

            pos = if range.is_empty() {
                range.end + text[range.end..].chars().next().map_or(1, char::len_utf8)
            } else {
                range.end
            };
        }
        log::trace!("{} matches of {:?}", records.len(), self.pattern);
        Ok(records)
    }

    /// The named groups of [`match_one`](Self::match_one).
    ///
    /// ## Returns
    /// `None` if the pattern did not match; a pattern without named groups
    /// yields an empty [`NamedCaptures`] on a match.
    pub fn captures<'h>(
        &self,
        text: &'h str,
    ) -> TRResult<Option<NamedCaptures<'h>>> {
        Ok(self.match_one(text)?.into_groups())
    }

    /// The named groups of every [`match_all`](Self::match_all) record.
    pub fn capture_all<'h>(
        &self,
        text: &'h str,
    ) -> TRResult<Vec<NamedCaptures<'h>>> {
        Ok(self
            .match_all(text)?
            .into_iter()
            .map(MatchRecord::into_groups)
            .collect())
    }

    fn find_at<'h>(
        &self,
        text: &'h str,
        pos: usize,
    ) -> TRResult<Option<NativeMatch<'h>>> {
        let found = self
            .regex
            .captures_at(text, pos)
            .map_err(TypedRegexError::Search)?;

        // The leftmost match starts at `pos` whenever any match can.
        Ok(found.filter(|m| !self.flags.sticky() || m.range().start == pos))
    }

    fn to_record<'h>(
        &self,
        native: NativeMatch<'h>,
    ) -> MatchRecord<'h> {
        let groups = self
            .schema
            .iter()
            .zip(&self.slots)
            .map(|(g, slot)| (g.shared_name().clone(), slot.and_then(|i| native.get(i))))
            .collect();

        MatchRecord::new(native, NamedCaptures::new(groups), self.flags.has_indices())
    }
}
