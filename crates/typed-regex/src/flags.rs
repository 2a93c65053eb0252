//! # Regex Flags
//!
//! Flags are given as a string of single-character switches, using the
//! familiar `RegExp` alphabet:
//!
//! | flag | accessor                          | effect                                        |
//! |------|-----------------------------------|-----------------------------------------------|
//! | `d`  | [`RegexFlags::has_indices`]       | records carry byte spans for every capture.   |
//! | `g`  | [`RegexFlags::global`]            | `match_all` visits every occurrence.          |
//! | `i`  | [`RegexFlags::ignore_case`]       | case-insensitive matching.                    |
//! | `m`  | [`RegexFlags::multi_line`]        | `^` and `$` match at line boundaries.         |
//! | `s`  | [`RegexFlags::dot_all`]           | `.` matches `\n`.                             |
//! | `u`  | [`RegexFlags::unicode`]           | accepted; both engines are Unicode-aware.     |
//! | `y`  | [`RegexFlags::sticky`]            | matches must start at the search position.    |
//!
//! Duplicate flags are accepted; they have no additional effect.

use core::{fmt, str::FromStr};

use crate::{
    alloc::{format, string::String},
    errors::{TRResult, TypedRegexError},
};

/// Every accepted flag character, in canonical order.
pub const FLAG_ALPHABET: &str = "dgimsuy";

/// A validated set of regex flags.
///
/// The source flag string is preserved verbatim for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RegexFlags {
    source: String,
    has_indices: bool,
    global: bool,
    ignore_case: bool,
    multi_line: bool,
    dot_all: bool,
    unicode: bool,
    sticky: bool,
}

impl FromStr for RegexFlags {
    type Err = TypedRegexError;

    fn from_str(flags: &str) -> Result<Self, Self::Err> {
        Self::parse(flags)
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl RegexFlags {
    /// Parse and validate a flag string.
    ///
    /// ## Arguments
    /// * `flags` - the flag characters, e.g. `"gi"`.
    ///
    /// ## Returns
    /// The parsed flags, or [`TypedRegexError::InvalidFlag`] naming the
    /// first character outside of [`FLAG_ALPHABET`].
    pub fn parse(flags: &str) -> TRResult<Self> {
        let mut parsed = Self {
            source: flags.into(),
            ..Default::default()
        };
        for (position, flag) in flags.chars().enumerate() {
            if !parsed.apply(flag) {
                return Err(TypedRegexError::InvalidFlag { flag, position });
            }
        }
        Ok(parsed)
    }

    fn apply(
        &mut self,
        flag: char,
    ) -> bool {
        match flag {
            'd' => self.has_indices = true,
            'g' => self.global = true,
            'i' => self.ignore_case = true,
            'm' => self.multi_line = true,
            's' => self.dot_all = true,
            'u' => self.unicode = true,
            'y' => self.sticky = true,
            _ => return false,
        }
        true
    }

    fn rebuild(source: String) -> Self {
        let mut flags = Self::default();
        for flag in source.chars() {
            flags.apply(flag);
        }
        flags.source = source;
        flags
    }

    fn with_flag(
        mut self,
        flag: char,
        enabled: bool,
    ) -> Self {
        let already = self.source.contains(flag);
        if enabled && !already {
            self.source.push(flag);
            self.apply(flag);
        } else if !enabled && already {
            self = Self::rebuild(self.source.chars().filter(|&c| c != flag).collect());
        }
        self
    }

    /// The flag string, as given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Is the flag set empty?
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// The `d` flag: records carry capture byte spans.
    pub fn has_indices(&self) -> bool {
        self.has_indices
    }

    /// The `g` flag: `match_all` visits every occurrence.
    pub fn global(&self) -> bool {
        self.global
    }

    /// The `i` flag: case-insensitive matching.
    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// The `m` flag: `^` and `$` match at line boundaries.
    pub fn multi_line(&self) -> bool {
        self.multi_line
    }

    /// The `s` flag: `.` matches line terminators.
    pub fn dot_all(&self) -> bool {
        self.dot_all
    }

    /// The `u` flag.
    pub fn unicode(&self) -> bool {
        self.unicode
    }

    /// The `y` flag: matches must begin at the search position.
    pub fn sticky(&self) -> bool {
        self.sticky
    }

    /// Sets the `d` flag.
    pub fn with_has_indices(
        self,
        enabled: bool,
    ) -> Self {
        self.with_flag('d', enabled)
    }

    /// Sets the `g` flag.
    pub fn with_global(
        self,
        enabled: bool,
    ) -> Self {
        self.with_flag('g', enabled)
    }

    /// Sets the `i` flag.
    pub fn with_ignore_case(
        self,
        enabled: bool,
    ) -> Self {
        self.with_flag('i', enabled)
    }

    /// Sets the `m` flag.
    pub fn with_multi_line(
        self,
        enabled: bool,
    ) -> Self {
        self.with_flag('m', enabled)
    }

    /// Sets the `s` flag.
    pub fn with_dot_all(
        self,
        enabled: bool,
    ) -> Self {
        self.with_flag('s', enabled)
    }

    /// Sets the `u` flag.
    pub fn with_unicode(
        self,
        enabled: bool,
    ) -> Self {
        self.with_flag('u', enabled)
    }

    /// Sets the `y` flag.
    pub fn with_sticky(
        self,
        enabled: bool,
    ) -> Self {
        self.with_flag('y', enabled)
    }

    /// The inline engine flag group for these flags.
    ///
    /// ## Returns
    /// A prefix such as `"(?ims)"`, or `""` when no engine flag applies.
    pub fn inline_prefix(&self) -> String {
        let mut inline = String::new();
        if self.ignore_case {
            inline.push('i');
        }
        if self.multi_line {
            inline.push('m');
        }
        if self.dot_all {
            inline.push('s');
        }
        if inline.is_empty() {
            inline
        } else {
            format!("(?{inline})")
        }
    }
}
