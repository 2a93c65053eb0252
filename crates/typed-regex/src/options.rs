//! # Typed Regex Options
//!
//! Options for building a [`TypedRegex`].

use crate::{
    alloc::string::String,
    engine::EngineSelector,
    errors::TRResult,
    flags::RegexFlags,
    matching::TypedRegex,
};

/// Options for configuring a [`TypedRegex`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypedRegexOptions {
    /// The regex flags.
    pub flags: RegexFlags,

    /// Which regex engine to compile with.
    ///
    /// Defaults to [`EngineSelector::Adaptive`].
    pub engine: EngineSelector,
}

impl TypedRegexOptions {
    /// Gets the configured flags.
    pub fn flags(&self) -> &RegexFlags {
        &self.flags
    }

    /// Sets the configured flags.
    pub fn set_flags(
        &mut self,
        flags: RegexFlags,
    ) {
        self.flags = flags;
    }

    /// Sets the configured flags.
    pub fn with_flags(
        mut self,
        flags: RegexFlags,
    ) -> Self {
        self.set_flags(flags);
        self
    }

    /// Gets the configured engine selector.
    pub fn engine(&self) -> EngineSelector {
        self.engine
    }

    /// Sets the configured engine selector.
    pub fn set_engine(
        &mut self,
        engine: EngineSelector,
    ) {
        self.engine = engine;
    }

    /// Sets the configured engine selector.
    pub fn with_engine(
        mut self,
        engine: EngineSelector,
    ) -> Self {
        self.set_engine(engine);
        self
    }

    /// Build a [`TypedRegex`] for the given pattern.
    ///
    /// ## Returns
    /// The compiled regex, or [`TypedRegexError::Compile`](crate::TypedRegexError::Compile)
    /// if the engine rejects the pattern.
    pub fn build(
        &self,
        pattern: impl Into<String>,
    ) -> TRResult<TypedRegex> {
        TypedRegex::compile(pattern.into(), self.flags.clone(), self.engine)
    }
}
