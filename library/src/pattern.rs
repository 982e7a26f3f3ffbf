use serde::Serialize;

use crate::error::{Error, Result};

/// Backtracking budget handed to fancy-regex before a match is abandoned.
#[cfg(feature = "fancy")]
const BACKTRACK_LIMIT: usize = 1_000_000;

#[cfg(feature = "fancy")]
type Inner = fancy_regex::Regex;

#[cfg(not(feature = "fancy"))]
type Inner = regex::Regex;

/// The regular-expression backend compiled into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// The `regex` crate: linear time, no lookaround.
    Baseline,
    /// `fancy-regex`: adds lookaround and backreferences on top of `regex`.
    Enhanced,
}

impl Engine {
    pub const fn active() -> Self {
        if cfg!(feature = "fancy") {
            Engine::Enhanced
        } else {
            Engine::Baseline
        }
    }

    /// Annotation appended to the version identifier.
    pub const fn flag(self) -> &'static str {
        match self {
            Engine::Baseline => "",
            Engine::Enhanced => " (with regex)",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Engine::Baseline => "regex",
            Engine::Enhanced => "fancy-regex",
        }
    }
}

/// A compiled pattern backed by whichever [`Engine`] is active.
#[derive(Debug, Clone)]
pub struct Pattern {
    inner: Inner,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Pattern {
            inner: compile(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    #[cfg(feature = "fancy")]
    pub fn is_match(&self, text: &str) -> Result<bool> {
        self.inner.is_match(text).map_err(|e| Error::Match {
            pattern: self.as_str().to_string(),
            reason: e.to_string(),
        })
    }

    #[cfg(not(feature = "fancy"))]
    pub fn is_match(&self, text: &str) -> Result<bool> {
        Ok(self.inner.is_match(text))
    }
}

#[cfg(feature = "fancy")]
fn compile(pattern: &str) -> Result<Inner> {
    fancy_regex::RegexBuilder::new(pattern)
        .backtrack_limit(BACKTRACK_LIMIT)
        .build()
        .map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(not(feature = "fancy"))]
fn compile(pattern: &str) -> Result<Inner> {
    regex::Regex::new(pattern).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
