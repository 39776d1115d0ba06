//! Candidate post type.

use serde::{Deserialize, Serialize};

/// A single parsed, not-yet-filtered post string.
///
/// Candidates come out of the source reader already unescaped (literal `\n`
/// expanded to a line break) with comments and blank lines removed. They are
/// derived fresh each run and never persisted; only the text of a
/// successfully published candidate reaches the post log.
///
/// # Examples
///
/// ```
/// use warble_core::Candidate;
///
/// let candidate = Candidate::new("first line\nsecond line");
/// assert_eq!(candidate.as_str().lines().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct Candidate(String);

impl Candidate {
    /// Wrap already-parsed post text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The post text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the candidate, returning the post text.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Length in Unicode scalar values.
    ///
    /// Platform character limits count characters, not bytes, so a multibyte
    /// glyph still costs one.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
