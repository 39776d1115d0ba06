//! Post-source file error types.

/// Kinds of post-source file errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SourceErrorKind {
    /// Post-source file does not exist
    #[display("Post file not found: {}", _0)]
    NotFound(String),
    /// Failed to read the post-source file
    #[display("Failed to read post file: {}", _0)]
    Read(String),
    /// Failed to write a post-source template
    #[display("Failed to write post template: {}", _0)]
    Write(String),
}

/// Post-source file error with location tracking.
///
/// # Examples
///
/// ```
/// use warble_error::{SourceError, SourceErrorKind};
///
/// let err = SourceError::new(SourceErrorKind::NotFound("posts/bluesky.txt".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Source Error: {} at line {} in {}", kind, line, file)]
pub struct SourceError {
    /// The kind of error that occurred
    pub kind: SourceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SourceError {
    /// Create a new source error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SourceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the underlying condition is a missing post-source file.
    ///
    /// Missing files are a recoverable bootstrap path: the caller writes a
    /// template and skips the identity for the run.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, SourceErrorKind::NotFound(_))
    }
}

/// Result type for post-source operations.
pub type SourceResult<T> = Result<T, SourceError>;
