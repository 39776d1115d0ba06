//! Publish error types.

/// Kinds of publish failures reported by platform adapters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PublishErrorKind {
    /// The platform rejected the post as matching recently published content
    #[display("Platform rejected duplicate content: {}", _0)]
    DuplicateContent(String),
    /// The platform rejected the post because the posting quota is exhausted
    #[display("Platform rate limit reached: {}", _0)]
    RateLimited(String),
    /// An image post ended up with no images and no text
    #[display("Invalid post: no images survived and no text remains")]
    EmptyPost,
    /// Transport failures and any other platform rejection
    #[display("Publish failed: {}", _0)]
    Other(String),
}

impl PublishErrorKind {
    /// Operator-facing hint on how to avoid the failure, where one is known.
    pub fn remediation(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateContent(_) => Some(
                "the platform saw this text recently; raise log_threshold so \
                 recent posts stay out of the selection pool longer",
            ),
            Self::RateLimited(_) => Some(
                "free-tier posting allows roughly 500 posts per month (about 16 \
                 per day); schedule invocations further apart, at least 90 minutes",
            ),
            _ => None,
        }
    }
}

/// Publish error with source location tracking.
///
/// # Examples
///
/// ```
/// use warble_error::{PublishError, PublishErrorKind};
///
/// let err = PublishError::new(PublishErrorKind::RateLimited("429".to_string()));
/// assert!(err.kind.remediation().is_some());
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", kind, line, file)]
pub struct PublishError {
    /// The kind of error that occurred
    pub kind: PublishErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PublishError {
    /// Create a new publish error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PublishErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;
