//! Candidate validation error types.

/// Kinds of candidate validation failures.
///
/// Each kind carries the full offender list for its rule class, so a single
/// failure report names every post the author needs to fix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// No candidates remain after recency filtering
    #[display("no eligible posts remain, the source file needs at least {} posts", needed)]
    EmptyPool {
        /// Minimum pool size for the identity (retention window + 1)
        needed: usize,
    },
    /// Candidates exceeding the platform character limit
    #[display(
        "{} post(s) exceed the {} character limit:\n- {}",
        offenders.len(),
        limit,
        offenders.join("\n- ")
    )]
    CharacterLimit {
        /// Platform character limit
        limit: usize,
        /// Every candidate over the limit
        offenders: Vec<String>,
    },
    /// Candidates carrying more image directives than the platform allows
    #[display(
        "{} post(s) carry more than {} image directives:\n- {}",
        offenders.len(),
        max,
        offenders.join("\n- ")
    )]
    ImageLimit {
        /// Maximum directives per post
        max: usize,
        /// Every candidate over the limit
        offenders: Vec<String>,
    },
}

/// Validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use warble_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::EmptyPool { needed: 12 });
/// assert!(format!("{}", err).contains("at least 12 posts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for candidate validation.
pub type ValidationResult<T> = Result<T, ValidationError>;
