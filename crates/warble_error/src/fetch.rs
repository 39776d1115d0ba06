//! Image fetch error types.

/// Kinds of image fetch failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum FetchErrorKind {
    /// The downloaded body exceeded the attachment size cap
    #[display("Image too large: {} bytes", _0)]
    TooLarge(usize),
    /// Transport or status failure while downloading
    #[display("Image fetch failed: {}", _0)]
    Http(String),
}

/// Image fetch error with source location tracking.
///
/// Fetch failures are non-fatal to a publish: the orchestrating adapter drops
/// the offending image and proceeds with whatever survives.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Fetch Error: {} at line {} in {}", kind, line, file)]
pub struct FetchError {
    /// The kind of error that occurred
    pub kind: FetchErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl FetchError {
    /// Create a new fetch error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: FetchErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for image fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
