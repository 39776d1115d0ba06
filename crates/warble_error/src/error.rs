//! Top-level error wrapper types.

use crate::{ConfigError, FetchError, PublishError, SourceError, StoreError, ValidationError};

/// Union of every error domain in the Warble workspace.
///
/// # Examples
///
/// ```
/// use warble_error::{ConfigError, WarbleError};
///
/// let cfg_err = ConfigError::new("unreadable config");
/// let err: WarbleError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WarbleErrorKind {
    /// Post-source file error
    #[from(SourceError)]
    Source(SourceError),
    /// Recency store error
    #[from(StoreError)]
    Store(StoreError),
    /// Candidate validation error
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Publish error
    #[from(PublishError)]
    Publish(PublishError),
    /// Image fetch error
    #[from(FetchError)]
    Fetch(FetchError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Warble error with kind discrimination.
///
/// # Examples
///
/// ```
/// use warble_error::{ConfigError, WarbleResult};
///
/// fn might_fail() -> WarbleResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Warble Error: {}", _0)]
pub struct WarbleError(Box<WarbleErrorKind>);

impl WarbleError {
    /// Create a new error from a kind.
    pub fn new(kind: WarbleErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WarbleErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to WarbleErrorKind
impl<T> From<T> for WarbleError
where
    T: Into<WarbleErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Warble operations.
///
/// # Examples
///
/// ```
/// use warble_error::{StoreError, StoreErrorKind, WarbleResult};
///
/// fn open_log() -> WarbleResult<()> {
///     Err(StoreError::new(StoreErrorKind::Connection("locked".to_string())))?
/// }
/// ```
pub type WarbleResult<T> = std::result::Result<T, WarbleError>;
