//! Error types for the Warble posting bot.
//!
//! This crate provides the foundation error types used throughout the Warble
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use warble_error::{ConfigError, WarbleResult};
//!
//! fn load_settings() -> WarbleResult<String> {
//!     Err(ConfigError::new("missing credentials table"))?
//! }
//!
//! match load_settings() {
//!     Ok(settings) => println!("Loaded: {}", settings),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod fetch;
mod publish;
mod source;
mod store;
mod validation;

pub use config::{ConfigError, ConfigResult};
pub use error::{WarbleError, WarbleErrorKind, WarbleResult};
pub use fetch::{FetchError, FetchErrorKind, FetchResult};
pub use publish::{PublishError, PublishErrorKind, PublishResult};
pub use source::{SourceError, SourceErrorKind, SourceResult};
pub use store::{StoreError, StoreErrorKind, StoreResult};
pub use validation::{ValidationError, ValidationErrorKind, ValidationResult};
