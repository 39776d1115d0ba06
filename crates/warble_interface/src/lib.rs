//! Trait definitions for the Warble posting bot.
//!
//! This crate provides the capability traits that platform adapters and
//! attachment fetchers implement, keeping the orchestrator independent of any
//! concrete platform client.

mod traits;
mod types;

pub use traits::{ImageFetcher, Platform};
pub use types::{FetchedImage, MAX_IMAGE_BYTES, PublishReceipt};
