//! Trait definitions for platform adapters and attachment fetchers.

use crate::{FetchedImage, MAX_IMAGE_BYTES, PublishReceipt};
use async_trait::async_trait;
use warble_core::Candidate;
use warble_error::{FetchResult, PublishResult, ValidationResult};

/// Core trait that every platform adapter must implement.
///
/// An adapter owns everything platform-specific: its schema name (the recency
/// partition key component), the instructional template written when a bot's
/// post-source file is missing, the validation rules it composes, and the
/// publish mechanics. The orchestrator drives adapters purely through this
/// trait.
///
/// Publishing is deliberately split from recording: `publish` returns a
/// receipt and the *orchestrator* commits the text to the post log, so a
/// failed publish can never leave a recency record behind.
#[async_trait]
pub trait Platform: Send + Sync {
    /// Platform schema name (e.g., "Bluesky", "Twitter").
    fn schema_name(&self) -> &'static str;

    /// Instructional template written to a missing post-source file.
    fn default_template_text(&self) -> &'static str;

    /// Check the recency-filtered candidate pool against platform rules.
    ///
    /// Reports every offender of the first failing rule class.
    fn validate(&self, candidates: &[Candidate]) -> ValidationResult<()>;

    /// Deliver one candidate to the platform.
    async fn publish(&self, candidate: &Candidate) -> PublishResult<PublishReceipt>;
}

/// Trait for fetching image attachments referenced by a post.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Download the image at `url`.
    ///
    /// Implementations enforce [`Self::max_image_bytes`]: an oversized body
    /// is a [`warble_error::FetchErrorKind::TooLarge`] failure, which the
    /// caller treats as a dropped attachment rather than a failed publish.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedImage>;

    /// Maximum accepted image size in bytes.
    fn max_image_bytes(&self) -> usize {
        MAX_IMAGE_BYTES
    }
}
