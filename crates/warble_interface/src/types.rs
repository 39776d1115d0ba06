//! Shared types for the adapter and fetcher traits.

use serde::{Deserialize, Serialize};

/// Largest attachment body accepted by image fetchers, in bytes.
///
/// Anything at or over this size is dropped from the post rather than
/// uploaded.
pub const MAX_IMAGE_BYTES: usize = 1_000_000;

/// Confirmation of a successful publish.
///
/// Carries the platform-assigned identifier when the API returns one (a
/// Bluesky record URI, a tweet id); purely informational, used for logging.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters, derive_new::new,
)]
pub struct PublishReceipt {
    /// Platform-assigned post identifier, when known
    post_id: Option<String>,
}

/// An image downloaded for attachment to a post.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters, derive_new::new)]
pub struct FetchedImage {
    /// Source URL the image came from
    url: String,
    /// Raw image bytes as downloaded
    bytes: Vec<u8>,
}
