//! Bluesky adapter behavior that is observable without a live service.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use warble_core::Candidate;
use warble_error::{FetchError, FetchErrorKind, PublishErrorKind};
use warble_interface::{FetchedImage, ImageFetcher, Platform};
use warble_social::{Bluesky, BlueskyCredentials, ReqwestImageFetcher};

/// Fetcher that rejects every URL as oversized and counts the attempts.
struct RejectingFetcher {
    attempts: AtomicUsize,
}

impl RejectingFetcher {
    fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ImageFetcher for RejectingFetcher {
    async fn fetch(&self, _url: &str) -> Result<FetchedImage, FetchError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(FetchError::new(FetchErrorKind::TooLarge(2_000_000)))
    }
}

fn adapter_with(fetcher: Arc<RejectingFetcher>) -> Bluesky {
    Bluesky::with_fetcher(
        BlueskyCredentials::new("bot.bsky.social", "app-password"),
        0,
        fetcher,
    )
}

#[tokio::test]
async fn test_directive_only_post_with_no_surviving_images_is_rejected() {
    let fetcher = Arc::new(RejectingFetcher::new());
    let bluesky = adapter_with(fetcher.clone());

    let candidate = Candidate::new("getImage[https://a.example/big.png]");
    let error = bluesky
        .publish(&candidate)
        .await
        .expect_err("nothing survives, nothing to publish");

    assert_eq!(error.kind, PublishErrorKind::EmptyPost);
    assert_eq!(fetcher.attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_every_directive_is_attempted_before_giving_up() {
    let fetcher = Arc::new(RejectingFetcher::new());
    let bluesky = adapter_with(fetcher.clone());

    let candidate = Candidate::new(
        "getImage[https://a.example/1.png] getImage[https://a.example/2.png] \
         getImage[https://a.example/3.png]",
    );
    let error = bluesky
        .publish(&candidate)
        .await
        .expect_err("nothing survives, nothing to publish");

    assert_eq!(error.kind, PublishErrorKind::EmptyPost);
    assert_eq!(fetcher.attempts.load(Ordering::SeqCst), 3);
}

#[test]
fn test_default_fetcher_caps_images_below_one_megabyte() {
    assert_eq!(ReqwestImageFetcher::new().max_image_bytes(), 1_000_000);
}
