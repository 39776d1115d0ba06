//! The Bluesky [`Platform`] adapter.

use crate::bluesky::json_models::{EmbeddedImage, ImagesEmbed};
use crate::bluesky::{directive, BlueskyClient, BlueskyCredentials};
use crate::fetcher::ReqwestImageFetcher;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use warble_core::validate;
use warble_core::Candidate;
use warble_error::{PublishError, PublishErrorKind, PublishResult, ValidationResult};
use warble_interface::{FetchedImage, ImageFetcher, Platform, PublishReceipt};

/// Hard character limit for a Bluesky post.
pub const BLUESKY_CHARACTER_LIMIT: usize = 300;

/// Most images one post may attach.
pub const MAX_IMAGES_PER_POST: usize = 4;

const BLUESKY_TEMPLATE: &str = "\
# Place possible posts for the bot to select from here. There should be one per line. If you have 'multi-line' posts, write \"\\n\" where you want your line breaks to be.
# The bot will ignore any empty lines, as well as lines that are 'commented' out with a \"#\".
# It is up to you to ensure that each post is at maximum 300 characters long.
# You can attach up to 4 images per post with getImage[https://example.com/picture.png] directives.
";

/// Posting adapter for one Bluesky account.
pub struct Bluesky {
    client: BlueskyClient,
    fetcher: Arc<dyn ImageFetcher>,
    log_threshold: u32,
}

impl Bluesky {
    /// Creates an adapter that fetches images over HTTP.
    pub fn new(credentials: BlueskyCredentials, log_threshold: u32) -> Self {
        Self::with_fetcher(
            credentials,
            log_threshold,
            Arc::new(ReqwestImageFetcher::new()),
        )
    }

    /// Creates an adapter with a caller-supplied image fetcher.
    pub fn with_fetcher(
        credentials: BlueskyCredentials,
        log_threshold: u32,
        fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        Self {
            client: BlueskyClient::new(credentials),
            fetcher,
            log_threshold,
        }
    }

    /// Fetches every directive URL, keeping the attachments that survive.
    ///
    /// A failed or oversized fetch drops that attachment, not the post.
    async fn gather_images(&self, urls: &[String]) -> Vec<FetchedImage> {
        let mut images = Vec::new();
        for url in urls {
            match self.fetcher.fetch(url).await {
                Ok(image) => images.push(image),
                Err(e) => warn!(url = %url, error = %e, "Dropping image attachment"),
            }
        }
        images
    }
}

#[async_trait]
impl Platform for Bluesky {
    fn schema_name(&self) -> &'static str {
        "Bluesky"
    }

    fn default_template_text(&self) -> &'static str {
        BLUESKY_TEMPLATE
    }

    fn validate(&self, candidates: &[Candidate]) -> ValidationResult<()> {
        validate::check_pool(candidates, self.log_threshold)?;
        validate::check_image_count(candidates, MAX_IMAGES_PER_POST, |candidate| {
            directive::count(candidate.as_str())
        })?;
        validate::check_length(candidates, BLUESKY_CHARACTER_LIMIT)?;
        Ok(())
    }

    #[instrument(skip(self, candidate))]
    async fn publish(&self, candidate: &Candidate) -> PublishResult<PublishReceipt> {
        let urls = directive::urls(candidate.as_str());
        let text = directive::strip(candidate.as_str());
        let images = self.gather_images(&urls).await;

        match post_mode(images.len(), &text) {
            PostMode::Rejected => Err(PublishError::new(PublishErrorKind::EmptyPost)),
            PostMode::TextOnly => {
                let session = self.client.create_session().await?;
                let uri = self.client.create_post(&session, &text, None).await?;
                info!(uri = %uri, "Published text post to Bluesky");
                Ok(PublishReceipt::new(Some(uri)))
            }
            PostMode::WithImages => {
                let session = self.client.create_session().await?;
                let mut embedded = Vec::with_capacity(images.len());
                for image in &images {
                    let blob = self.client.upload_blob(&session, image.bytes()).await?;
                    embedded.push(EmbeddedImage {
                        image: blob,
                        alt: String::new(),
                    });
                }
                let embed = ImagesEmbed::new(embedded);
                let uri = self.client.create_post(&session, &text, Some(embed)).await?;
                info!(uri = %uri, images = images.len(), "Published image post to Bluesky");
                Ok(PublishReceipt::new(Some(uri)))
            }
        }
    }
}

/// What a candidate publishes as once attachments have been gathered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostMode {
    /// No images survived and no text remains; nothing to publish.
    Rejected,
    /// No images survived but text remains; publish the text alone.
    TextOnly,
    /// At least one image survived.
    WithImages,
}

fn post_mode(surviving_images: usize, stripped_text: &str) -> PostMode {
    if surviving_images > 0 {
        PostMode::WithImages
    } else if stripped_text.is_empty() {
        PostMode::Rejected
    } else {
        PostMode::TextOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warble_error::ValidationErrorKind;

    fn adapter(log_threshold: u32) -> Bluesky {
        Bluesky::new(
            BlueskyCredentials::new("bot.bsky.social", "app-password"),
            log_threshold,
        )
    }

    fn pool(texts: &[&str]) -> Vec<Candidate> {
        texts.iter().map(|text| Candidate::new(*text)).collect()
    }

    #[test]
    fn test_schema_name() {
        assert_eq!(adapter(0).schema_name(), "Bluesky");
    }

    #[test]
    fn test_template_parses_to_empty_pool() {
        let candidates = warble_core::source::parse(adapter(0).default_template_text());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_validate_accepts_reasonable_pool() {
        let candidates = pool(&["short post", "another getImage[https://a.example/1.png]"]);
        assert!(adapter(0).validate(&candidates).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_pool_with_needed_count() {
        let error = adapter(3).validate(&[]).expect_err("empty pool must fail");
        assert_eq!(error.kind, ValidationErrorKind::EmptyPool { needed: 4 });
    }

    #[test]
    fn test_validate_rejects_over_limit_post() {
        let long = "x".repeat(301);
        let error = adapter(0)
            .validate(&pool(&[&long, "fine"]))
            .expect_err("over-limit post must fail");
        match error.kind {
            ValidationErrorKind::CharacterLimit { limit, offenders } => {
                assert_eq!(limit, 300);
                assert_eq!(offenders.len(), 1);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_exactly_limit_chars() {
        let exact = "x".repeat(300);
        assert!(adapter(0).validate(&pool(&[&exact])).is_ok());
    }

    #[test]
    fn test_validate_rejects_five_image_directives() {
        let five = "a getImage[https://e/1] getImage[https://e/2] getImage[https://e/3] \
                    getImage[https://e/4] getImage[https://e/5]";
        let error = adapter(0)
            .validate(&pool(&[five]))
            .expect_err("five directives must fail");
        match error.kind {
            ValidationErrorKind::ImageLimit { max, offenders } => {
                assert_eq!(max, 4);
                assert_eq!(offenders.len(), 1);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_validate_accepts_four_image_directives() {
        let four = "a getImage[https://e/1] getImage[https://e/2] getImage[https://e/3] \
                    getImage[https://e/4]";
        assert!(adapter(0).validate(&pool(&[four])).is_ok());
    }

    #[test]
    fn test_post_mode_nothing_left_is_rejected() {
        assert_eq!(post_mode(0, ""), PostMode::Rejected);
    }

    #[test]
    fn test_post_mode_text_survives_dropped_images() {
        // Every attachment failed or was oversized, but prose remains.
        assert_eq!(post_mode(0, "still worth posting"), PostMode::TextOnly);
    }

    #[test]
    fn test_post_mode_any_image_attaches() {
        assert_eq!(post_mode(1, "caption"), PostMode::WithImages);
        assert_eq!(post_mode(4, ""), PostMode::WithImages);
    }
}
