//! The Twitter [`Platform`] adapter.

use crate::twitter::{TwitterClient, TwitterCredentials};
use async_trait::async_trait;
use tracing::{info, instrument};
use warble_core::validate;
use warble_core::Candidate;
use warble_error::{PublishResult, ValidationResult};
use warble_interface::{Platform, PublishReceipt};

const TWITTER_TEMPLATE: &str = "\
# Place tweets here. There should be one tweet per line. If you have 'multi-line' tweets, write \"\\n\" where you want your line breaks to be.
# The bot will ignore any empty lines, as well as lines that are 'commented' out with a \"#\".
# It is up to you to ensure that each tweet is at maximum 280 characters long.
# Please have at minimum 12 tweets in this file.
# For the Free API tier, schedule the bot to run no more often than every 90 minutes.
";

/// Posting adapter for one Twitter account.
///
/// The character limit is configurable because it differs between API
/// tiers; the default configuration uses the standard 280.
pub struct Twitter {
    client: TwitterClient,
    log_threshold: u32,
    character_limit: usize,
}

impl Twitter {
    /// Creates an adapter for one account.
    pub fn new(
        credentials: TwitterCredentials,
        log_threshold: u32,
        character_limit: usize,
    ) -> Self {
        Self {
            client: TwitterClient::new(credentials),
            log_threshold,
            character_limit,
        }
    }
}

#[async_trait]
impl Platform for Twitter {
    fn schema_name(&self) -> &'static str {
        "Twitter"
    }

    fn default_template_text(&self) -> &'static str {
        TWITTER_TEMPLATE
    }

    fn validate(&self, candidates: &[Candidate]) -> ValidationResult<()> {
        validate::check_pool(candidates, self.log_threshold)?;
        validate::check_length(candidates, self.character_limit)?;
        Ok(())
    }

    #[instrument(skip(self, candidate))]
    async fn publish(&self, candidate: &Candidate) -> PublishResult<PublishReceipt> {
        let id = self.client.create_tweet(candidate.as_str()).await?;
        info!(tweet_id = %id, "Published tweet");
        Ok(PublishReceipt::new(Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warble_error::ValidationErrorKind;

    fn adapter(log_threshold: u32, character_limit: usize) -> Twitter {
        Twitter::new(
            TwitterCredentials::new("ck", "cs", "at", "ats"),
            log_threshold,
            character_limit,
        )
    }

    fn pool(texts: &[&str]) -> Vec<Candidate> {
        texts.iter().map(|text| Candidate::new(*text)).collect()
    }

    #[test]
    fn test_schema_name() {
        assert_eq!(adapter(11, 280).schema_name(), "Twitter");
    }

    #[test]
    fn test_template_parses_to_empty_pool() {
        let candidates = warble_core::source::parse(adapter(11, 280).default_template_text());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_validate_empty_pool_names_needed_count() {
        let error = adapter(11, 280).validate(&[]).expect_err("empty pool must fail");
        assert_eq!(error.kind, ValidationErrorKind::EmptyPool { needed: 12 });
    }

    #[test]
    fn test_validate_accepts_small_surviving_pool() {
        // Filtering happens upstream; any survivors are enough.
        assert!(adapter(11, 280).validate(&pool(&["one", "two"])).is_ok());
    }

    #[test]
    fn test_validate_uses_configured_limit() {
        let long = "x".repeat(281);
        let error = adapter(0, 280)
            .validate(&pool(&[&long]))
            .expect_err("281 chars must fail at 280");
        match error.kind {
            ValidationErrorKind::CharacterLimit { limit, .. } => assert_eq!(limit, 280),
            other => panic!("unexpected kind: {:?}", other),
        }

        // The same post passes at a higher configured limit.
        assert!(adapter(0, 500).validate(&pool(&[&long])).is_ok());
    }
}
