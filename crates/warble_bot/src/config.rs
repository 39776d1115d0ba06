//! Bot configuration loaded from `warble.toml`.
//!
//! One configuration file describes every bot the operator runs: a shared
//! SQLite database path plus one `[[bluesky]]` or `[[twitter]]` table per
//! account. A missing file is a bootstrap case, not an error: a commented
//! sample is written in its place.

use derive_getters::Getters;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use warble_error::{ConfigError, ConfigResult};
use warble_social::{BlueskyCredentials, TwitterCredentials};

/// Sample configuration written when none exists.
///
/// Ships with every bot disabled so a rerun before the operator fills in
/// credentials does nothing.
pub const SAMPLE_CONFIG: &str = r#"# Warble configuration.
#
# One [[bluesky]] or [[twitter]] table per bot account. Disabled bots are
# ignored, so fill in the credentials before enabling one.

# SQLite database holding the post log for every bot.
database = "warble.db"

[[bluesky]]
name = "my-bluesky-bot"
enabled = false
source_file = "posts/bluesky.txt"
# How many recent posts stay out of the selection pool. 0 disables recency
# tracking.
log_threshold = 0

[bluesky.credentials]
handle = "bot.bsky.social"
app_password = "xxxx-xxxx-xxxx-xxxx"

[[twitter]]
name = "my-twitter-bot"
enabled = false
source_file = "posts/twitter.txt"
# Keep at least log_threshold + 1 posts in the source file.
log_threshold = 11
character_limit = 280

[twitter.credentials]
consumer_key = ""
consumer_secret = ""
access_token = ""
access_token_secret = ""
"#;

/// Top-level configuration: one shared database plus any number of bots.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct WarbleConfig {
    /// SQLite database file holding every identity's post log.
    #[serde(default = "default_database")]
    database: PathBuf,
    /// Bluesky bots, in run order.
    #[serde(default)]
    bluesky: Vec<BlueskyBotConfig>,
    /// Twitter bots, in run order.
    #[serde(default)]
    twitter: Vec<TwitterBotConfig>,
}

/// One Bluesky bot account.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct BlueskyBotConfig {
    /// Bot name; one half of the recency partition key.
    name: String,
    /// Whether the bot runs at all.
    #[serde(default = "default_enabled")]
    enabled: bool,
    /// Path of the post-source file.
    source_file: PathBuf,
    /// Retention window; 0 disables recency tracking.
    #[serde(default)]
    log_threshold: u32,
    /// Login material for the account.
    credentials: BlueskyCredentials,
}

/// One Twitter bot account.
#[derive(Debug, Clone, Deserialize, Getters)]
pub struct TwitterBotConfig {
    /// Bot name; one half of the recency partition key.
    name: String,
    /// Whether the bot runs at all.
    #[serde(default = "default_enabled")]
    enabled: bool,
    /// Path of the post-source file.
    source_file: PathBuf,
    /// Retention window; 0 disables recency tracking.
    #[serde(default = "default_twitter_log_threshold")]
    log_threshold: u32,
    /// Platform character limit; tiers differ, the standard limit is 280.
    #[serde(default = "default_character_limit")]
    character_limit: usize,
    /// OAuth 1.0a material for the account.
    credentials: TwitterCredentials,
}

fn default_database() -> PathBuf {
    PathBuf::from("warble.db")
}

fn default_enabled() -> bool {
    true
}

fn default_twitter_log_threshold() -> u32 {
    11
}

fn default_character_limit() -> usize {
    280
}

impl WarbleConfig {
    /// Parse configuration from TOML text.
    pub fn parse(raw: &str) -> ConfigResult<Self> {
        toml::from_str(raw)
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            ConfigError::new(format!(
                "Invalid configuration in {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load configuration, bootstrapping a sample file when none exists.
    ///
    /// Returns `None` after writing [`SAMPLE_CONFIG`], so the caller can tell
    /// the operator to fill it in and exit cleanly. A present but malformed
    /// file is a hard error.
    pub fn load_or_init(path: impl AsRef<Path>) -> ConfigResult<Option<Self>> {
        let path = path.as_ref();
        if path.exists() {
            return Ok(Some(Self::from_file(path)?));
        }
        std::fs::write(path, SAMPLE_CONFIG).map_err(|e| {
            ConfigError::new(format!(
                "Failed to write sample configuration {}: {}",
                path.display(),
                e
            ))
        })?;
        info!(
            path = %path.display(),
            "Wrote a sample configuration; fill in credentials before the next run"
        );
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = WarbleConfig::parse("").expect("empty config is valid");
        assert_eq!(config.database(), &PathBuf::from("warble.db"));
        assert!(config.bluesky().is_empty());
        assert!(config.twitter().is_empty());
    }

    #[test]
    fn test_bluesky_bot_defaults() {
        let raw = r#"
            [[bluesky]]
            name = "art"
            source_file = "posts/art.txt"

            [bluesky.credentials]
            handle = "art.bsky.social"
            app_password = "pw"
        "#;
        let config = WarbleConfig::parse(raw).expect("valid config");
        let bot = &config.bluesky()[0];
        assert_eq!(bot.name(), "art");
        assert!(*bot.enabled());
        assert_eq!(*bot.log_threshold(), 0);
        assert_eq!(bot.credentials().handle(), "art.bsky.social");
    }

    #[test]
    fn test_twitter_bot_defaults() {
        let raw = r#"
            [[twitter]]
            name = "news"
            source_file = "posts/news.txt"

            [twitter.credentials]
            consumer_key = "ck"
            consumer_secret = "cs"
            access_token = "at"
            access_token_secret = "ats"
        "#;
        let config = WarbleConfig::parse(raw).expect("valid config");
        let bot = &config.twitter()[0];
        assert_eq!(*bot.log_threshold(), 11);
        assert_eq!(*bot.character_limit(), 280);
        assert!(*bot.enabled());
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let raw = r#"
            database = "state/posts.db"

            [[twitter]]
            name = "news"
            enabled = false
            source_file = "posts/news.txt"
            log_threshold = 30
            character_limit = 500

            [twitter.credentials]
            consumer_key = "ck"
            consumer_secret = "cs"
            access_token = "at"
            access_token_secret = "ats"
        "#;
        let config = WarbleConfig::parse(raw).expect("valid config");
        assert_eq!(config.database(), &PathBuf::from("state/posts.db"));
        let bot = &config.twitter()[0];
        assert!(!*bot.enabled());
        assert_eq!(*bot.log_threshold(), 30);
        assert_eq!(*bot.character_limit(), 500);
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let raw = r#"
            [[bluesky]]
            name = "art"
            source_file = "posts/art.txt"
        "#;
        let error = WarbleConfig::parse(raw).expect_err("credentials are required");
        assert!(error.message.contains("Invalid configuration"));
    }

    #[test]
    fn test_sample_config_parses_with_every_bot_disabled() {
        let config = WarbleConfig::parse(SAMPLE_CONFIG).expect("sample must stay valid");
        assert_eq!(config.bluesky().len(), 1);
        assert_eq!(config.twitter().len(), 1);
        assert!(!*config.bluesky()[0].enabled());
        assert!(!*config.twitter()[0].enabled());
    }
}
