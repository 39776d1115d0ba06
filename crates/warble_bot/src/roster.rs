//! Turning configuration into runnable bots.

use crate::config::WarbleConfig;
use std::path::{Path, PathBuf};
use tracing::debug;
use warble_core::BotIdentity;
use warble_interface::Platform;
use warble_social::{Bluesky, Twitter};

/// One enabled bot, assembled and ready to run.
pub struct ConfiguredBot {
    identity: BotIdentity,
    source_file: PathBuf,
    log_threshold: u32,
    platform: Box<dyn Platform>,
}

impl ConfiguredBot {
    /// Identity of the bot, naming its recency partition.
    pub fn identity(&self) -> &BotIdentity {
        &self.identity
    }

    /// Path of the bot's post-source file.
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// Retention window for the identity.
    pub fn log_threshold(&self) -> u32 {
        self.log_threshold
    }

    /// The platform adapter.
    pub fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }
}

/// Build the run roster from configuration.
///
/// Bluesky bots come first, then Twitter bots, each in configuration order;
/// disabled bots are left out with a debug log.
pub fn roster(config: &WarbleConfig) -> Vec<ConfiguredBot> {
    let mut bots = Vec::new();

    for bot in config.bluesky() {
        if !bot.enabled() {
            debug!(name = %bot.name(), "Skipping disabled Bluesky bot");
            continue;
        }
        let platform = Bluesky::new(bot.credentials().clone(), *bot.log_threshold());
        bots.push(ConfiguredBot {
            identity: BotIdentity::new(bot.name().clone(), platform.schema_name()),
            source_file: bot.source_file().clone(),
            log_threshold: *bot.log_threshold(),
            platform: Box::new(platform),
        });
    }

    for bot in config.twitter() {
        if !bot.enabled() {
            debug!(name = %bot.name(), "Skipping disabled Twitter bot");
            continue;
        }
        let platform = Twitter::new(
            bot.credentials().clone(),
            *bot.log_threshold(),
            *bot.character_limit(),
        );
        bots.push(ConfiguredBot {
            identity: BotIdentity::new(bot.name().clone(), platform.schema_name()),
            source_file: bot.source_file().clone(),
            log_threshold: *bot.log_threshold(),
            platform: Box::new(platform),
        });
    }

    bots
}
