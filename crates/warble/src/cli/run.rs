//! Bot execution command handler.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{info, warn};
use warble::{
    BotIdentity, PostLog, RunOutcome, SkipReason, WarbleConfig, WarbleResult, roster, run_bot,
};

/// Run every enabled bot once, in configuration order.
///
/// When the configuration file does not exist yet, a commented sample is
/// written in its place and the run ends without posting. Store failures
/// abort the whole run; per-bot problems are reported and skipped so one
/// bot cannot block the rest.
///
/// # Arguments
///
/// * `config_path` - Path to the TOML configuration file
pub async fn handle_run(config_path: &Path) -> WarbleResult<()> {
    let Some(config) = WarbleConfig::load_or_init(config_path)? else {
        return Ok(());
    };

    let bots = roster(&config);
    if bots.is_empty() {
        warn!("No enabled bots in configuration, nothing to run");
        return Ok(());
    }

    info!(bots = bots.len(), "Starting run");

    // ThreadRng is not Send, so selection draws from a seeded StdRng instead.
    let mut rng = StdRng::from_entropy();

    for bot in &bots {
        let log = PostLog::open(
            config.database(),
            bot.identity().clone(),
            bot.log_threshold(),
        )?;

        match run_bot(bot.platform(), &log, bot.source_file(), &mut rng).await? {
            RunOutcome::Published { receipt } => {
                info!(
                    identity = %bot.identity(),
                    post_id = ?receipt.post_id(),
                    "Published"
                );
            }
            RunOutcome::Skipped(reason) => report_skip(bot.identity(), &reason),
        }
    }

    Ok(())
}

/// Log why a bot's turn produced no post.
fn report_skip(identity: &BotIdentity, reason: &SkipReason) {
    match reason {
        SkipReason::MissingSource => {
            info!(%identity, "Post source was missing, template written");
        }
        SkipReason::Source(error) => {
            warn!(%identity, %error, "Post source unreadable");
        }
        SkipReason::Validation(error) => {
            warn!(%identity, %error, "Candidate pool rejected");
        }
        SkipReason::Publish(error) => {
            warn!(%identity, %error, "Publish failed");
        }
    }
}
