//! Configuration dry-run command handler.

use std::path::Path;
use tracing::{info, warn};
use warble::{CheckOutcome, PostLog, WarbleConfig, WarbleResult, check_bot, roster};

/// Read, filter, and validate every enabled bot without publishing.
///
/// Nothing is written: no template bootstrap, no post-log commit, no network
/// traffic. Each bot's outcome is reported individually so a cron deployment
/// can be vetted before its first live run.
///
/// # Arguments
///
/// * `config_path` - Path to the TOML configuration file
pub async fn handle_check(config_path: &Path) -> WarbleResult<()> {
    let config = WarbleConfig::from_file(config_path)?;

    let bots = roster(&config);
    if bots.is_empty() {
        warn!("No enabled bots in configuration, nothing to check");
        return Ok(());
    }

    let mut ready = 0;
    let mut problems = 0;

    for bot in &bots {
        let log = PostLog::open(
            config.database(),
            bot.identity().clone(),
            bot.log_threshold(),
        )?;

        match check_bot(bot.platform(), &log, bot.source_file()).await? {
            CheckOutcome::Ready { pool_size } => {
                info!(identity = %bot.identity(), pool_size, "Ready to post");
                ready += 1;
            }
            CheckOutcome::MissingSource => {
                warn!(
                    identity = %bot.identity(),
                    source = %bot.source_file().display(),
                    "Post source missing, run will write a starter template"
                );
                problems += 1;
            }
            CheckOutcome::Unreadable(error) => {
                warn!(identity = %bot.identity(), %error, "Post source unreadable");
                problems += 1;
            }
            CheckOutcome::Invalid(error) => {
                warn!(identity = %bot.identity(), %error, "Candidate pool rejected");
                problems += 1;
            }
        }
    }

    println!("\nCheck Summary:");
    println!("==============");
    println!("Bots checked: {}", bots.len());
    println!("Ready: {}", ready);
    println!("Problems: {}", problems);
    println!();

    Ok(())
}
