//! Post history query command handler.

use std::path::Path;
use warble::{BotIdentity, PostLog, WarbleConfig, WarbleResult};

use super::PlatformArg;

/// Print an identity's retained post-log rows, newest first.
///
/// The identity does not have to appear in the configuration: rows written by
/// a since-removed bot stay queryable until retention evicts them. Only the
/// database path is taken from the config file.
///
/// # Arguments
///
/// * `config_path` - Path to the TOML configuration file
/// * `name` - Bot name half of the identity
/// * `platform` - Platform half of the identity
/// * `limit` - Maximum number of rows to print
pub async fn handle_history(
    config_path: &Path,
    name: &str,
    platform: PlatformArg,
    limit: i64,
) -> WarbleResult<()> {
    let config = WarbleConfig::from_file(config_path)?;
    let identity = BotIdentity::new(name, platform.schema_name());

    // Threshold 0 is fine here, recent_records ignores it.
    let log = PostLog::open(config.database(), identity.clone(), 0)?;
    let records = log.recent_records(limit).await?;

    if records.is_empty() {
        println!("No posts logged for {}", identity);
        return Ok(());
    }

    println!("Recent posts for {}:", identity);
    println!();
    for record in &records {
        println!("{}  {}  {}", record.id, record.posted_at, record.text);
    }
    println!();

    Ok(())
}
