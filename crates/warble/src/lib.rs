//! Warble - scheduled social-media posting bot
//!
//! Warble posts one entry from a human-authored post file to a social
//! platform each time it runs, avoiding anything it posted recently. Point
//! a scheduler (cron, a systemd timer) at `warble run` and keep the post
//! files stocked; Warble does the rest.
//!
//! # How a run works
//!
//! For every enabled bot in `warble.toml`, sequentially:
//!
//! 1. Parse the bot's post-source file (one post per line, `#` comments,
//!    `\n` escapes for multi-line posts).
//! 2. Subtract the posts published within the bot's retention window.
//! 3. Validate the surviving pool against platform rules (character limits,
//!    image directive counts).
//! 4. Pick one candidate uniformly at random and publish it.
//! 5. On confirmed success, commit the text to the shared SQLite post log,
//!    evicting history beyond the retention window.
//!
//! A failed publish commits nothing, so the post stays eligible for the
//! next run.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use warble::{roster, run_bot, PostLog, WarbleConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WarbleConfig::from_file("warble.toml")?;
//!     let mut rng = StdRng::from_entropy();
//!
//!     for bot in roster(&config) {
//!         let log = PostLog::open(
//!             config.database(),
//!             bot.identity().clone(),
//!             bot.log_threshold(),
//!         )?;
//!         let outcome = run_bot(bot.platform(), &log, bot.source_file(), &mut rng).await?;
//!         println!("{}: {:?}", bot.identity(), outcome);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Warble is organized as a workspace with focused crates:
//!
//! - `warble_error` - Error types
//! - `warble_core` - Post parsing, validation rules, selection
//! - `warble_interface` - The `Platform` and `ImageFetcher` traits
//! - `warble_store` - The SQLite post log (recency tracking)
//! - `warble_social` - Bluesky and Twitter adapters
//! - `warble_bot` - Configuration and per-identity orchestration
//!
//! This crate (`warble`) re-exports everything and carries the binary.

pub use warble_bot::*;
pub use warble_core::*;
pub use warble_error::*;
pub use warble_interface::*;
pub use warble_social::*;
pub use warble_store::*;
