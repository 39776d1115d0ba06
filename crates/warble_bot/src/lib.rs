//! Configuration and orchestration for the Warble posting bot.
//!
//! This crate ties the rest of the workspace together: [`config`] loads the
//! operator's `warble.toml`, [`roster`] turns it into runnable bots, and
//! [`posting`] drives one identity through a full posting run against its
//! platform adapter and post log.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod posting;
pub mod roster;

pub use config::{BlueskyBotConfig, TwitterBotConfig, WarbleConfig, SAMPLE_CONFIG};
pub use posting::{check_bot, run_bot, CheckOutcome, RunOutcome, SkipReason};
pub use roster::{roster, ConfiguredBot};
