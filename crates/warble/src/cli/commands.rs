//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Warble - scheduled social-media posting bot
#[derive(Parser, Debug)]
#[command(name = "warble")]
#[command(about = "Scheduled social-media posting bot for Bluesky and Twitter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every enabled bot once, in configuration order
    Run {
        /// Path to the configuration file
        #[arg(long, default_value = "warble.toml")]
        config: PathBuf,
    },

    /// Validate configuration and post-source files without publishing
    Check {
        /// Path to the configuration file
        #[arg(long, default_value = "warble.toml")]
        config: PathBuf,
    },

    /// Show an identity's recent post history, newest first
    History {
        /// Path to the configuration file
        #[arg(long, default_value = "warble.toml")]
        config: PathBuf,

        /// Bot name
        #[arg(long)]
        name: String,

        /// Platform the bot posts to
        #[arg(long)]
        platform: PlatformArg,

        /// Maximum number of rows to display
        #[arg(long, default_value = "20")]
        limit: i64,
    },
}

/// Platform selector for history lookups
#[derive(ValueEnum, Clone, Debug)]
pub enum PlatformArg {
    /// Bluesky bots
    Bluesky,
    /// Twitter bots
    Twitter,
}

impl PlatformArg {
    /// Schema name the platform writes into the post log.
    pub fn schema_name(self) -> &'static str {
        match self {
            Self::Bluesky => "Bluesky",
            Self::Twitter => "Twitter",
        }
    }
}
