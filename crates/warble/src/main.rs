//! Warble CLI binary.
//!
//! This binary provides command-line access to the posting pipeline:
//! - Run every enabled bot once
//! - Check configuration and post-source files without publishing
//! - Inspect an identity's recent post history

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_check, handle_history, handle_run};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    dotenvy::dotenv().ok();

    // Execute the requested command
    match cli.command {
        Commands::Run { config } => {
            handle_run(&config).await?;
        }

        Commands::Check { config } => {
            handle_check(&config).await?;
        }

        Commands::History {
            config,
            name,
            platform,
            limit,
        } => {
            handle_history(&config, &name, platform, limit).await?;
        }
    }

    Ok(())
}
