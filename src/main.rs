//! GameQuiz - board game recommendation quiz CLI
//!
//! Main entry point for the GameQuiz terminal client.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gamequiz::cli::{Cli, Commands};
use gamequiz::commands;
use gamequiz::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Play => {
            tracing::info!("Starting interactive quiz mode");
            commands::play::run_play(config).await?;
            Ok(())
        }
        Commands::Ask {
            message,
            session,
            json,
        } => {
            if let Some(s) = &session {
                tracing::debug!("Reusing session: {}", s);
            }
            commands::ask::run_ask(&config, message, session, json).await?;
            Ok(())
        }
        Commands::SessionId => {
            commands::session_id::print_session_id(&config);
            Ok(())
        }
    }
}

/// Initialize tracing subscriber
///
/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "gamequiz=debug"
    } else {
        "gamequiz=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
