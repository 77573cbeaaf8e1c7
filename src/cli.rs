//! Command-line interface definition for GameQuiz
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for playing the quiz and probing the agent.

use clap::{Parser, Subcommand};

/// GameQuiz - find board games through a short quiz
///
/// Answers are sent to a recommendation agent which replies with the next
/// question or a ranked list of games.
#[derive(Parser, Debug, Clone)]
#[command(name = "gamequiz")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the configured agent id
    #[arg(long)]
    pub agent_id: Option<String>,

    /// Override the configured agent endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for GameQuiz
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Play the quiz interactively
    Play,

    /// Send one message to the agent and print its envelope
    Ask {
        /// Text to send
        #[arg(short, long)]
        message: String,

        /// Session id to reuse (a new one is generated when omitted)
        #[arg(short, long)]
        session: Option<String>,

        /// Print the raw envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a freshly generated session id
    SessionId,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
