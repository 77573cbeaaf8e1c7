//! GameQuiz - board game recommendation quiz library
//!
//! This library drives a short quiz against a remote recommendation agent.
//! Every answer is sent to the agent, which replies with either the next
//! question or a ranked list of games.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `providers`: Agent client abstraction, HTTP transport and a scripted fake
//! - `quiz`: Quiz payload types and the quiz state machine
//! - `session`: Session ids and per-session answer history
//! - `render`: Terminal rendering of quiz screens
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//! - `commands`: Handlers for the CLI commands
//!
//! # Example
//!
//! ```no_run
//! use gamequiz::providers::HttpAgentClient;
//! use gamequiz::{Config, QuizMachine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let client = HttpAgentClient::new(config.agent.clone())?;
//!     let mut machine = QuizMachine::new(client, config.agent.id, &config.quiz.session_prefix)?;
//!     machine.start_quiz().await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod providers;
pub mod quiz;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use error::{GameQuizError, Result};
pub use quiz::{Phase, QuizMachine, QuizState};
pub use session::{generate_session_id, Session};
