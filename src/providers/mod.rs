//! Agent client module for GameQuiz
//!
//! This module contains the agent call abstraction, the HTTP implementation
//! used at runtime, and a scripted in-process client for tests.

pub mod base;
pub mod fake;
pub mod http;

pub use base::{AgentClient, AgentContext, AgentEnvelope, AgentResponse, STATUS_SUCCESS};
pub use fake::ScriptedAgentClient;
pub use http::HttpAgentClient;

use crate::config::AgentConfig;
use crate::error::Result;

/// Create the runtime agent client from configuration
///
/// # Errors
///
/// Returns error if the underlying HTTP client cannot be initialized
///
/// # Examples
///
/// ```
/// use gamequiz::config::AgentConfig;
/// use gamequiz::providers::create_agent_client;
///
/// let client = create_agent_client(&AgentConfig::default());
/// assert!(client.is_ok());
/// ```
pub fn create_agent_client(config: &AgentConfig) -> Result<Box<dyn AgentClient>> {
    Ok(Box::new(HttpAgentClient::new(config.clone())?))
}
