//! Configuration management for GameQuiz
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{GameQuizError, Result};
use crate::session::DEFAULT_SESSION_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identifier of the recommendation agent the quiz talks to
pub const DEFAULT_AGENT_ID: &str = "6984dfd4ee065bca253754c6";

/// Main configuration structure for GameQuiz
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Agent connection settings
    #[serde(default)]
    pub agent: AgentConfig,
    /// Quiz behavior settings
    #[serde(default)]
    pub quiz: QuizConfig,
}

/// Agent connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Agent identifier sent with every call
    #[serde(default = "default_agent_id")]
    pub id: String,

    /// HTTP endpoint accepting agent calls
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Optional bearer token for the endpoint
    #[serde(default)]
    pub api_key: Option<String>,

    /// Timeout for a single agent call (seconds)
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_agent_id() -> String {
    DEFAULT_AGENT_ID.to_string()
}

fn default_endpoint() -> String {
    "http://localhost:8080/api/agent".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            id: default_agent_id(),
            endpoint: default_endpoint(),
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

/// Quiz behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Prefix for generated session ids
    #[serde(default = "default_session_prefix")]
    pub session_prefix: String,

    /// Question count shown when the agent does not report one
    #[serde(default = "default_total_questions")]
    pub default_total_questions: u32,
}

fn default_session_prefix() -> String {
    DEFAULT_SESSION_PREFIX.to_string()
}

fn default_total_questions() -> u32 {
    6
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            session_prefix: default_session_prefix(),
            default_total_questions: default_total_questions(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GameQuizError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| GameQuizError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(agent_id) = std::env::var("GAMEQUIZ_AGENT_ID") {
            self.agent.id = agent_id;
        }

        if let Ok(endpoint) = std::env::var("GAMEQUIZ_AGENT_ENDPOINT") {
            self.agent.endpoint = endpoint;
        }

        if let Ok(api_key) = std::env::var("GAMEQUIZ_API_KEY") {
            self.agent.api_key = Some(api_key);
        }

        if let Ok(timeout) = std::env::var("GAMEQUIZ_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.agent.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid GAMEQUIZ_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(prefix) = std::env::var("GAMEQUIZ_SESSION_PREFIX") {
            self.quiz.session_prefix = prefix;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(agent_id) = &cli.agent_id {
            tracing::debug!("Agent id overridden from CLI: {}", agent_id);
            self.agent.id = agent_id.clone();
        }

        if let Some(endpoint) = &cli.endpoint {
            tracing::debug!("Agent endpoint overridden from CLI: {}", endpoint);
            self.agent.endpoint = endpoint.clone();
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.agent.id.trim().is_empty() {
            return Err(GameQuizError::Config("agent.id cannot be empty".to_string()).into());
        }

        let endpoint = url::Url::parse(&self.agent.endpoint).map_err(|e| {
            GameQuizError::Config(format!(
                "agent.endpoint is not a valid URL ({}): {}",
                self.agent.endpoint, e
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(GameQuizError::Config(format!(
                "agent.endpoint must use http or https, got: {}",
                endpoint.scheme()
            ))
            .into());
        }

        if self.agent.timeout_seconds == 0 {
            return Err(GameQuizError::Config(
                "agent.timeout_seconds must be greater than 0".to_string(),
            )
            .into());
        }

        if self.agent.timeout_seconds > 600 {
            return Err(GameQuizError::Config(
                "agent.timeout_seconds must be less than or equal to 600".to_string(),
            )
            .into());
        }

        if self.quiz.session_prefix.is_empty()
            || self.quiz.session_prefix.chars().any(char::is_whitespace)
        {
            return Err(GameQuizError::Config(
                "quiz.session_prefix must be non-empty and contain no whitespace".to_string(),
            )
            .into());
        }

        if self.quiz.default_total_questions == 0 {
            return Err(GameQuizError::Config(
                "quiz.default_total_questions must be greater than 0".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
