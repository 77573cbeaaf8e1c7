//! Error types for GameQuiz
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for GameQuiz operations
///
/// Covers configuration loading, agent calls, response decoding and
/// intents that the quiz state machine refuses to accept.
#[derive(Error, Debug)]
pub enum GameQuizError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// The agent call itself failed (connection refused, timeout, bad body)
    #[error("{0}")]
    Transport(String),

    /// The agent answered but reported an unsuccessful outcome
    #[error("Agent error: {0}")]
    Agent(String),

    /// The agent reported success but the result could not be decoded
    #[error("Unexpected response from agent: {0}")]
    UnexpectedResponse(String),

    /// The intent is not valid in the current quiz phase
    #[error("Cannot {intent} while in {phase} state")]
    InvalidIntent {
        /// Name of the rejected intent
        intent: &'static str,
        /// Phase the machine was in when the intent arrived
        phase: String,
    },

    /// An agent call is already in flight
    #[error("An agent call is already in progress")]
    Busy,

    /// The submitted answer is not one of the displayed options
    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Line editor errors from the interactive loop
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for GameQuiz operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = GameQuizError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_transport_error_display_is_bare_message() {
        let error = GameQuizError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "connection refused");
    }

    #[test]
    fn test_agent_error_display() {
        let error = GameQuizError::Agent("quota exceeded".to_string());
        assert_eq!(error.to_string(), "Agent error: quota exceeded");
    }

    #[test]
    fn test_unexpected_response_display() {
        let error = GameQuizError::UnexpectedResponse("unknown quiz_status".to_string());
        assert!(error.to_string().contains("Unexpected response from agent"));
    }

    #[test]
    fn test_invalid_intent_display() {
        let error = GameQuizError::InvalidIntent {
            intent: "retake",
            phase: "quiz".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot retake while in quiz state");
    }

    #[test]
    fn test_busy_display() {
        assert_eq!(
            GameQuizError::Busy.to_string(),
            "An agent call is already in progress"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: GameQuizError = io_error.into();
        assert!(matches!(error, GameQuizError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: GameQuizError = json_error.into();
        assert!(matches!(error, GameQuizError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: GameQuizError = yaml_error.into();
        assert!(matches!(error, GameQuizError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GameQuizError>();
    }
}
