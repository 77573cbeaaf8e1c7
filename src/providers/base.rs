//! Base agent client trait and the result envelope
//!
//! This module defines the [`AgentClient`] trait that every transport to the
//! recommendation agent implements, along with the request context and the
//! normalized success/failure envelope the agent returns.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status string the agent uses for a successful business outcome
pub const STATUS_SUCCESS: &str = "success";

/// Conversational context sent with every agent call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentContext {
    /// Session id correlating the call with one quiz attempt
    pub session_id: String,
}

impl AgentContext {
    /// Creates a context for the given session
    ///
    /// # Examples
    ///
    /// ```
    /// use gamequiz::providers::AgentContext;
    ///
    /// let ctx = AgentContext::new("game-quiz-1-abc");
    /// assert_eq!(ctx.session_id, "game-quiz-1-abc");
    /// ```
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

/// Business-level response carried inside the envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentResponse {
    /// `success` or any other status string
    pub status: String,
    /// Optional human-readable message, usually set on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Polymorphic result payload, decoded by the quiz layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

/// Normalized envelope returned by every agent call
///
/// `success` reports transport-level success and is independent of the
/// business outcome in `response.status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentEnvelope {
    /// Transport-level success flag
    pub success: bool,
    /// Business response
    pub response: AgentResponse,
}

impl AgentEnvelope {
    /// Creates a successful envelope carrying a result payload
    ///
    /// # Examples
    ///
    /// ```
    /// use gamequiz::providers::AgentEnvelope;
    /// use serde_json::json;
    ///
    /// let env = AgentEnvelope::success(json!({"quiz_status": "in_progress"}));
    /// assert!(env.is_success());
    /// ```
    pub fn success(result: Value) -> Self {
        Self {
            success: true,
            response: AgentResponse {
                status: STATUS_SUCCESS.to_string(),
                message: None,
                result: Some(result),
            },
        }
    }

    /// Creates a failed envelope with an optional message
    ///
    /// # Examples
    ///
    /// ```
    /// use gamequiz::providers::AgentEnvelope;
    ///
    /// let env = AgentEnvelope::failure(Some("agent overloaded".to_string()));
    /// assert!(!env.is_success());
    /// assert_eq!(env.failure_message(), Some("agent overloaded"));
    /// ```
    pub fn failure(message: Option<String>) -> Self {
        Self {
            success: false,
            response: AgentResponse {
                status: "error".to_string(),
                message,
                result: None,
            },
        }
    }

    /// True when both the transport and the business status report success
    pub fn is_success(&self) -> bool {
        self.success && self.response.status == STATUS_SUCCESS
    }

    /// The agent-provided message, ignoring empty strings
    pub fn failure_message(&self) -> Option<&str> {
        self.response
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    /// Normalize the result payload in place
    ///
    /// Some agent deployments return the result as a JSON-encoded string.
    /// When the string parses as JSON it is replaced by the parsed value;
    /// otherwise it is left untouched and will fail decoding later.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamequiz::providers::AgentEnvelope;
    /// use serde_json::json;
    ///
    /// let mut env = AgentEnvelope::success(json!("{\"quiz_status\":\"complete\"}"));
    /// env.normalize();
    /// assert_eq!(env.response.result, Some(json!({"quiz_status": "complete"})));
    /// ```
    pub fn normalize(&mut self) {
        if let Some(Value::String(raw)) = &self.response.result {
            match serde_json::from_str::<Value>(raw) {
                Ok(parsed) => self.response.result = Some(parsed),
                Err(e) => tracing::debug!("Result string is not JSON, leaving as-is: {}", e),
            }
        }
    }
}

/// Transport to the recommendation agent
///
/// Implementations perform exactly one call per invocation and never retry.
/// An `Err` return means the call itself failed (transport failure); any
/// answer from the agent, successful or not, is returned as an envelope.
///
/// # Examples
///
/// ```
/// use gamequiz::providers::{AgentClient, AgentContext, AgentEnvelope};
/// use gamequiz::error::Result;
/// use async_trait::async_trait;
///
/// struct EchoClient;
///
/// #[async_trait]
/// impl AgentClient for EchoClient {
///     async fn call(
///         &self,
///         input: &str,
///         _agent_id: &str,
///         _context: &AgentContext,
///     ) -> Result<AgentEnvelope> {
///         Ok(AgentEnvelope::failure(Some(input.to_string())))
///     }
/// }
/// ```
#[async_trait]
pub trait AgentClient: Send + Sync {
    /// Send free-text input to the agent
    ///
    /// # Arguments
    ///
    /// * `input` - Text forwarded to the agent (e.g. `start quiz` or an option)
    /// * `agent_id` - Identifier of the target agent
    /// * `context` - Conversational context carrying the session id
    ///
    /// # Errors
    ///
    /// Returns error if the call could not be completed
    async fn call(
        &self,
        input: &str,
        agent_id: &str,
        context: &AgentContext,
    ) -> Result<AgentEnvelope>;
}
