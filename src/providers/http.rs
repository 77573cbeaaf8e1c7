//! HTTP agent client for GameQuiz
//!
//! This module implements [`AgentClient`] over a JSON HTTP endpoint. Each
//! call is a single POST; the response body is the result envelope.

use crate::config::AgentConfig;
use crate::error::{GameQuizError, Result};
use crate::providers::{AgentClient, AgentContext, AgentEnvelope};

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Agent client that talks to the recommendation agent over HTTP
///
/// # Examples
///
/// ```no_run
/// use gamequiz::config::AgentConfig;
/// use gamequiz::providers::{AgentClient, AgentContext, HttpAgentClient};
///
/// # async fn example() -> gamequiz::error::Result<()> {
/// let client = HttpAgentClient::new(AgentConfig::default())?;
/// let envelope = client
///     .call("start quiz", "6984dfd4ee065bca253754c6", &AgentContext::new("game-quiz-1-x"))
///     .await?;
/// println!("success: {}", envelope.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpAgentClient {
    client: Client,
    config: AgentConfig,
}

/// Request body for an agent call
#[derive(Debug, Serialize)]
struct AgentRequest<'a> {
    message: &'a str,
    agent_id: &'a str,
    context: &'a AgentContext,
}

impl HttpAgentClient {
    /// Create a new HTTP agent client
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Config` if the HTTP client cannot be built
    pub fn new(config: AgentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("gamequiz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GameQuizError::Config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized HTTP agent client: endpoint={}, timeout={}s",
            config.endpoint,
            config.timeout_seconds
        );

        Ok(Self { client, config })
    }

    /// The endpoint calls are posted to
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl AgentClient for HttpAgentClient {
    async fn call(
        &self,
        input: &str,
        agent_id: &str,
        context: &AgentContext,
    ) -> Result<AgentEnvelope> {
        let request = AgentRequest {
            message: input,
            agent_id,
            context,
        };

        tracing::debug!(
            "Sending agent request: agent_id={}, session_id={}, input={:?}",
            agent_id,
            context.session_id,
            input
        );

        let mut builder = self.client.post(&self.config.endpoint).json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Agent request failed: {}", e);
            GameQuizError::Transport(format!("Agent request failed: {}", e))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read agent response body: {}", e);
            GameQuizError::Transport(format!("Failed to read agent response: {}", e))
        })?;

        if !status.is_success() {
            tracing::warn!("Agent returned HTTP {}: {}", status, body);
            let fallback = format!("Agent returned HTTP {}", status);
            let envelope = match serde_json::from_str::<AgentEnvelope>(&body) {
                Ok(mut envelope) => {
                    envelope.success = false;
                    if envelope.failure_message().is_none() {
                        envelope.response.message = Some(fallback);
                    }
                    envelope.normalize();
                    envelope
                }
                Err(_) => AgentEnvelope::failure(Some(fallback)),
            };
            return Ok(envelope);
        }

        let mut envelope: AgentEnvelope = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse agent response: {}", e);
            GameQuizError::Transport(format!("Failed to parse agent response: {}", e))
        })?;
        envelope.normalize();

        tracing::debug!(
            "Agent response: success={}, status={}, has_result={}",
            envelope.success,
            envelope.response.status,
            envelope.response.result.is_some()
        );

        Ok(envelope)
    }
}
