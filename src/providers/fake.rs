//! In-process scripted agent client for unit and integration tests
//!
//! [`ScriptedAgentClient`] replays a queue of canned replies (envelopes or
//! transport failures) in order and records every call it receives, so tests
//! can drive the quiz state machine without a network.
//!
//! Clones share the same script and call log, which lets a test keep one
//! handle for assertions while the machine owns another.
//!
//! # Example
//!
//! ```
//! use gamequiz::providers::fake::ScriptedAgentClient;
//! use gamequiz::providers::{AgentClient, AgentContext};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = ScriptedAgentClient::new()
//!     .with_result(json!({"quiz_status": "complete", "recommendations": []}));
//!
//! let env = client
//!     .call("start quiz", "agent-1", &AgentContext::new("s-1"))
//!     .await
//!     .unwrap();
//! assert!(env.is_success());
//! assert_eq!(client.calls()[0].input, "start quiz");
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{GameQuizError, Result};
use crate::providers::{AgentClient, AgentContext, AgentEnvelope};

/// One canned reply
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Return this envelope
    Envelope(AgentEnvelope),
    /// Fail the call with a transport error carrying this message
    TransportError(String),
}

/// A call observed by the scripted client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Input text
    pub input: String,
    /// Agent id the caller targeted
    pub agent_id: String,
    /// Session id from the context
    pub session_id: String,
}

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<ScriptedReply>,
    calls: Vec<RecordedCall>,
}

/// Agent client that replays scripted replies
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgentClient {
    script: Arc<Mutex<Script>>,
}

impl ScriptedAgentClient {
    /// Create a client with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an arbitrary reply
    pub fn with_reply(self, reply: ScriptedReply) -> Self {
        self.lock().replies.push_back(reply);
        self
    }

    /// Queue a raw envelope
    pub fn with_envelope(self, envelope: AgentEnvelope) -> Self {
        self.with_reply(ScriptedReply::Envelope(envelope))
    }

    /// Queue a successful envelope carrying `result`
    pub fn with_result(self, result: Value) -> Self {
        self.with_envelope(AgentEnvelope::success(result))
    }

    /// Queue a transport failure
    pub fn with_transport_error(self, message: impl Into<String>) -> Self {
        self.with_reply(ScriptedReply::TransportError(message.into()))
    }

    /// Every call received so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Number of replies not yet consumed
    pub fn remaining(&self) -> usize {
        self.lock().replies.len()
    }

    fn lock(&self) -> MutexGuard<'_, Script> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl AgentClient for ScriptedAgentClient {
    async fn call(
        &self,
        input: &str,
        agent_id: &str,
        context: &AgentContext,
    ) -> Result<AgentEnvelope> {
        let reply = {
            let mut script = self.lock();
            script.calls.push(RecordedCall {
                input: input.to_string(),
                agent_id: agent_id.to_string(),
                session_id: context.session_id.clone(),
            });
            script.replies.pop_front()
        };

        match reply {
            Some(ScriptedReply::Envelope(envelope)) => Ok(envelope),
            Some(ScriptedReply::TransportError(message)) => {
                Err(GameQuizError::Transport(message).into())
            }
            None => Err(GameQuizError::Transport(
                "ScriptedAgentClient: no scripted reply left".to_string(),
            )
            .into()),
        }
    }
}
