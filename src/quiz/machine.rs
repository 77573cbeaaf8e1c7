//! Quiz lifecycle state machine
//!
//! [`QuizMachine`] owns the session and the current [`QuizState`], accepts
//! user intents, issues exactly one agent call per quiz-advancing intent and
//! interprets the returned envelope.
//!
//! ```text
//! welcome --start--> loading --> quiz | error
//! quiz --answer--> loading --> quiz | results | error
//! quiz --back--> welcome, results --retake--> welcome, error --retry--> welcome
//! ```
//!
//! Every move back to `welcome` is a full reset: new session id, empty
//! history, no displayed question.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{GameQuizError, Result};
use crate::providers::{AgentClient, AgentContext};
use crate::quiz::types::{QuizComplete, QuizInProgress, QuizResult};
use crate::session::Session;

/// Input sent to the agent to begin a quiz
pub const START_QUIZ_INPUT: &str = "start quiz";

const START_FALLBACK: &str = "Failed to start quiz";
const ANSWER_FALLBACK: &str = "Failed to process answer";
const NETWORK_FALLBACK: &str = "Network error";
const UNEXPECTED_RESPONSE: &str = "Unexpected response from agent";

/// Tag of the active state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial screen, nothing in flight
    Welcome,
    /// An agent call is in flight
    Loading,
    /// A question is displayed
    Quiz,
    /// Recommendations are displayed
    Results,
    /// A failure message is displayed
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Welcome => write!(f, "welcome"),
            Self::Loading => write!(f, "loading"),
            Self::Quiz => write!(f, "quiz"),
            Self::Results => write!(f, "results"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The active state together with the data its screen renders
#[derive(Debug, Clone, PartialEq)]
pub enum QuizState {
    /// Initial screen
    Welcome,
    /// Waiting for the agent
    Loading,
    /// Displaying a question
    Quiz(QuizInProgress),
    /// Displaying the final ranking
    Results(QuizComplete),
    /// Displaying a failure message
    Error(String),
}

impl QuizState {
    /// Tag of this state
    pub fn phase(&self) -> Phase {
        match self {
            Self::Welcome => Phase::Welcome,
            Self::Loading => Phase::Loading,
            Self::Quiz(_) => Phase::Quiz,
            Self::Results(_) => Phase::Results,
            Self::Error(_) => Phase::Error,
        }
    }
}

/// Why an agent call did not produce a usable result
#[derive(Debug)]
enum CallFailure {
    Transport(String),
    Business(Option<String>),
    Contract(String),
}

impl CallFailure {
    fn into_message(self, business_fallback: &str) -> String {
        match self {
            Self::Transport(message) if message.trim().is_empty() => NETWORK_FALLBACK.to_string(),
            Self::Transport(message) => message,
            Self::Business(Some(message)) => message,
            Self::Business(None) => business_fallback.to_string(),
            Self::Contract(detail) => {
                debug!("Contract violation: {}", detail);
                UNEXPECTED_RESPONSE.to_string()
            }
        }
    }
}

/// Client-side quiz state machine
///
/// # Examples
///
/// ```
/// use gamequiz::providers::ScriptedAgentClient;
/// use gamequiz::quiz::{Phase, QuizMachine};
/// use serde_json::json;
///
/// # #[tokio::main]
/// # async fn main() -> gamequiz::error::Result<()> {
/// let client = ScriptedAgentClient::new().with_result(json!({
///     "quiz_status": "in_progress",
///     "question": {"text": "How many players?", "options": ["2", "3-4", "5+"]}
/// }));
/// let mut machine = QuizMachine::new(client, "agent-1", "game-quiz")?;
///
/// machine.start_quiz().await?;
/// assert_eq!(machine.phase(), Phase::Quiz);
/// assert_eq!(machine.history(), &["start quiz"]);
/// # Ok(())
/// # }
/// ```
pub struct QuizMachine {
    client: Arc<dyn AgentClient>,
    agent_id: String,
    session: Session,
    state: QuizState,
    last_question: Option<QuizInProgress>,
}

impl fmt::Debug for QuizMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizMachine")
            .field("agent_id", &self.agent_id)
            .field("session", &self.session)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl QuizMachine {
    /// Creates a machine in the `welcome` state with a fresh session
    ///
    /// # Arguments
    ///
    /// * `client` - Transport used for agent calls
    /// * `agent_id` - Identifier of the target agent
    /// * `session_prefix` - Prefix for generated session ids
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Config` if `agent_id` is empty
    pub fn new(
        client: impl AgentClient + 'static,
        agent_id: impl Into<String>,
        session_prefix: &str,
    ) -> Result<Self> {
        Self::with_client(Arc::new(client), agent_id.into(), session_prefix)
    }

    /// Creates a machine with a boxed client
    ///
    /// Useful when the client type is chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Config` if `agent_id` is empty
    pub fn new_boxed(
        client: Box<dyn AgentClient>,
        agent_id: impl Into<String>,
        session_prefix: &str,
    ) -> Result<Self> {
        Self::with_client(Arc::from(client), agent_id.into(), session_prefix)
    }

    fn with_client(
        client: Arc<dyn AgentClient>,
        agent_id: String,
        session_prefix: &str,
    ) -> Result<Self> {
        if agent_id.trim().is_empty() {
            return Err(GameQuizError::Config("agent id cannot be empty".to_string()).into());
        }

        let session = Session::new(session_prefix);
        debug!("Quiz machine created: session_id={}", session.id());

        Ok(Self {
            client,
            agent_id,
            session,
            state: QuizState::Welcome,
            last_question: None,
        })
    }

    /// The active state
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Tag of the active state
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// True while an agent call is in flight
    pub fn is_loading(&self) -> bool {
        self.phase() == Phase::Loading
    }

    /// Current session id
    pub fn session_id(&self) -> &str {
        self.session.id()
    }

    /// Inputs submitted since the last reset, oldest first
    pub fn history(&self) -> &[String] {
        self.session.history()
    }

    /// Agent identifier used for every call
    pub fn agent_id(&self) -> &str {
        &self.agent_id
    }

    /// Most recently displayed question of this attempt
    ///
    /// Kept while a call is in flight and after a failure, cleared on reset.
    pub fn last_question(&self) -> Option<&QuizInProgress> {
        self.last_question.as_ref()
    }

    /// Start a quiz from the `welcome` state
    ///
    /// Agent failures do not return `Err`; they move the machine to `error`.
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Busy` while a call is in flight and
    /// `GameQuizError::InvalidIntent` outside `welcome`
    pub async fn start_quiz(&mut self) -> Result<&QuizState> {
        self.ensure_phase("start the quiz", Phase::Welcome)?;
        info!("Starting quiz: session_id={}", self.session.id());

        self.state = QuizState::Loading;
        self.state = match self.call_agent(START_QUIZ_INPUT).await {
            Ok(QuizResult::InProgress(question)) => {
                self.session.restart_history(START_QUIZ_INPUT);
                self.show_question(question)
            }
            Ok(QuizResult::Complete(_)) => {
                warn!("Agent answered 'start quiz' with a completed quiz");
                let failure = CallFailure::Contract("complete result on start".to_string());
                self.fail(failure, START_FALLBACK)
            }
            Err(failure) => self.fail(failure, START_FALLBACK),
        };

        Ok(&self.state)
    }

    /// Submit one of the displayed options
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Busy` while a call is in flight,
    /// `GameQuizError::InvalidIntent` outside `quiz`, and
    /// `GameQuizError::InvalidAnswer` when `answer` is not a displayed option.
    /// No agent call is made in those cases.
    pub async fn submit_answer(&mut self, answer: &str) -> Result<&QuizState> {
        self.ensure_phase("submit an answer", Phase::Quiz)?;
        if let QuizState::Quiz(question) = &self.state {
            if !question.accepts(answer) {
                return Err(GameQuizError::InvalidAnswer(format!(
                    "'{}' is not one of: {}",
                    answer,
                    question.question.options.join(", ")
                ))
                .into());
            }
        }

        info!(
            "Submitting answer: session_id={}, answer={:?}",
            self.session.id(),
            answer
        );

        self.state = QuizState::Loading;
        self.state = match self.call_agent(answer).await {
            Ok(QuizResult::InProgress(question)) => {
                self.session.record(answer);
                self.show_question(question)
            }
            Ok(QuizResult::Complete(results)) => {
                self.session.record(answer);
                info!(
                    "Quiz complete: {} recommendations after {} inputs",
                    results.recommendations.len(),
                    self.session.history().len()
                );
                QuizState::Results(results)
            }
            Err(failure) => self.fail(failure, ANSWER_FALLBACK),
        };

        Ok(&self.state)
    }

    /// Submit the option at `index` of the displayed question
    ///
    /// This is the control-level intent: it can only emit a literal option.
    ///
    /// # Errors
    ///
    /// Same as [`QuizMachine::submit_answer`]; an out-of-range index is
    /// `GameQuizError::InvalidAnswer`.
    pub async fn select_option(&mut self, index: usize) -> Result<&QuizState> {
        self.ensure_phase("select an option", Phase::Quiz)?;
        let answer = match &self.state {
            QuizState::Quiz(question) => question.question.options.get(index).cloned(),
            _ => None,
        };
        match answer {
            Some(answer) => self.submit_answer(&answer).await,
            None => Err(GameQuizError::InvalidAnswer(format!(
                "option {} is out of range",
                index + 1
            ))
            .into()),
        }
    }

    /// Leave the quiz and return to `welcome`
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Busy` or `GameQuizError::InvalidIntent`
    /// outside `quiz`
    pub fn go_back(&mut self) -> Result<&QuizState> {
        self.ensure_phase("go back", Phase::Quiz)?;
        self.reset("back");
        Ok(&self.state)
    }

    /// Retake the quiz from the results screen
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Busy` or `GameQuizError::InvalidIntent`
    /// outside `results`
    pub fn retake(&mut self) -> Result<&QuizState> {
        self.ensure_phase("retake the quiz", Phase::Results)?;
        self.reset("retake");
        Ok(&self.state)
    }

    /// Return to `welcome` after a failure
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Busy` or `GameQuizError::InvalidIntent`
    /// outside `error`
    pub fn retry_after_error(&mut self) -> Result<&QuizState> {
        self.ensure_phase("retry", Phase::Error)?;
        self.reset("retry");
        Ok(&self.state)
    }

    fn ensure_phase(&self, intent: &'static str, expected: Phase) -> Result<()> {
        if self.is_loading() {
            return Err(GameQuizError::Busy.into());
        }
        let phase = self.phase();
        if phase != expected {
            return Err(GameQuizError::InvalidIntent {
                intent,
                phase: phase.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn reset(&mut self, reason: &str) {
        let previous = self.session.id().to_string();
        self.session.reset();
        self.last_question = None;
        self.state = QuizState::Welcome;
        info!(
            "Quiz reset ({}): session {} -> {}",
            reason,
            previous,
            self.session.id()
        );
    }

    fn show_question(&mut self, question: QuizInProgress) -> QuizState {
        debug!(
            "Showing question {}: {:?}",
            question.question_number(),
            question.question.text
        );
        self.last_question = Some(question.clone());
        QuizState::Quiz(question)
    }

    fn fail(&self, failure: CallFailure, business_fallback: &str) -> QuizState {
        warn!("Agent call failed: {:?}", failure);
        QuizState::Error(failure.into_message(business_fallback))
    }

    async fn call_agent(&self, input: &str) -> std::result::Result<QuizResult, CallFailure> {
        let context = AgentContext::new(self.session.id());
        let envelope = self
            .client
            .call(input, &self.agent_id, &context)
            .await
            .map_err(|e| CallFailure::Transport(e.to_string()))?;

        if !envelope.is_success() {
            return Err(CallFailure::Business(
                envelope.failure_message().map(str::to_string),
            ));
        }

        let payload = envelope
            .response
            .result
            .ok_or_else(|| CallFailure::Contract("missing result".to_string()))?;

        QuizResult::decode(payload).map_err(|e| CallFailure::Contract(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{AgentEnvelope, ScriptedAgentClient};
    use serde_json::{json, Value};

    fn question(number: u32, text: &str, options: &[&str]) -> Value {
        json!({
            "quiz_status": "in_progress",
            "current_question_number": number,
            "total_questions_planned": 6,
            "question": {"text": text, "options": options, "question_type": "choice"}
        })
    }

    fn complete() -> Value {
        json!({
            "quiz_status": "complete",
            "recommendations": [{
                "rank": 1,
                "game_name": "Catan",
                "match_score": 92,
                "match_explanation": "Great with 3-4 players",
                "box_art_url": "https://example.com/catan.png",
                "key_attributes": {
                    "player_count": "3-4",
                    "complexity": "Medium",
                    "play_time": "60-90 min",
                    "themes": ["Trading"]
                }
            }],
            "quiz_summary": {
                "total_questions_asked": 1,
                "user_preferences_identified": {
                    "player_count": "3-4",
                    "complexity": "Medium",
                    "play_time": "1 hour",
                    "themes": []
                }
            }
        })
    }

    fn machine(client: &ScriptedAgentClient) -> QuizMachine {
        QuizMachine::new(client.clone(), "agent-1", "test").unwrap()
    }

    fn error_message(machine: &QuizMachine) -> &str {
        match machine.state() {
            QuizState::Error(message) => message,
            other => panic!("expected error state, got {:?}", other),
        }
    }

    #[test]
    fn test_new_machine_is_welcome() {
        let client = ScriptedAgentClient::new();
        let machine = machine(&client);
        assert_eq!(machine.phase(), Phase::Welcome);
        assert!(machine.history().is_empty());
        assert!(machine.session_id().starts_with("test-"));
        assert!(machine.last_question().is_none());
    }

    #[test]
    fn test_empty_agent_id_rejected() {
        assert!(QuizMachine::new(ScriptedAgentClient::new(), "", "test").is_err());
    }

    #[tokio::test]
    async fn test_start_quiz_success() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]));
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();

        assert_eq!(machine.phase(), Phase::Quiz);
        assert_eq!(machine.history(), &["start quiz"]);
        match machine.state() {
            QuizState::Quiz(q) => {
                assert_eq!(q.question.text, "How many players?");
                assert_eq!(q.question.options.len(), 3);
            }
            other => panic!("expected quiz state, got {:?}", other),
        }

        let calls = client.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].input, "start quiz");
        assert_eq!(calls[0].agent_id, "agent-1");
        assert_eq!(calls[0].session_id, machine.session_id());
    }

    #[tokio::test]
    async fn test_start_quiz_with_complete_result_is_unexpected() {
        let client = ScriptedAgentClient::new().with_result(complete());
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();

        assert_eq!(error_message(&machine), "Unexpected response from agent");
        assert!(machine.history().is_empty());
    }

    #[tokio::test]
    async fn test_start_quiz_business_failure_uses_agent_message() {
        let client = ScriptedAgentClient::new()
            .with_envelope(AgentEnvelope::failure(Some("Agent is overloaded".to_string())));
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();

        assert_eq!(error_message(&machine), "Agent is overloaded");
    }

    #[tokio::test]
    async fn test_start_quiz_business_failure_fallback() {
        let client = ScriptedAgentClient::new().with_envelope(AgentEnvelope::failure(None));
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();

        assert_eq!(error_message(&machine), "Failed to start quiz");
    }

    #[tokio::test]
    async fn test_start_quiz_transport_failure() {
        let client = ScriptedAgentClient::new().with_transport_error("connection refused");
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();

        assert_eq!(error_message(&machine), "connection refused");
    }

    #[tokio::test]
    async fn test_transport_failure_without_message_uses_network_error() {
        let client = ScriptedAgentClient::new().with_transport_error("");
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();

        assert_eq!(error_message(&machine), "Network error");
    }

    #[tokio::test]
    async fn test_success_without_result_is_unexpected() {
        let mut envelope = AgentEnvelope::success(json!({}));
        envelope.response.result = None;
        let client = ScriptedAgentClient::new().with_envelope(envelope);
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();

        assert_eq!(error_message(&machine), "Unexpected response from agent");
    }

    #[tokio::test]
    async fn test_answer_advances_to_next_question() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]))
            .with_result(question(2, "How long?", &["30 min", "1 hour"]));
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();
        machine.submit_answer("3-4").await.unwrap();

        assert_eq!(machine.phase(), Phase::Quiz);
        assert_eq!(machine.history(), &["start quiz", "3-4"]);
        assert_eq!(
            machine.last_question().map(|q| q.question.text.as_str()),
            Some("How long?")
        );
        assert_eq!(client.calls()[1].input, "3-4");
    }

    #[tokio::test]
    async fn test_answer_completes_quiz() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]))
            .with_result(complete());
        let mut machine = machine(&client);

        machine.start_quiz().await.unwrap();
        machine.submit_answer("3-4").await.unwrap();

        match machine.state() {
            QuizState::Results(results) => {
                assert_eq!(results.recommendations.len(), 1);
                assert_eq!(results.ranked()[0].rank, 1);
                assert_eq!(results.ranked()[0].name, "Catan");
            }
            other => panic!("expected results, got {:?}", other),
        }
        assert_eq!(machine.history().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_answer_rejected_without_call() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]));
        let mut machine = machine(&client);
        machine.start_quiz().await.unwrap();

        let err = machine.submit_answer("7").await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<GameQuizError>(),
            Some(GameQuizError::InvalidAnswer(_))
        ));
        assert_eq!(machine.phase(), Phase::Quiz);
        assert_eq!(client.calls().len(), 1);
        assert_eq!(machine.history(), &["start quiz"]);
    }

    #[tokio::test]
    async fn test_select_option_emits_literal_option() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]))
            .with_result(complete());
        let mut machine = machine(&client);
        machine.start_quiz().await.unwrap();

        assert!(machine.select_option(3).await.is_err());
        machine.select_option(1).await.unwrap();

        assert_eq!(client.calls()[1].input, "3-4");
        assert_eq!(machine.phase(), Phase::Results);
    }

    #[tokio::test]
    async fn test_answer_transport_failure_keeps_last_question() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]))
            .with_transport_error("timed out");
        let mut machine = machine(&client);
        machine.start_quiz().await.unwrap();

        machine.submit_answer("2").await.unwrap();

        assert_eq!(error_message(&machine), "timed out");
        assert_eq!(
            machine.last_question().map(|q| q.question.text.as_str()),
            Some("How many players?")
        );
        assert_eq!(machine.history(), &["start quiz"]);
    }

    #[tokio::test]
    async fn test_answer_business_failure_fallback() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]))
            .with_envelope(AgentEnvelope::failure(Some(String::new())));
        let mut machine = machine(&client);
        machine.start_quiz().await.unwrap();

        machine.submit_answer("2").await.unwrap();

        assert_eq!(error_message(&machine), "Failed to process answer");
    }

    #[tokio::test]
    async fn test_answer_unknown_status_routes_to_error() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]))
            .with_result(json!({"quiz_status": "thinking"}));
        let mut machine = machine(&client);
        machine.start_quiz().await.unwrap();

        machine.submit_answer("2").await.unwrap();

        assert_eq!(error_message(&machine), "Unexpected response from agent");
    }

    #[tokio::test]
    async fn test_answer_missing_status_routes_to_error() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]))
            .with_result(json!({"question": {"text": "Next?", "options": ["a"]}}));
        let mut machine = machine(&client);
        machine.start_quiz().await.unwrap();

        machine.submit_answer("3-4").await.unwrap();

        assert_eq!(error_message(&machine), "Unexpected response from agent");
        assert_eq!(machine.history(), &["start quiz"]);
    }

    #[tokio::test]
    async fn test_intents_rejected_in_wrong_phase() {
        let client = ScriptedAgentClient::new();
        let mut machine = machine(&client);

        assert!(machine.submit_answer("2").await.is_err());
        assert!(machine.go_back().is_err());
        assert!(machine.retake().is_err());
        assert!(machine.retry_after_error().is_err());
        assert_eq!(machine.phase(), Phase::Welcome);
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_loading_rejects_every_intent() {
        let client = ScriptedAgentClient::new();
        let mut machine = machine(&client);
        machine.state = QuizState::Loading;
        assert!(machine.is_loading());

        for err in [
            machine.start_quiz().await.unwrap_err(),
            machine.submit_answer("2").await.unwrap_err(),
            machine.go_back().unwrap_err(),
            machine.retake().unwrap_err(),
            machine.retry_after_error().unwrap_err(),
        ] {
            assert!(matches!(
                err.downcast_ref::<GameQuizError>(),
                Some(GameQuizError::Busy)
            ));
        }
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_go_back_resets_session() {
        let client = ScriptedAgentClient::new()
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]));
        let mut machine = machine(&client);
        machine.start_quiz().await.unwrap();
        let old_id = machine.session_id().to_string();

        machine.go_back().unwrap();

        assert_eq!(machine.phase(), Phase::Welcome);
        assert_ne!(machine.session_id(), old_id);
        assert!(machine.history().is_empty());
        assert!(machine.last_question().is_none());
    }

    #[tokio::test]
    async fn test_retry_after_error_resets_and_allows_restart() {
        let client = ScriptedAgentClient::new()
            .with_transport_error("offline")
            .with_result(question(1, "How many players?", &["2", "3-4", "5+"]));
        let mut machine = machine(&client);
        machine.start_quiz().await.unwrap();
        let old_id = machine.session_id().to_string();

        machine.retry_after_error().unwrap();
        machine.start_quiz().await.unwrap();

        assert_eq!(machine.phase(), Phase::Quiz);
        assert_ne!(machine.session_id(), old_id);
        let calls = client.calls();
        assert_eq!(calls[0].session_id, old_id);
        assert_eq!(calls[1].session_id, machine.session_id());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Welcome.to_string(), "welcome");
        assert_eq!(Phase::Loading.to_string(), "loading");
        assert_eq!(Phase::Results.to_string(), "results");
    }
}
