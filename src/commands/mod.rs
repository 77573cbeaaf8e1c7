/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `play`: Interactive quiz in the terminal
- `ask`: Send a single message to the agent
- `session_id`: Print a generated session id

These handlers are small and delegate to the library components:
the agent client, the quiz state machine, and the renderer.
*/

use crate::config::Config;
use crate::error::{GameQuizError, Result};
use crate::providers::{create_agent_client, AgentClient, AgentContext, AgentEnvelope};
use crate::quiz::{Phase, QuizMachine, QuizResult, QuizState};
use crate::render;
use crate::session::generate_session_id;

// Key parser for the interactive loop
pub mod play_input;

// Interactive quiz handler
pub mod play {
    //! Interactive quiz handler.
    //!
    //! Creates the HTTP agent client and a `QuizMachine`, then runs a
    //! readline loop that maps key presses to quiz intents and prints the
    //! screen for every state.

    use super::*;
    use crate::commands::play_input::{parse_play_input, PlayAction};
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start the interactive quiz
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    ///
    /// # Errors
    ///
    /// Returns error if the agent client or the line editor cannot be created
    pub async fn run_play(config: Config) -> Result<()> {
        tracing::info!("Starting interactive quiz");

        let client = create_agent_client(&config.agent)?;
        let mut machine = QuizMachine::new_boxed(
            client,
            config.agent.id.clone(),
            &config.quiz.session_prefix,
        )?;
        let default_total = config.quiz.default_total_questions;

        let mut rl = DefaultEditor::new()?;

        loop {
            print!("{}", render::render_state(machine.state(), default_total));

            let line = match rl.readline("> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    println!("Goodbye!");
                    break;
                }
                Err(e) => return Err(GameQuizError::Readline(e).into()),
            };

            let outcome = match parse_play_input(machine.state(), &line) {
                PlayAction::Quit => {
                    println!("Goodbye!");
                    break;
                }
                PlayAction::Start => {
                    print!("{}", render::render_loading());
                    machine.start_quiz().await.map(|_| ())
                }
                PlayAction::Select(index) => {
                    print!("{}", render::render_loading());
                    machine.select_option(index).await.map(|_| ())
                }
                PlayAction::Back => machine.go_back().map(|_| ()),
                PlayAction::Retake => machine.retake().map(|_| ()),
                PlayAction::Retry => machine.retry_after_error().map(|_| ()),
                PlayAction::Invalid(reason) => {
                    println!("{} ({})", reason, phase_help(machine.phase()));
                    continue;
                }
            };

            if let Err(e) = outcome {
                tracing::debug!("Intent rejected: {}", e);
                println!("{}", e);
            }
        }

        tracing::info!(
            "Quiz session ended: session_id={}, inputs={}",
            machine.session_id(),
            machine.history().len()
        );
        Ok(())
    }
}

// Single-shot agent call handler
pub mod ask {
    //! One-shot agent call.
    //!
    //! Sends a single message with a given or generated session id and
    //! prints either the raw envelope or the screen its result would show.

    use super::*;

    /// Send one message to the agent and print the reply
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration
    /// * `message` - Text to send
    /// * `session` - Session id to reuse, generated when `None`
    /// * `json` - Print the envelope as pretty JSON instead of a screen
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, on an unsuccessful envelope
    /// (unless `json` is set) and on an undecodable result
    pub async fn run_ask(
        config: &Config,
        message: String,
        session: Option<String>,
        json: bool,
    ) -> Result<()> {
        let session_id =
            session.unwrap_or_else(|| generate_session_id(&config.quiz.session_prefix));
        tracing::info!("Sending one-shot message: session_id={}", session_id);

        let client = create_agent_client(&config.agent)?;
        let envelope = client
            .call(&message, &config.agent.id, &AgentContext::new(&session_id))
            .await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            return Ok(());
        }

        println!("Session: {}", session_id);
        print!(
            "{}",
            describe_envelope(envelope, config.quiz.default_total_questions)?
        );
        Ok(())
    }

    /// Render the screen an envelope would lead to
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::Agent` for an unsuccessful envelope and
    /// `GameQuizError::UnexpectedResponse` when the result is missing or
    /// cannot be decoded
    pub fn describe_envelope(envelope: AgentEnvelope, default_total: u32) -> Result<String> {
        if !envelope.is_success() {
            let message = envelope
                .failure_message()
                .unwrap_or("agent reported failure without a message")
                .to_string();
            return Err(GameQuizError::Agent(message).into());
        }

        let payload = envelope.response.result.ok_or_else(|| {
            GameQuizError::UnexpectedResponse("envelope has no result".to_string())
        })?;

        let state = match QuizResult::decode(payload)? {
            QuizResult::InProgress(question) => QuizState::Quiz(question),
            QuizResult::Complete(results) => QuizState::Results(results),
        };
        Ok(render::render_state(&state, default_total))
    }
}

// Session id printer
pub mod session_id {
    //! Prints a freshly generated session id.

    use super::*;

    /// Print a new session id using the configured prefix
    pub fn print_session_id(config: &Config) {
        println!("{}", generate_session_id(&config.quiz.session_prefix));
    }
}

/// Key hints for the screen of a phase
pub fn phase_help(phase: Phase) -> &'static str {
    match phase {
        Phase::Welcome => "Enter start · q quit",
        Phase::Loading => "waiting for the agent",
        Phase::Quiz => "number answer · b back · q quit",
        Phase::Results => "r retake · q quit",
        Phase::Error => "r try again · q quit",
    }
}
