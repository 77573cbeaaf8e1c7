//! Key parser for the interactive quiz loop
//!
//! Maps one line of terminal input to a quiz intent, given the screen the
//! user is looking at. Answers are only ever produced as option indices, so
//! free text typed on the question screen can never reach the agent.

use crate::quiz::QuizState;

/// Intent derived from one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayAction {
    /// Begin the quiz (welcome screen)
    Start,
    /// Choose the option at this zero-based index (question screen)
    Select(usize),
    /// Leave the quiz (question screen)
    Back,
    /// Take the quiz again (results screen)
    Retake,
    /// Return to the welcome screen (error screen)
    Retry,
    /// Exit the program
    Quit,
    /// Input not meaningful on this screen
    Invalid(String),
}

/// Parse a line of input for the current screen
///
/// Input is trimmed and case-insensitive. `q`, `quit` and `exit` quit from
/// any screen.
///
/// # Examples
///
/// ```
/// use gamequiz::commands::play_input::{parse_play_input, PlayAction};
/// use gamequiz::quiz::QuizState;
///
/// assert_eq!(parse_play_input(&QuizState::Welcome, ""), PlayAction::Start);
/// assert_eq!(parse_play_input(&QuizState::Welcome, "quit"), PlayAction::Quit);
/// ```
pub fn parse_play_input(state: &QuizState, input: &str) -> PlayAction {
    let lower = input.trim().to_lowercase();

    if matches!(lower.as_str(), "q" | "quit" | "exit") {
        return PlayAction::Quit;
    }

    match state {
        QuizState::Welcome => match lower.as_str() {
            "" | "s" | "start" | "go" => PlayAction::Start,
            other => PlayAction::Invalid(format!("Unknown input: {}", other)),
        },
        QuizState::Loading => PlayAction::Invalid("Still waiting for the agent".to_string()),
        QuizState::Quiz(question) => {
            if lower == "b" || lower == "back" {
                return if question.can_go_back() {
                    PlayAction::Back
                } else {
                    PlayAction::Invalid("Back is not available on the first question".to_string())
                };
            }
            let count = question.question.options.len();
            match lower.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => PlayAction::Select(n - 1),
                _ => PlayAction::Invalid(format!("Choose an option between 1 and {}", count)),
            }
        }
        QuizState::Results(_) => match lower.as_str() {
            "r" | "retake" => PlayAction::Retake,
            other => PlayAction::Invalid(format!("Unknown input: {}", other)),
        },
        QuizState::Error(_) => match lower.as_str() {
            "" | "r" | "retry" => PlayAction::Retry,
            other => PlayAction::Invalid(format!("Unknown input: {}", other)),
        },
    }
}
