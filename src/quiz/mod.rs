//! Quiz module for GameQuiz
//!
//! This module contains the quiz payload types decoded from agent results
//! and the state machine that drives a quiz attempt.

pub mod machine;
pub mod types;

pub use machine::{Phase, QuizMachine, QuizState, START_QUIZ_INPUT};
pub use types::{
    GameRecommendation, KeyAttributes, QuizComplete, QuizInProgress, QuizQuestion, QuizResult,
    QuizSummary, BOX_ART_FALLBACK,
};
