//! Quiz payload types returned by the recommendation agent
//!
//! The agent's result is a tagged union discriminated by `quiz_status`:
//! either the next question ([`QuizInProgress`]) or the final ranking
//! ([`QuizComplete`]). Anything else is rejected by [`QuizResult::decode`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GameQuizError;

/// Placeholder image used when a recommendation has no usable box art
pub const BOX_ART_FALLBACK: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"300\" height=\"300\"%3E%3Crect fill=\"%239333ea\" width=\"300\" height=\"300\"/%3E%3Ctext fill=\"%23ffffff\" font-family=\"Arial\" font-size=\"24\" x=\"50%25\" y=\"50%25\" text-anchor=\"middle\" dy=\".3em\"%3EBoard Game%3C/text%3E%3C/svg%3E";

/// A multiple-choice question supplied by the agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// Prompt shown to the user
    pub text: String,
    /// Selectable answers, in display order
    pub options: Vec<String>,
    /// Free-form tag, not interpreted by the client
    #[serde(default)]
    pub question_type: String,
}

/// Result variant carrying the next question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizInProgress {
    /// 1-based position of this question
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_question_number: Option<u32>,
    /// Number of questions the agent plans to ask
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions_planned: Option<u32>,
    /// The question to display
    pub question: QuizQuestion,
    /// Progress through the quiz, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<f64>,
}

impl QuizInProgress {
    /// Question number, defaulting to 1 when the agent omits it
    pub fn question_number(&self) -> u32 {
        self.current_question_number.unwrap_or(1)
    }

    /// Planned question count, or `default` when the agent omits it
    pub fn total_questions(&self, default: u32) -> u32 {
        self.total_questions_planned.unwrap_or(default)
    }

    /// Progress percentage clamped to 0-100, defaulting to 0
    pub fn progress(&self) -> f64 {
        let value = self.progress_percentage.unwrap_or(0.0);
        if value.is_finite() {
            value.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Whether a back control should be offered for this question
    pub fn can_go_back(&self) -> bool {
        self.question_number() > 1
    }

    /// Whether `answer` is one of the displayed options
    pub fn accepts(&self, answer: &str) -> bool {
        self.question.options.iter().any(|option| option == answer)
    }
}

/// Player count, complexity, play time and themes of a game or preference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyAttributes {
    /// Supported player count, as display text
    #[serde(default)]
    pub player_count: String,
    /// Rules complexity, as display text
    #[serde(default)]
    pub complexity: String,
    /// Typical play time, as display text
    #[serde(default)]
    pub play_time: String,
    /// Themes, in display order
    #[serde(default)]
    pub themes: Vec<String>,
}

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecommendation {
    /// Rank, 1 = best match
    pub rank: u32,
    /// Game name
    #[serde(rename = "game_name")]
    pub name: String,
    /// Match score, nominally 0-100 (not validated)
    #[serde(default)]
    pub match_score: f64,
    /// Why the game matches the user's answers
    #[serde(default)]
    pub match_explanation: String,
    /// Box art image URL, possibly unreachable
    #[serde(default)]
    pub box_art_url: String,
    /// Key attributes of the game
    #[serde(default)]
    pub key_attributes: KeyAttributes,
}

impl GameRecommendation {
    /// Box art URL, or [`BOX_ART_FALLBACK`] when it is missing or not http(s)
    pub fn box_art_or_fallback(&self) -> &str {
        let url = self.box_art_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            url
        } else {
            BOX_ART_FALLBACK
        }
    }
}

/// Aggregated preferences the agent identified
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    /// How many questions were asked
    #[serde(default)]
    pub total_questions_asked: u32,
    /// Preferences inferred from the answers
    #[serde(default)]
    pub user_preferences_identified: KeyAttributes,
}

/// Result variant carrying the final ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizComplete {
    /// Recommendations as returned by the agent
    #[serde(default)]
    pub recommendations: Vec<GameRecommendation>,
    /// Preference summary, when the agent provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_summary: Option<QuizSummary>,
}

impl QuizComplete {
    /// Recommendations sorted by ascending rank
    pub fn ranked(&self) -> Vec<&GameRecommendation> {
        let mut ranked: Vec<&GameRecommendation> = self.recommendations.iter().collect();
        ranked.sort_by_key(|r| r.rank);
        ranked
    }
}

/// The agent's polymorphic result payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "quiz_status", rename_all = "snake_case")]
pub enum QuizResult {
    /// The quiz continues with another question
    InProgress(QuizInProgress),
    /// The quiz is finished and recommendations are available
    Complete(QuizComplete),
}

impl QuizResult {
    /// Decode a raw result payload
    ///
    /// # Errors
    ///
    /// Returns `GameQuizError::UnexpectedResponse` when `quiz_status` is
    /// missing or unknown, when the variant's fields do not decode, when
    /// an in-progress question has no options, or when a recommendation
    /// rank is 0 or repeated.
    ///
    /// # Examples
    ///
    /// ```
    /// use gamequiz::quiz::QuizResult;
    /// use serde_json::json;
    ///
    /// let result = QuizResult::decode(json!({
    ///     "quiz_status": "in_progress",
    ///     "question": {"text": "How many players?", "options": ["2", "3-4", "5+"]}
    /// }))
    /// .unwrap();
    /// assert!(matches!(result, QuizResult::InProgress(_)));
    ///
    /// assert!(QuizResult::decode(json!({"quiz_status": "paused"})).is_err());
    /// ```
    pub fn decode(value: Value) -> Result<Self, GameQuizError> {
        match value.get("quiz_status") {
            None => {
                return Err(GameQuizError::UnexpectedResponse(
                    "missing quiz_status".to_string(),
                ))
            }
            Some(Value::String(status)) if status == "in_progress" || status == "complete" => {}
            Some(other) => {
                return Err(GameQuizError::UnexpectedResponse(format!(
                    "unknown quiz_status {}",
                    other
                )))
            }
        }

        let result: QuizResult = serde_json::from_value(value)
            .map_err(|e| GameQuizError::UnexpectedResponse(e.to_string()))?;

        match &result {
            QuizResult::InProgress(progress) => {
                if progress.question.options.is_empty() {
                    return Err(GameQuizError::UnexpectedResponse(
                        "question has no options".to_string(),
                    ));
                }
            }
            QuizResult::Complete(complete) => {
                let mut seen = HashSet::new();
                for rec in &complete.recommendations {
                    if rec.rank == 0 {
                        return Err(GameQuizError::UnexpectedResponse(format!(
                            "recommendation {:?} has rank 0",
                            rec.name
                        )));
                    }
                    if !seen.insert(rec.rank) {
                        return Err(GameQuizError::UnexpectedResponse(format!(
                            "duplicate rank {}",
                            rec.rank
                        )));
                    }
                }
            }
        }

        Ok(result)
    }
}
