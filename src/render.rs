//! Terminal rendering of quiz screens
//!
//! Each screen is rendered to a `String` so the interactive loop only has to
//! print it. Rendering never mutates quiz state.

use colored::Colorize;
use prettytable::{cell, row, Table};

use crate::quiz::{GameRecommendation, QuizComplete, QuizInProgress, QuizState};

const PROGRESS_BAR_WIDTH: usize = 30;

/// Render whichever screen `state` selects
///
/// # Arguments
///
/// * `state` - Active quiz state
/// * `default_total` - Question count shown when the agent omits one
pub fn render_state(state: &QuizState, default_total: u32) -> String {
    match state {
        QuizState::Welcome => render_welcome(),
        QuizState::Loading => render_loading(),
        QuizState::Quiz(question) => render_question(question, default_total),
        QuizState::Results(results) => render_results(results),
        QuizState::Error(message) => render_error(message),
    }
}

/// Welcome screen
pub fn render_welcome() -> String {
    let mut out = String::new();
    out.push_str("\n╔══════════════════════════════════════════════════════════════╗\n");
    out.push_str("║               Let's Find Your Perfect Game!                  ║\n");
    out.push_str("╚══════════════════════════════════════════════════════════════╝\n\n");
    out.push_str("Answer a few quick questions and discover board games you'll love.\n\n");
    out.push_str("  🎲 Personalized Picks   ⚡ Quick 2-Minute Quiz   🏆 Top 3 Matches\n\n");
    out.push_str(&format!("Press {} to start, {} to quit\n", "Enter".bold(), "q".bold()));
    out
}

/// Loading screen
pub fn render_loading() -> String {
    format!("{}\n", "Thinking...".dimmed())
}

/// Text progress bar for a 0-100 percentage
///
/// # Examples
///
/// ```
/// use gamequiz::render::progress_bar;
///
/// assert_eq!(progress_bar(50.0, 10), "[#####-----]");
/// ```
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let clamped = if percentage.is_finite() {
        percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Question screen
pub fn render_question(question: &QuizInProgress, default_total: u32) -> String {
    let number = question.question_number();
    let total = question.total_questions(default_total);

    let mut out = String::new();
    out.push_str(&format!(
        "\n{}  {}\n",
        format!("Question {} of {}", number, total).purple(),
        progress_bar(question.progress(), PROGRESS_BAR_WIDTH)
    ));
    out.push_str(&format!("\n{}\n\n", question.question.text.bold()));
    for (index, option) in question.question.options.iter().enumerate() {
        out.push_str(&format!("  {}) {}\n", index + 1, option));
    }

    let mut hints = vec![format!("1-{} answer", question.question.options.len())];
    if question.can_go_back() {
        hints.push("b back".to_string());
    }
    hints.push("q quit".to_string());
    out.push_str(&format!("\n{}\n", hints.join(" · ").dimmed()));
    out
}

/// Match score as display text, e.g. `92% Match`
pub fn format_match_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}% Match", score)
    } else {
        format!("{:.1}% Match", score)
    }
}

fn rank_badge(rank: u32) -> String {
    let badge = format!("#{}", rank);
    match rank {
        1 => badge.yellow().bold().to_string(),
        2 => badge.white().bold().to_string(),
        3 => badge.red().bold().to_string(),
        _ => badge,
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

fn render_recommendation_detail(rec: &GameRecommendation) -> String {
    format!(
        "{} {}\n   {}\n   Box art: {}\n",
        rank_badge(rec.rank),
        rec.name.bold(),
        rec.match_explanation,
        rec.box_art_or_fallback()
    )
}

/// Results screen
pub fn render_results(results: &QuizComplete) -> String {
    let ranked = results.ranked();

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", "Your Top Picks!".bold()));
    out.push_str(&format!(
        "We found {} perfect games for you\n\n",
        ranked.len()
    ));

    let mut table = Table::new();
    table.add_row(row![
        "Rank", "Game", "Match", "Players", "Play Time", "Complexity", "Themes"
    ]);
    for rec in &ranked {
        table.add_row(row![
            format!("#{}", rec.rank),
            rec.name,
            format_match_score(rec.match_score),
            format!("{} players", rec.key_attributes.player_count),
            rec.key_attributes.play_time,
            rec.key_attributes.complexity,
            join_or_dash(&rec.key_attributes.themes)
        ]);
    }
    out.push_str(&table.to_string());
    out.push('\n');

    for rec in &ranked {
        out.push_str(&render_recommendation_detail(rec));
        out.push('\n');
    }

    if let Some(summary) = &results.quiz_summary {
        let prefs = &summary.user_preferences_identified;
        out.push_str(&format!("{}\n", "Your Gaming Profile".bold()));
        out.push_str(&format!(
            "  Questions asked: {}\n",
            summary.total_questions_asked
        ));
        out.push_str(&format!("  Players:         {}\n", prefs.player_count));
        out.push_str(&format!("  Complexity:      {}\n", prefs.complexity));
        out.push_str(&format!("  Play time:       {}\n", prefs.play_time));
        out.push_str(&format!("  Themes:          {}\n", join_or_dash(&prefs.themes)));
        out.push('\n');
    }

    out.push_str(&format!(
        "{}\n",
        "r retake quiz · q quit".dimmed()
    ));
    out
}

/// Error screen
pub fn render_error(message: &str) -> String {
    format!(
        "\n{}\n{}\n\n{}\n",
        "Oops! Something went wrong".red().bold(),
        message,
        "r try again · q quit".dimmed()
    )
}
