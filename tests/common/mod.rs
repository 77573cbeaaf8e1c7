use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use serde_json::{json, Value};

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

/// Config file pointing the agent at a mock server endpoint
#[allow(dead_code)]
pub fn agent_config_yaml(endpoint: &str, timeout_seconds: u64) -> String {
    format!(
        "agent:\n  id: agent-test\n  endpoint: {}\n  timeout_seconds: {}\nquiz:\n  session_prefix: test-quiz\n",
        endpoint, timeout_seconds
    )
}

/// Successful envelope body wrapping `result`
#[allow(dead_code)]
pub fn envelope(result: Value) -> Value {
    json!({
        "success": true,
        "response": {"status": "success", "result": result}
    })
}

#[allow(dead_code)]
pub fn question_result(number: u32, text: &str, options: &[&str]) -> Value {
    json!({
        "quiz_status": "in_progress",
        "current_question_number": number,
        "total_questions_planned": 3,
        "question": {"text": text, "options": options, "question_type": "choice"},
        "progress_percentage": (number - 1) as f64 / 3.0 * 100.0
    })
}

#[allow(dead_code)]
pub fn complete_result() -> Value {
    json!({
        "quiz_status": "complete",
        "recommendations": [
            {
                "rank": 2,
                "game_name": "Azul",
                "match_score": 85,
                "match_explanation": "Quick abstract tile laying",
                "box_art_url": "",
                "key_attributes": {
                    "player_count": "2-4",
                    "complexity": "Light",
                    "play_time": "30-45 min",
                    "themes": ["Abstract"]
                }
            },
            {
                "rank": 1,
                "game_name": "Catan",
                "match_score": 92,
                "match_explanation": "Trading and negotiation for your group",
                "box_art_url": "https://example.com/catan.png",
                "key_attributes": {
                    "player_count": "3-4",
                    "complexity": "Medium",
                    "play_time": "60-90 min",
                    "themes": ["Trading", "Civilization"]
                }
            }
        ],
        "quiz_summary": {
            "total_questions_asked": 3,
            "user_preferences_identified": {
                "player_count": "3-4",
                "complexity": "Medium",
                "play_time": "1 hour",
                "themes": ["Trading"]
            }
        }
    })
}
