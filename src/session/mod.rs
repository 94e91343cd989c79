//! Game drivers. Each session reads learner answers line by line and writes
//! prompts and feedback, so they run the same against a terminal or a
//! scripted buffer.

mod complete_operation;
mod ordering;
mod quiz;

use std::io::{self, BufRead};

use chrono::{DateTime, Local};

use crate::models::config::UserConfig;
use crate::models::{Difficulty, OperatorKind};

pub use complete_operation::CompleteOperationSession;
pub use ordering::OrderingSession;
pub use quiz::QuizSession;

/// Selections for one run, taken from the config plus any CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub difficulty: Difficulty,
    pub operator: OperatorKind,
    pub rounds: u32,
    pub seed: Option<u64>,
}

impl SessionSettings {
    pub fn from_config(config: &UserConfig) -> Self {
        Self {
            difficulty: config.difficulty,
            operator: config.operator,
            rounds: config.rounds.max(1),
            seed: config.seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub points: u32,
    pub max_points: u32,
    pub elapsed_secs: f64,
}

/// What the learner typed at a prompt.
enum Reply {
    Line(String),
    Skip,
    Quit,
}

fn read_reply(input: &mut impl BufRead) -> io::Result<Reply> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(Reply::Quit);
    }

    let trimmed = line.trim();
    Ok(match trimmed.to_lowercase().as_str() {
        "" | "skip" => Reply::Skip,
        "quit" | "q" => Reply::Quit,
        _ => Reply::Line(trimmed.to_string()),
    })
}

fn elapsed_secs(started: DateTime<Local>) -> f64 {
    Local::now()
        .signed_duration_since(started)
        .num_milliseconds() as f64
        / 1000.0
}
