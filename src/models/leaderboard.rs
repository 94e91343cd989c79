//! Append-only per-game leaderboard.
//!
//! Stored as pretty JSON next to a CSV export that is rewritten after every
//! new entry.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::operator::OperatorKind;
use crate::error::StorageError;

const CSV_HEADER: &str = "UserName,Game,Difficulty,Operation,Points,MaxPoints,CompletionTime,Date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    CompleteOperation,
    Quiz,
    Ordering,
}

impl GameKind {
    pub fn file_stem(&self) -> &'static str {
        match self {
            GameKind::CompleteOperation => "leaderboard_complete_operation",
            GameKind::Quiz => "leaderboard_quiz",
            GameKind::Ordering => "leaderboard_ordering",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GameKind::CompleteOperation => "Complete the Operation",
            GameKind::Quiz => "Quiz",
            GameKind::Ordering => "Ordering",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub game: GameKind,
    pub difficulty: Difficulty,
    /// Absent for games that are not tied to one operator.
    #[serde(default)]
    pub operator: Option<OperatorKind>,
    pub points: u32,
    pub max_points: u32,
    /// Seconds from first prompt to last answer.
    pub completion_secs: f64,
    pub date: String,
}

impl LeaderboardEntry {
    pub fn new(
        player_name: String,
        game: GameKind,
        difficulty: Difficulty,
        operator: Option<OperatorKind>,
        points: u32,
        max_points: u32,
        completion_secs: f64,
    ) -> Self {
        Self {
            player_name,
            game,
            difficulty,
            operator,
            points,
            max_points,
            completion_secs,
            date: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    fn csv_line(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.2},{}",
            csv_field(&self.player_name),
            self.game.display_name(),
            self.difficulty.display_name(),
            self.operator.map(|o| o.display_name()).unwrap_or("-"),
            self.points,
            self.max_points,
            self.completion_secs,
            self.date
        )
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            log::info!("No leaderboard at {}, starting fresh", path.display());
            return Ok(Self::new());
        }

        let json = fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
        serde_json::from_str(&json).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| StorageError::io(path, e))?;
        log::info!("Leaderboard saved ({} entries) to {}", self.entries.len(), path.display());
        Ok(())
    }

    pub fn add_entry(&mut self, entry: LeaderboardEntry) {
        self.entries.push(entry);
    }

    pub fn export_csv(&self, path: &Path) -> Result<(), StorageError> {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');
        for entry in &self.entries {
            out.push_str(&entry.csv_line());
            out.push('\n');
        }

        fs::write(path, out).map_err(|e| StorageError::io(path, e))?;
        log::info!("Leaderboard exported to CSV at {}", path.display());
        Ok(())
    }

    /// Best `n` entries: most points first, faster times break ties.
    pub fn top(&self, n: usize) -> Vec<&LeaderboardEntry> {
        let mut ranked: Vec<&LeaderboardEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(a.completion_secs.total_cmp(&b.completion_secs))
        });
        ranked.truncate(n);
        ranked
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn leaderboard_dir() -> Result<PathBuf, StorageError> {
    let data = dirs::data_dir().ok_or(StorageError::NoDirectory("data"))?;
    Ok(data.join("arithmo"))
}

pub fn json_path(dir: &Path, game: GameKind) -> PathBuf {
    dir.join(format!("{}.json", game.file_stem()))
}

pub fn csv_path(dir: &Path, game: GameKind) -> PathBuf {
    dir.join(format!("{}.csv", game.file_stem()))
}

/// Loads the latest file, appends, saves, and refreshes the CSV export.
pub fn record_entry(dir: &Path, entry: LeaderboardEntry) -> Result<Leaderboard, StorageError> {
    let game = entry.game;
    let json = json_path(dir, game);
    let mut board = Leaderboard::load(&json)?;
    board.add_entry(entry);
    board.save(&json)?;
    board.export_csv(&csv_path(dir, game))?;
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, points: u32, secs: f64) -> LeaderboardEntry {
        LeaderboardEntry::new(
            name.to_string(),
            GameKind::CompleteOperation,
            Difficulty::Easy,
            Some(OperatorKind::Addition),
            points,
            5,
            secs,
        )
    }

    #[test]
    fn test_record_appends_and_exports() {
        let dir = tempfile::tempdir().unwrap();

        record_entry(dir.path(), entry("anna", 3, 40.0)).unwrap();
        let board = record_entry(dir.path(), entry("luca", 5, 62.5)).unwrap();
        assert_eq!(board.entries.len(), 2);

        let reloaded =
            Leaderboard::load(&json_path(dir.path(), GameKind::CompleteOperation)).unwrap();
        assert_eq!(reloaded.entries.len(), 2);
        assert_eq!(reloaded.entries[0].player_name, "anna");

        let csv = fs::read_to_string(csv_path(dir.path(), GameKind::CompleteOperation)).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("luca,Complete the Operation,Easy,Addition,5,5,62.50,"));
    }

    #[test]
    fn test_games_use_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        record_entry(dir.path(), entry("anna", 3, 40.0)).unwrap();

        let quiz = Leaderboard::load(&json_path(dir.path(), GameKind::Quiz)).unwrap();
        assert!(quiz.is_empty());
    }

    #[test]
    fn test_top_orders_by_points_then_time() {
        let mut board = Leaderboard::new();
        board.add_entry(entry("slow", 4, 90.0));
        board.add_entry(entry("low", 2, 10.0));
        board.add_entry(entry("fast", 4, 30.0));

        let names: Vec<&str> = board.top(2).iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, vec!["fast", "slow"]);
    }

    #[test]
    fn test_csv_quotes_names_with_commas() {
        assert_eq!(csv_field("Rossi, M"), "\"Rossi, M\"");
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = json_path(dir.path(), GameKind::Quiz);
        fs::write(&path, "{").unwrap();
        assert!(matches!(
            Leaderboard::load(&path),
            Err(StorageError::Parse { .. })
        ));
    }
}
