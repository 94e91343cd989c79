use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::operator::OperatorKind;
use crate::error::StorageError;

pub const DEFAULT_ROUNDS: u32 = 5;

/// Persisted player preferences and totals.
///
/// This is the single selection object handed to every game session; nothing
/// about the current difficulty or operator lives in global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub player_name: String,
    pub difficulty: Difficulty,
    pub operator: OperatorKind,
    pub rounds: u32,
    /// Fixed RNG seed, for reproducible sessions.
    pub seed: Option<u64>,
    pub games_played: u32,
    pub total_points: u32,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            difficulty: Difficulty::Easy,
            operator: OperatorKind::Addition,
            rounds: DEFAULT_ROUNDS,
            seed: None,
            games_played: 0,
            total_points: 0,
        }
    }
}

impl UserConfig {
    pub fn record_game(&mut self, points: u32) {
        self.games_played += 1;
        self.total_points += points;
    }
}

pub fn get_config_path() -> Result<PathBuf, StorageError> {
    let home = dirs::home_dir().ok_or(StorageError::NoDirectory("home"))?;
    Ok(home.join(".config").join("arithmo").join("config.json"))
}

pub fn load_config() -> UserConfig {
    match get_config_path() {
        Ok(path) => load_config_from(&path),
        Err(e) => {
            log::warn!("{}, using default config", e);
            UserConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> UserConfig {
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed config {}: {}", path.display(), e);
            UserConfig::default()
        }),
        Err(e) => {
            log::warn!("Could not read config {}: {}", path.display(), e);
            UserConfig::default()
        }
    }
}

pub fn save_config(config: &UserConfig) -> Result<(), StorageError> {
    save_config_to(&get_config_path()?, config)
}

pub fn save_config_to(path: &Path, config: &UserConfig) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents).map_err(|e| StorageError::io(path, e))?;
    log::info!("Config saved to {}", path.display());
    Ok(())
}
