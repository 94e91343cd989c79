use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Whether column carries (addition) and borrows (subtraction) may appear.
    pub fn allows_regrouping(&self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    /// Number of blocks laid out in the ordering puzzle.
    pub fn block_count(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_easy_forbids_regrouping() {
        assert!(!Difficulty::Easy.allows_regrouping());
        assert!(Difficulty::Medium.allows_regrouping());
        assert!(Difficulty::Hard.allows_regrouping());
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(back, Difficulty::Hard);
    }
}
