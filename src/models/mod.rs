pub mod config;
pub mod difficulty;
pub mod leaderboard;
pub mod operator;
pub mod problem;

// config and leaderboard are accessed as crate::models::config::{...} and
// crate::models::leaderboard::{...}
pub use difficulty::Difficulty;
pub use leaderboard::GameKind;
pub use operator::OperatorKind;
pub use problem::Problem;
