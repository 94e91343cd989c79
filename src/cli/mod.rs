mod difficulty_cmd;
mod leaderboard_cmd;
mod play;
mod selection;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{config, Difficulty, GameKind, OperatorKind};

#[derive(Parser)]
#[command(name = "arithmo")]
#[command(about = "Arithmetic practice games in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One-run overrides of the saved selections.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,
    #[arg(short, long, value_enum)]
    pub operator: Option<OperatorKind>,
    #[arg(short, long)]
    pub rounds: Option<u32>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(short, long)]
    pub name: Option<String>,
    /// Do not write the result to the leaderboard
    #[arg(long)]
    pub no_record: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the digits of an operation
    Play(PlayArgs),
    /// Pick the right answer out of three
    Quiz(PlayArgs),
    /// Sort number blocks
    Order(PlayArgs),
    Difficulty {
        #[arg(value_enum)]
        level: Option<Difficulty>,
    },
    Operator {
        #[arg(value_enum)]
        operator: Option<OperatorKind>,
    },
    Name {
        name: Option<String>,
    },
    Leaderboard {
        #[arg(value_enum, default_value = "complete-operation")]
        game: GameKind,
        /// Write the leaderboard to this CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    Info,
}

pub fn run(cli: Cli) {
    match cli.command {
        None => play::play(GameKind::CompleteOperation, PlayArgs::default()),
        Some(Commands::Play(args)) => play::play(GameKind::CompleteOperation, args),
        Some(Commands::Quiz(args)) => play::play(GameKind::Quiz, args),
        Some(Commands::Order(args)) => play::play(GameKind::Ordering, args),
        Some(Commands::Difficulty { level }) => difficulty_cmd::handle_difficulty(level),
        Some(Commands::Operator { operator }) => selection::handle_operator(operator),
        Some(Commands::Name { name }) => selection::handle_name(name),
        Some(Commands::Leaderboard { game, csv }) => leaderboard_cmd::handle_leaderboard(game, csv),
        Some(Commands::Info) => generic_info(),
    }
}

fn generic_info() {
    let user_config = config::load_config();

    println!("Player: {}", user_config.player_name);
    println!("Difficulty: {}", user_config.difficulty.display_name());
    println!("Operator: {}", user_config.operator.display_name());
    println!("Rounds per game: {}", user_config.rounds);
    println!("\nGames played: {}", user_config.games_played);
    println!("Total points: {}", user_config.total_points);
}
