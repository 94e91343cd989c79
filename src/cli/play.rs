use std::io;

use super::PlayArgs;
use crate::display;
use crate::models::config::{self, UserConfig};
use crate::models::leaderboard::{self, LeaderboardEntry};
use crate::models::GameKind;
use crate::session::{
    CompleteOperationSession, OrderingSession, QuizSession, SessionSettings, SessionSummary,
};

fn resolve_settings(user_config: &UserConfig, args: &PlayArgs) -> SessionSettings {
    let mut settings = SessionSettings::from_config(user_config);
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
    }
    if let Some(operator) = args.operator {
        settings.operator = operator;
    }
    if let Some(rounds) = args.rounds {
        settings.rounds = rounds.max(1);
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings
}

fn run_game(game: GameKind, settings: SessionSettings) -> io::Result<SessionSummary> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    let title = format!(
        "ARITHMO - {} ({})",
        game.display_name(),
        settings.difficulty.display_name()
    );
    display::banner(&mut out, &title)?;

    let summary = match game {
        GameKind::CompleteOperation => {
            CompleteOperationSession::new(settings).run(&mut input, &mut out)?
        }
        GameKind::Quiz => QuizSession::new(settings).run(&mut input, &mut out)?,
        GameKind::Ordering => OrderingSession::new(settings).run(&mut input, &mut out)?,
    };

    writeln_summary(&mut out, game, &summary)?;
    Ok(summary)
}

fn writeln_summary(
    out: &mut impl io::Write,
    game: GameKind,
    summary: &SessionSummary,
) -> io::Result<()> {
    writeln!(out)?;
    display::display_summary(out, game, summary)
}

pub fn play(game: GameKind, args: PlayArgs) {
    let mut user_config = config::load_config();
    let settings = resolve_settings(&user_config, &args);
    let player_name = args
        .name
        .clone()
        .unwrap_or_else(|| user_config.player_name.clone());
    let difficulty = settings.difficulty;
    let operator = match game {
        GameKind::Ordering => None,
        _ => Some(settings.operator),
    };

    log::info!("Starting {:?} for {} with {:?}", game, player_name, settings);
    let summary = match run_game(game, settings) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Game aborted: {}", e);
            std::process::exit(1);
        }
    };

    if args.no_record {
        return;
    }

    let entry = LeaderboardEntry::new(
        player_name,
        game,
        difficulty,
        operator,
        summary.points,
        summary.max_points,
        summary.elapsed_secs,
    );
    match leaderboard::leaderboard_dir().and_then(|dir| leaderboard::record_entry(&dir, entry)) {
        Ok(board) => println!("Result saved ({} entries on the leaderboard).", board.entries.len()),
        Err(e) => eprintln!("Failed to save leaderboard: {}", e),
    }

    user_config.record_game(summary.points);
    if let Err(e) = config::save_config(&user_config) {
        eprintln!("Failed to save progress: {}", e);
        std::process::exit(1);
    }
}
