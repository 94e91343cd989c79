use std::io;
use std::path::PathBuf;

use crate::display::display_leaderboard;
use crate::models::leaderboard::{self, Leaderboard};
use crate::models::GameKind;

const SHOWN_ENTRIES: usize = 10;

pub fn handle_leaderboard(game: GameKind, csv: Option<PathBuf>) {
    let board = match leaderboard::leaderboard_dir()
        .and_then(|dir| Leaderboard::load(&leaderboard::json_path(&dir, game)))
    {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Failed to load leaderboard: {}", e);
            std::process::exit(1);
        }
    };

    match csv {
        Some(path) => match board.export_csv(&path) {
            Ok(()) => println!(
                "Exported {} entries to {}",
                board.entries.len(),
                path.display()
            ),
            Err(e) => {
                eprintln!("Failed to export leaderboard: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let mut out = io::stdout().lock();
            if let Err(e) = display_leaderboard(&mut out, game, &board, SHOWN_ENTRIES) {
                eprintln!("Failed to print leaderboard: {}", e);
                std::process::exit(1);
            }
        }
    }
}
