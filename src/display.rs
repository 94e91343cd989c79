use std::io::{self, Write};

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::engine::slots::{Slot, BLOCK_COUNT};
use crate::engine::{OrderingPuzzle, SlotLayout, Verdict};
use crate::models::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::models::{GameKind, Problem};
use crate::session::SessionSummary;

pub const BLOCK_NAMES: [&str; BLOCK_COUNT] = ["left operand", "right operand", "result"];

const POSITIVE_FEEDBACK: [&str; 4] = [
    "Great job! That's right!",
    "Fantastic! Correct answer!",
    "Right answer! Keep it up!",
    "Very good! That's correct.",
];

const RETRY_FEEDBACK: [&str; 4] = [
    "Almost there! Try again.",
    "You're close. Have another go!",
    "Oops! Try one more time.",
    "Don't give up! You nearly have it.",
];

pub fn positive_feedback<R: Rng>(rng: &mut R) -> &'static str {
    POSITIVE_FEEDBACK.choose(rng).copied().unwrap_or(POSITIVE_FEEDBACK[0])
}

pub fn retry_feedback<R: Rng>(rng: &mut R) -> &'static str {
    RETRY_FEEDBACK.choose(rng).copied().unwrap_or(RETRY_FEEDBACK[0])
}

pub fn banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}\n", "=".repeat(60))
}

/// Shows the operation and which columns the learner fills in (`_`) or
/// can ignore (`#`).
pub fn display_problem(
    out: &mut impl Write,
    round: u32,
    rounds: u32,
    problem: &Problem,
    layout: &SlotLayout,
) -> io::Result<()> {
    writeln!(out, "Round {}/{}:  {}", round, rounds, problem)?;
    for (index, name) in BLOCK_NAMES.iter().enumerate() {
        let cells: Vec<&str> = layout
            .block(index)
            .iter()
            .map(|&active| if active { "_" } else { "#" })
            .collect();
        writeln!(out, "  {:<14} [{}]", name, cells.join(" "))?;
    }
    writeln!(
        out,
        "Type each block as {} cells, '_' for an empty slot (or 'skip').",
        layout.max_digits()
    )
}

fn slot_char(slot: &Slot) -> char {
    match slot {
        Some(d) => char::from(b'0' + d),
        None => '_',
    }
}

pub fn display_verdict(
    out: &mut impl Write,
    placed: &[Slot],
    layout: &SlotLayout,
    verdict: &Verdict,
) -> io::Result<()> {
    let width = layout.max_digits();
    let wrong: Vec<usize> = verdict.incorrect_slots().collect();
    for (index, name) in BLOCK_NAMES.iter().enumerate() {
        let cells: Vec<String> = (index * width..(index + 1) * width)
            .map(|i| {
                if !layout.active()[i] {
                    "#".to_string()
                } else if wrong.contains(&i) {
                    format!("{}!", slot_char(&placed[i]))
                } else {
                    format!("{} ", slot_char(&placed[i]))
                }
            })
            .collect();
        writeln!(out, "  {:<14} [{}]", name, cells.join(" "))?;
    }
    if !wrong.is_empty() {
        writeln!(out, "  {} slot(s) to fix", wrong.len())?;
    }
    Ok(())
}

pub fn display_choices(
    out: &mut impl Write,
    round: u32,
    rounds: u32,
    problem: &Problem,
    options: &[u32],
) -> io::Result<()> {
    writeln!(out, "Question {}/{}:  {} ?", round, rounds, problem)?;
    let listed: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, answer)| format!("{}) {}", i + 1, answer))
        .collect();
    writeln!(out, "  {}", listed.join("   "))
}

pub fn display_puzzle(
    out: &mut impl Write,
    turn: u32,
    turns: u32,
    puzzle: &OrderingPuzzle,
) -> io::Result<()> {
    let numbers: Vec<String> = puzzle.numbers().iter().map(u32::to_string).collect();
    writeln!(out, "Turn {}/{}:  {}", turn, turns, numbers.join("  "))?;
    writeln!(
        out,
        "Put them in {} order, separated by spaces.",
        puzzle.direction().display_name()
    )
}

pub fn display_positions(
    out: &mut impl Write,
    answer: &[u32],
    positions: &[bool],
) -> io::Result<()> {
    let marked: Vec<String> = answer
        .iter()
        .zip(positions)
        .map(|(n, ok)| if *ok { n.to_string() } else { format!("{}!", n) })
        .collect();
    writeln!(out, "  {}", marked.join("  "))
}

pub fn format_duration(total_secs: f64) -> String {
    let total = total_secs.max(0.0).round() as i64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

pub fn display_summary(
    out: &mut impl Write,
    game: GameKind,
    summary: &SessionSummary,
) -> io::Result<()> {
    writeln!(out, "========================================")?;
    writeln!(out, "  {} COMPLETE!", game.display_name().to_uppercase())?;
    writeln!(out, "========================================")?;
    writeln!(out)?;
    writeln!(out, "  Points:     {}/{}", summary.points, summary.max_points)?;
    writeln!(out, "  Time taken: {}", format_duration(summary.elapsed_secs))?;
    writeln!(out)?;
    writeln!(out, "========================================")
}

fn entry_line(rank: usize, entry: &LeaderboardEntry) -> String {
    format!(
        "{:>3}. {:<16} {:>3}/{:<3} {:>9}  {:<7} {:<15} {}",
        rank,
        entry.player_name,
        entry.points,
        entry.max_points,
        format_duration(entry.completion_secs),
        entry.difficulty.display_name(),
        entry.operator.map(|o| o.display_name()).unwrap_or("-"),
        entry.date
    )
}

pub fn display_leaderboard(
    out: &mut impl Write,
    game: GameKind,
    board: &Leaderboard,
    limit: usize,
) -> io::Result<()> {
    banner(out, &format!("Leaderboard: {}", game.display_name()))?;
    if board.is_empty() {
        return writeln!(out, "No entries yet.");
    }
    for (i, entry) in board.top(limit).into_iter().enumerate() {
        writeln!(out, "{}", entry_line(i + 1, entry))?;
    }
    Ok(())
}
