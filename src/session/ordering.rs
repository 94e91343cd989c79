use std::io::{self, BufRead, Write};

use chrono::{DateTime, Local};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{elapsed_secs, read_reply, Reply, SessionSettings, SessionSummary};
use crate::display;
use crate::engine::OrderingPuzzle;
use crate::error::{EngineError, InputError};

pub const ORDERING_TURNS: u32 = 3;

/// Sort-the-blocks game, a fixed number of turns per session.
pub struct OrderingSession {
    settings: SessionSettings,
    rng: Pcg32,
}

fn parse_numbers(line: &str) -> Result<Vec<u32>, InputError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse()
                .map_err(|_| InputError::NotANumber(part.to_string()))
        })
        .collect()
}

impl OrderingSession {
    pub fn new(settings: SessionSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_rng(&mut rand::rng()),
        };
        Self { settings, rng }
    }

    pub fn run(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<SessionSummary> {
        let started: DateTime<Local> = Local::now();
        let mut points = 0;

        'turns: for turn in 1..=ORDERING_TURNS {
            let puzzle = OrderingPuzzle::generate(self.settings.difficulty, &mut self.rng);
            writeln!(out)?;
            display::display_puzzle(out, turn, ORDERING_TURNS, &puzzle)?;

            loop {
                write!(out, "  order: ")?;
                out.flush()?;

                let line = match read_reply(input)? {
                    Reply::Line(line) => line,
                    Reply::Skip => {
                        let solution: Vec<String> =
                            puzzle.solution().iter().map(u32::to_string).collect();
                        writeln!(out, "Skipped. The order was {}.", solution.join(" "))?;
                        continue 'turns;
                    }
                    Reply::Quit => break 'turns,
                };

                let answer = match parse_numbers(&line) {
                    Ok(answer) => answer,
                    Err(e) => {
                        writeln!(out, "  {}", e)?;
                        continue;
                    }
                };

                let verdict = match puzzle.check(&answer) {
                    Ok(verdict) => verdict,
                    Err(e @ EngineError::NotAPermutation) => {
                        writeln!(out, "  {}", e)?;
                        continue;
                    }
                    Err(e) => return Err(io::Error::other(e)),
                };
                display::display_positions(out, &answer, &verdict.positions)?;

                if verdict.all_correct {
                    points += 1;
                    writeln!(out, "{}", display::positive_feedback(&mut self.rng))?;
                    break;
                }
                writeln!(out, "{}", display::retry_feedback(&mut self.rng))?;
            }
        }

        Ok(SessionSummary {
            points,
            max_points: ORDERING_TURNS,
            elapsed_secs: elapsed_secs(started),
        })
    }
}
