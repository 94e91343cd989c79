use std::io::{self, BufRead, Write};

use chrono::Local;
use rand::Rng;
use rand_pcg::Pcg32;

use super::{elapsed_secs, read_reply, Reply, SessionSettings, SessionSummary};
use crate::display::{self, BLOCK_NAMES};
use crate::engine::slots::parse_block;
use crate::engine::{OperationGenerator, Slot, SlotLayout, Validator, Verdict, MAX_DIGITS};
use crate::error::EngineError;

/// Fill-in-the-digits game: each round the learner writes both operands and
/// the result into the slot grid.
pub struct CompleteOperationSession<G = Pcg32> {
    settings: SessionSettings,
    generator: OperationGenerator<G>,
    validator: Validator,
    layout: SlotLayout,
}

impl CompleteOperationSession<Pcg32> {
    pub fn new(settings: SessionSettings) -> Self {
        let generator = match settings.seed {
            Some(seed) => OperationGenerator::from_seed(seed),
            None => OperationGenerator::from_entropy(),
        };
        Self::with_generator(settings, generator)
    }
}

enum Entry {
    Slots(Vec<Slot>),
    Skip,
    Quit,
}

impl<G: Rng> CompleteOperationSession<G> {
    pub fn with_generator(settings: SessionSettings, generator: OperationGenerator<G>) -> Self {
        let layout = SlotLayout::for_config(settings.operator, settings.difficulty, MAX_DIGITS);
        Self {
            settings,
            generator,
            validator: Validator::new(MAX_DIGITS),
            layout,
        }
    }

    pub fn run(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<SessionSummary> {
        let started = Local::now();
        let rounds = self.settings.rounds;
        let mut points = 0;

        'rounds: for round in 1..=rounds {
            let problem = self
                .generator
                .generate(self.settings.operator, self.settings.difficulty);
            writeln!(out)?;
            display::display_problem(out, round, rounds, &problem, &self.layout)?;

            loop {
                let placed = match self.read_grid(input, out)? {
                    Entry::Slots(placed) => placed,
                    Entry::Skip => {
                        writeln!(
                            out,
                            "Skipped. The answer was {} {} {} = {}.",
                            problem.left(),
                            problem.operator().symbol(),
                            problem.right(),
                            problem.result()
                        )?;
                        continue 'rounds;
                    }
                    Entry::Quit => break 'rounds,
                };

                let verdict = self.check(&placed).map_err(io::Error::other)?;
                display::display_verdict(out, &placed, &self.layout, &verdict)?;

                if verdict.all_correct {
                    points += 1;
                    writeln!(out, "{}", display::positive_feedback(self.generator.rng_mut()))?;
                    break;
                }
                writeln!(out, "{}", display::retry_feedback(self.generator.rng_mut()))?;
            }
        }

        Ok(SessionSummary {
            points,
            max_points: rounds,
            elapsed_secs: elapsed_secs(started),
        })
    }

    /// Validates a filled grid against the problem currently on screen.
    fn check(&self, placed: &[Slot]) -> Result<Verdict, EngineError> {
        let problem = self.generator.current_problem()?;
        self.validator.validate(&problem, placed, self.layout.active())
    }

    fn read_grid(&self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Entry> {
        let mut placed = Vec::with_capacity(self.validator.slot_count());

        for name in BLOCK_NAMES {
            loop {
                write!(out, "  {}: ", name)?;
                out.flush()?;

                match read_reply(input)? {
                    Reply::Quit => return Ok(Entry::Quit),
                    Reply::Skip => return Ok(Entry::Skip),
                    Reply::Line(line) => match parse_block(&line, self.layout.max_digits()) {
                        Ok(block) => {
                            placed.extend(block);
                            break;
                        }
                        Err(e) => writeln!(out, "  {}", e)?,
                    },
                }
            }
        }

        Ok(Entry::Slots(placed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, OperatorKind};

    fn settings(rounds: u32) -> SessionSettings {
        SessionSettings {
            difficulty: Difficulty::Easy,
            operator: OperatorKind::Addition,
            rounds,
            seed: Some(7),
        }
    }

    fn block(value: u32) -> String {
        format!("{:_>3}", value)
    }

    /// Answers every round correctly by peeking at a generator with the same seed.
    fn correct_script(rounds: u32) -> String {
        let mut peek = OperationGenerator::from_seed(7);
        let mut script = String::new();
        for _ in 0..rounds {
            let p = peek.generate(OperatorKind::Addition, Difficulty::Easy);
            // Feedback draws from the same rng after each validation.
            let _ = display::positive_feedback(peek.rng_mut());
            for value in p.blocks() {
                script.push_str(&block(value));
                script.push('\n');
            }
        }
        script
    }

    #[test]
    fn test_all_correct_scores_every_round() {
        let mut session = CompleteOperationSession::new(settings(3));
        let script = correct_script(3);
        let mut out = Vec::new();

        let summary = session.run(&mut script.as_bytes(), &mut out).unwrap();
        assert_eq!(summary.points, 3);
        assert_eq!(summary.max_points, 3);
    }

    #[test]
    fn test_check_before_first_round() {
        let session = CompleteOperationSession::new(settings(1));
        assert_eq!(session.check(&[None; 9]), Err(EngineError::NotInitialized));
    }

    #[test]
    fn test_check_uses_current_problem() {
        let mut session = CompleteOperationSession::new(settings(1));
        let problem = session
            .generator
            .generate(OperatorKind::Addition, Difficulty::Easy);
        let placed: Vec<Slot> = correct_script(1)
            .lines()
            .flat_map(|line| parse_block(line, MAX_DIGITS).unwrap())
            .collect();

        let verdict = session.check(&placed).unwrap();
        assert!(verdict.all_correct, "{}", problem);
    }

    #[test]
    fn test_skip_and_eof() {
        let mut session = CompleteOperationSession::new(settings(3));
        let mut out = Vec::new();

        let summary = session.run(&mut "skip\n".as_bytes(), &mut out).unwrap();
        assert_eq!(summary.points, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Skipped. The answer was"));
        assert!(text.contains(" + "));
        assert!(!text.contains("Round 3/3"));
    }

    #[test]
    fn test_bad_input_is_reprompted() {
        let mut session = CompleteOperationSession::new(settings(1));
        let script = format!("12345\n{}", correct_script(1));
        let mut out = Vec::new();

        let summary = session.run(&mut script.as_bytes(), &mut out).unwrap();
        assert_eq!(summary.points, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("expected 3 cells, got 5"));
    }

    #[test]
    fn test_wrong_answer_then_retry() {
        let mut session = CompleteOperationSession::new(settings(1));
        let script = format!("999\n999\n999\n{}", correct_script(1));
        let mut out = Vec::new();

        let summary = session.run(&mut script.as_bytes(), &mut out).unwrap();
        assert_eq!(summary.points, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("9!"));
    }
}
