use std::io::{self, BufRead, Write};

use chrono::Local;
use rand::Rng;
use rand_pcg::Pcg32;

use super::{elapsed_secs, read_reply, Reply, SessionSettings, SessionSummary};
use crate::display;
use crate::engine::choices::{choices, CHOICE_COUNT};
use crate::engine::OperationGenerator;
use crate::error::InputError;

/// Multiple-choice arithmetic. Only a right first answer scores.
pub struct QuizSession<G = Pcg32> {
    settings: SessionSettings,
    generator: OperationGenerator<G>,
}

impl QuizSession<Pcg32> {
    pub fn new(settings: SessionSettings) -> Self {
        let generator = match settings.seed {
            Some(seed) => OperationGenerator::from_seed(seed),
            None => OperationGenerator::from_entropy(),
        };
        Self::with_generator(settings, generator)
    }
}

fn parse_choice(line: &str) -> Result<usize, InputError> {
    let choice: usize = line
        .parse()
        .map_err(|_| InputError::NotANumber(line.to_string()))?;
    if (1..=CHOICE_COUNT).contains(&choice) {
        Ok(choice - 1)
    } else {
        Err(InputError::OutOfRange { max: CHOICE_COUNT })
    }
}

impl<G: Rng> QuizSession<G> {
    pub fn with_generator(settings: SessionSettings, generator: OperationGenerator<G>) -> Self {
        Self {
            settings,
            generator,
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
            let options = choices(&problem, self.settings.difficulty, self.generator.rng_mut());
            writeln!(out)?;
            display::display_choices(out, round, rounds, &problem, &options)?;

            let mut first_attempt = true;
            loop {
                write!(out, "  answer: ")?;
                out.flush()?;

                let line = match read_reply(input)? {
                    Reply::Line(line) => line,
                    Reply::Skip => {
                        writeln!(out, "Skipped. The answer was {}.", problem.result())?;
                        continue 'rounds;
                    }
                    Reply::Quit => break 'rounds,
                };

                let index = match parse_choice(&line) {
                    Ok(index) => index,
                    Err(e) => {
                        writeln!(out, "  {}", e)?;
                        continue;
                    }
                };

                if options[index] == problem.result() {
                    if first_attempt {
                        points += 1;
                    }
                    writeln!(out, "{}", display::positive_feedback(self.generator.rng_mut()))?;
                    break;
                }

                first_attempt = false;
                writeln!(out, "{}", display::retry_feedback(self.generator.rng_mut()))?;
            }
        }

        Ok(SessionSummary {
            points,
            max_points: rounds,
            elapsed_secs: elapsed_secs(started),
        })
    }
}
