//! Answer options for the multiple-choice quiz.

use rand::seq::SliceRandom;
use rand::Rng;

use super::generator::MAX_RESAMPLES;
use super::policy::Policy;
use crate::models::{Difficulty, Problem};

pub const CHOICE_COUNT: usize = 3;

/// Three distinct shuffled answers, one of which is `problem.result()`.
///
/// Easy quizzes use uniformly random distractors. Harder tiers add one that
/// shares the correct answer's units digit, so the learner has to look past
/// the last column.
pub fn choices<R: Rng>(problem: &Problem, difficulty: Difficulty, rng: &mut R) -> Vec<u32> {
    let correct = problem.result();
    let max_answer = Policy::for_config(problem.operator(), difficulty)
        .max_result
        .max(10);

    let mut answers = vec![correct];

    if difficulty != Difficulty::Easy {
        let units = correct % 10;
        push_distinct(&mut answers, || rng.random_range(0..=9u32) * 10 + units);
    }
    while answers.len() < CHOICE_COUNT {
        push_distinct(&mut answers, || rng.random_range(0..=max_answer));
    }

    answers.shuffle(rng);
    answers
}

fn push_distinct(answers: &mut Vec<u32>, mut draw: impl FnMut() -> u32) {
    for _ in 0..MAX_RESAMPLES {
        let candidate = draw();
        if !answers.contains(&candidate) {
            answers.push(candidate);
            return;
        }
    }

    let fallback = (1..)
        .map(|k| answers[0] + k)
        .find(|candidate| !answers.contains(candidate))
        .unwrap_or_default();
    log::warn!("Distractor draws exhausted, using {}", fallback);
    answers.push(fallback);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OperatorKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_choices_are_distinct_and_contain_answer() {
        let mut rng = Pcg32::seed_from_u64(11);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for (l, r, op) in [
                (4, 5, OperatorKind::Addition),
                (30, 12, OperatorKind::Subtraction),
                (0, 9, OperatorKind::Multiplication),
            ] {
                let problem = Problem::new(l, r, op).unwrap();
                let options = choices(&problem, difficulty, &mut rng);
                assert_eq!(options.len(), CHOICE_COUNT);
                assert!(options.contains(&problem.result()));
                let mut sorted = options.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), CHOICE_COUNT);
            }
        }
    }

    #[test]
    fn test_medium_has_same_units_distractor() {
        let mut rng = Pcg32::seed_from_u64(12);
        let problem = Problem::new(23, 14, OperatorKind::Addition).unwrap();
        for _ in 0..50 {
            let options = choices(&problem, Difficulty::Medium, &mut rng);
            let same_units = options
                .iter()
                .filter(|&&a| a != 37 && a % 10 == 7)
                .count();
            assert!(same_units >= 1, "{:?}", options);
        }
    }

    #[test]
    fn test_push_distinct_fallback() {
        let mut answers = vec![5, 6];
        push_distinct(&mut answers, || 5);
        assert_eq!(answers, vec![5, 6, 7]);
    }
}
