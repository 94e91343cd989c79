//! Number-ordering puzzle: put a handful of blocks in ascending or
//! descending order.

use rand::Rng;

use crate::error::EngineError;
use crate::models::Difficulty;

pub const BLOCK_MIN: u32 = 1;
pub const BLOCK_MAX: u32 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn display_name(&self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderVerdict {
    pub positions: Vec<bool>,
    pub all_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingPuzzle {
    numbers: Vec<u32>,
    direction: Direction,
}

impl OrderingPuzzle {
    pub fn new(numbers: Vec<u32>, direction: Direction) -> Self {
        Self { numbers, direction }
    }

    /// Random blocks (repeats allowed) and a coin flip for the direction.
    pub fn generate<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let numbers = (0..difficulty.block_count())
            .map(|_| rng.random_range(BLOCK_MIN..=BLOCK_MAX))
            .collect();
        let direction = if rng.random_bool(0.5) {
            Direction::Ascending
        } else {
            Direction::Descending
        };
        Self::new(numbers, direction)
    }

    /// Blocks in the order they were dealt.
    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn solution(&self) -> Vec<u32> {
        let mut sorted = self.numbers.clone();
        match self.direction {
            Direction::Ascending => sorted.sort_unstable(),
            Direction::Descending => sorted.sort_unstable_by(|a, b| b.cmp(a)),
        }
        sorted
    }

    /// Marks each position right or wrong. The answer must use exactly the
    /// dealt blocks.
    pub fn check(&self, answer: &[u32]) -> Result<OrderVerdict, EngineError> {
        let solution = self.solution();

        let mut sorted_answer = answer.to_vec();
        sorted_answer.sort_unstable();
        let mut sorted_numbers = self.numbers.clone();
        sorted_numbers.sort_unstable();
        if sorted_answer != sorted_numbers {
            return Err(EngineError::NotAPermutation);
        }

        let positions: Vec<bool> = answer
            .iter()
            .zip(&solution)
            .map(|(given, expected)| given == expected)
            .collect();
        let all_correct = positions.iter().all(|&ok| ok);
        log::debug!(
            "Ordering {:?} ({}) -> {:?}",
            answer,
            self.direction.display_name(),
            positions
        );

        Ok(OrderVerdict {
            positions,
            all_correct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generate_block_counts() {
        let mut rng = Pcg32::seed_from_u64(21);
        for (difficulty, count) in [
            (Difficulty::Easy, 3),
            (Difficulty::Medium, 5),
            (Difficulty::Hard, 8),
        ] {
            let puzzle = OrderingPuzzle::generate(difficulty, &mut rng);
            assert_eq!(puzzle.numbers().len(), count);
            assert!(puzzle
                .numbers()
                .iter()
                .all(|n| (BLOCK_MIN..=BLOCK_MAX).contains(n)));
        }
    }

    #[test]
    fn test_check_ascending() {
        let puzzle = OrderingPuzzle::new(vec![40, 7, 19], Direction::Ascending);
        let verdict = puzzle.check(&[7, 19, 40]).unwrap();
        assert!(verdict.all_correct);

        let verdict = puzzle.check(&[19, 7, 40]).unwrap();
        assert_eq!(verdict.positions, vec![false, false, true]);
        assert!(!verdict.all_correct);
    }

    #[test]
    fn test_check_descending_with_repeats() {
        let puzzle = OrderingPuzzle::new(vec![5, 12, 5], Direction::Descending);
        assert_eq!(puzzle.solution(), vec![12, 5, 5]);
        assert!(puzzle.check(&[12, 5, 5]).unwrap().all_correct);
    }

    #[test]
    fn test_check_rejects_foreign_numbers() {
        let puzzle = OrderingPuzzle::new(vec![1, 2, 3], Direction::Ascending);
        assert_eq!(puzzle.check(&[1, 2, 4]), Err(EngineError::NotAPermutation));
        assert_eq!(puzzle.check(&[1, 2]), Err(EngineError::NotAPermutation));
    }
}
