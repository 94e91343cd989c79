//! Operand ranges per operator and difficulty.

use std::ops::RangeInclusive;

use crate::models::{Difficulty, OperatorKind};

/// How the right operand is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RightRange {
    Fixed(RangeInclusive<u32>),
    /// `0..=left`, keeping subtraction non-negative.
    UpToLeft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    pub operator: OperatorKind,
    pub left: RangeInclusive<u32>,
    pub right: RightRange,
    pub max_result: u32,
    /// Reject problems needing a carry (addition) or a borrow (subtraction).
    pub no_regrouping: bool,
}

impl Policy {
    pub fn for_config(operator: OperatorKind, difficulty: Difficulty) -> Self {
        let no_regrouping = !difficulty.allows_regrouping();

        let (left, right, max_result) = match (operator, difficulty) {
            (OperatorKind::Addition, Difficulty::Easy) => (0..=49, RightRange::Fixed(0..=49), 100),
            (OperatorKind::Addition, Difficulty::Medium) => {
                (10..=89, RightRange::Fixed(10..=89), 99)
            }
            (OperatorKind::Addition, Difficulty::Hard) => {
                (100..=499, RightRange::Fixed(100..=499), 999)
            }
            (OperatorKind::Subtraction, Difficulty::Easy) => (0..=49, RightRange::UpToLeft, 49),
            (OperatorKind::Subtraction, Difficulty::Medium) => (10..=99, RightRange::UpToLeft, 99),
            (OperatorKind::Subtraction, Difficulty::Hard) => (100..=999, RightRange::UpToLeft, 999),
            (OperatorKind::Multiplication, Difficulty::Easy) => {
                (1..=5, RightRange::Fixed(1..=5), 25)
            }
            (OperatorKind::Multiplication, Difficulty::Medium) => {
                (0..=9, RightRange::Fixed(0..=9), 81)
            }
            (OperatorKind::Multiplication, Difficulty::Hard) => {
                (2..=9, RightRange::Fixed(2..=9), 81)
            }
        };

        Self {
            operator,
            left,
            right,
            max_result,
            no_regrouping,
        }
    }

    pub fn right_bounds(&self, left: u32) -> RangeInclusive<u32> {
        match &self.right {
            RightRange::Fixed(range) => range.clone(),
            RightRange::UpToLeft => 0..=left,
        }
    }

    /// Largest value each grid block (left, right, result) can hold.
    pub fn block_maxima(&self) -> [u32; 3] {
        let left_max = *self.left.end();
        let right_max = *self.right_bounds(left_max).end();
        let result_max = match self.operator {
            OperatorKind::Subtraction => left_max,
            _ => self
                .operator
                .apply(left_max, right_max)
                .unwrap_or(self.max_result),
        }
        .min(self.max_result);
        [left_max, right_max, result_max]
    }

    /// Whether a sampled pair satisfies every constraint of this policy.
    pub fn accepts(&self, left: u32, right: u32) -> bool {
        if !self.left.contains(&left) || !self.right_bounds(left).contains(&right) {
            return false;
        }

        let Some(result) = self.operator.apply(left, right) else {
            return false;
        };
        if result > self.max_result {
            return false;
        }

        if self.no_regrouping {
            return match self.operator {
                OperatorKind::Addition => !has_carry(left, right),
                OperatorKind::Subtraction => !has_borrow(left, right),
                OperatorKind::Multiplication => true,
            };
        }

        true
    }
}

/// True when any column of `left + right` sums to ten or more.
pub fn has_carry(mut left: u32, mut right: u32) -> bool {
    while left > 0 || right > 0 {
        if left % 10 + right % 10 >= 10 {
            return true;
        }
        left /= 10;
        right /= 10;
    }
    false
}

/// True when any digit of `right` exceeds the digit of `left` in the same column.
pub fn has_borrow(mut left: u32, mut right: u32) -> bool {
    while left > 0 || right > 0 {
        if right % 10 > left % 10 {
            return true;
        }
        left /= 10;
        right /= 10;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_carry() {
        assert!(!has_carry(23, 45));
        assert!(has_carry(25, 45));
        assert!(has_carry(50, 60));
        assert!(!has_carry(0, 0));
    }

    #[test]
    fn test_has_borrow() {
        assert!(!has_borrow(47, 23));
        assert!(has_borrow(42, 27));
        assert!(!has_borrow(40, 0));
        assert!(has_borrow(5, 10));
    }

    #[test]
    fn test_block_maxima() {
        let easy_add = Policy::for_config(OperatorKind::Addition, Difficulty::Easy);
        assert_eq!(easy_add.block_maxima(), [49, 49, 98]);

        let hard_sub = Policy::for_config(OperatorKind::Subtraction, Difficulty::Hard);
        assert_eq!(hard_sub.block_maxima(), [999, 999, 999]);

        let easy_mul = Policy::for_config(OperatorKind::Multiplication, Difficulty::Easy);
        assert_eq!(easy_mul.block_maxima(), [5, 5, 25]);
    }

    #[test]
    fn test_accepts_enforces_result_bound() {
        let medium_add = Policy::for_config(OperatorKind::Addition, Difficulty::Medium);
        assert!(medium_add.accepts(45, 47));
        assert!(!medium_add.accepts(55, 47));
    }
}
