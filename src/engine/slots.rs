//! Digit slot grid: three blocks (left operand, right operand, result),
//! each `max_digits` columns wide.

use crate::error::{EngineError, InputError};
use crate::models::{Difficulty, OperatorKind};

use super::policy::Policy;

pub const MAX_DIGITS: usize = 3;
pub const BLOCK_COUNT: usize = 3;

pub type Digit = u8;

/// `None` is an empty slot.
pub type Slot = Option<Digit>;

/// Number of decimal digits in `value`; zero is one digit wide.
pub fn digit_width(value: u32) -> usize {
    let mut width = 1;
    let mut rest = value / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}

/// Digits of `value`, most significant first, left-padded with empty slots.
///
/// Zero yields a single `0` digit, never an all-empty block.
pub fn expected_digits(value: u32, max_digits: usize) -> Result<Vec<Slot>, EngineError> {
    let width = digit_width(value);
    if width > max_digits {
        return Err(EngineError::DigitOverflow { value, max_digits });
    }

    let mut digits: Vec<Slot> = vec![None; max_digits];
    let mut rest = value;
    for slot in digits.iter_mut().rev().take(width) {
        *slot = Some((rest % 10) as Digit);
        rest /= 10;
    }
    Ok(digits)
}

/// Which slots are presented to the learner for one operator/difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotLayout {
    max_digits: usize,
    active: Vec<bool>,
}

impl SlotLayout {
    /// Every block keeps its rightmost columns active, as many as the widest
    /// value that block can take; leading columns are disabled.
    pub fn for_config(operator: OperatorKind, difficulty: Difficulty, max_digits: usize) -> Self {
        let maxima = Policy::for_config(operator, difficulty).block_maxima();
        let mut active = Vec::with_capacity(BLOCK_COUNT * max_digits);
        for max in maxima {
            let width = digit_width(max).min(max_digits);
            active.extend((0..max_digits).map(|col| col >= max_digits - width));
        }
        Self { max_digits, active }
    }

    #[cfg(test)]
    pub fn all_active(max_digits: usize) -> Self {
        Self {
            max_digits,
            active: vec![true; BLOCK_COUNT * max_digits],
        }
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn active(&self) -> &[bool] {
        &self.active
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn block(&self, index: usize) -> &[bool] {
        let start = index * self.max_digits;
        &self.active[start..start + self.max_digits]
    }
}

/// Parses one block of typed slots: `_ _ 5`, `__5`, or `. 0 5`.
pub fn parse_block(line: &str, max_digits: usize) -> Result<Vec<Slot>, InputError> {
    let trimmed = line.trim();
    let cells: Vec<String> = if trimmed.contains(char::is_whitespace) {
        trimmed.split_whitespace().map(str::to_string).collect()
    } else {
        trimmed.chars().map(|c| c.to_string()).collect()
    };

    if cells.len() != max_digits {
        return Err(InputError::WrongCellCount {
            expected: max_digits,
            found: cells.len(),
        });
    }

    cells.iter().map(|cell| parse_cell(cell)).collect()
}

fn parse_cell(cell: &str) -> Result<Slot, InputError> {
    match cell {
        "_" | "." => Ok(None),
        _ => match cell.parse::<Digit>() {
            Ok(d) if d <= 9 && cell.len() == 1 => Ok(Some(d)),
            _ => Err(InputError::BadCell(cell.to_string())),
        },
    }
}
