use std::fmt;

use serde::Serialize;

use super::operator::OperatorKind;
use crate::error::EngineError;

/// One arithmetic task. `result` is always derived from the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Problem {
    left: u32,
    right: u32,
    operator: OperatorKind,
    result: u32,
}

impl Problem {
    pub fn new(left: u32, right: u32, operator: OperatorKind) -> Result<Self, EngineError> {
        let result = operator.apply(left, right).ok_or(match operator {
            OperatorKind::Subtraction => EngineError::NegativeDifference { left, right },
            _ => EngineError::ResultOverflow {
                left,
                right,
                operator,
            },
        })?;

        Ok(Self {
            left,
            right,
            operator,
            result,
        })
    }

    pub fn left(&self) -> u32 {
        self.left
    }

    pub fn right(&self) -> u32 {
        self.right
    }

    pub fn operator(&self) -> OperatorKind {
        self.operator
    }

    pub fn result(&self) -> u32 {
        self.result
    }

    /// Values of the three grid blocks, in layout order.
    pub fn blocks(&self) -> [u32; 3] {
        [self.left, self.right, self.result]
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} =",
            self.left,
            self.operator.symbol(),
            self.right
        )
    }
}
