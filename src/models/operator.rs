use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorKind {
    Addition,
    Subtraction,
    Multiplication,
}

impl OperatorKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            OperatorKind::Addition => "Addition",
            OperatorKind::Subtraction => "Subtraction",
            OperatorKind::Multiplication => "Multiplication",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            OperatorKind::Addition => '+',
            OperatorKind::Subtraction => '-',
            OperatorKind::Multiplication => '×',
        }
    }

    /// Applies the operator. `None` when a subtraction would go negative.
    pub fn apply(&self, left: u32, right: u32) -> Option<u32> {
        match self {
            OperatorKind::Addition => left.checked_add(right),
            OperatorKind::Subtraction => left.checked_sub(right),
            OperatorKind::Multiplication => left.checked_mul(right),
        }
    }
}
