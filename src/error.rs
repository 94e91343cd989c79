//! Error types for the arithmetic engine and for on-disk state.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::OperatorKind;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("no problem has been generated yet")]
    NotInitialized,

    #[error("grid expects {expected} slots, got {placed} digits and {active} mask entries")]
    LengthMismatch {
        expected: usize,
        placed: usize,
        active: usize,
    },

    #[error("{value} does not fit in {max_digits} digit slots")]
    DigitOverflow { value: u32, max_digits: usize },

    #[error("{left} - {right} would be negative")]
    NegativeDifference { left: u32, right: u32 },

    #[error("{left} {operator:?} {right} overflows")]
    ResultOverflow {
        left: u32,
        right: u32,
        operator: OperatorKind,
    },

    #[error("answer is not a rearrangement of the puzzle numbers")]
    NotAPermutation,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not determine the {0} directory")]
    NoDirectory(&'static str),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A learner's typed answer that could not be read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected {expected} cells, got {found}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("'{0}' is not a digit or '_'")]
    BadCell(String),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("choose an option between 1 and {max}")]
    OutOfRange { max: usize },
}
