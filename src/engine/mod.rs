//! Arithmetic core: problem generation, slot validation, and the two
//! side puzzles (multiple choice and ordering).

pub mod choices;
pub mod generator;
pub mod ordering;
pub mod policy;
pub mod slots;
pub mod validator;

pub use generator::OperationGenerator;
pub use ordering::OrderingPuzzle;
pub use slots::{Slot, SlotLayout, MAX_DIGITS};
pub use validator::{Validator, Verdict};
