use super::slots::{expected_digits, Slot, BLOCK_COUNT, MAX_DIGITS};
use crate::error::EngineError;
use crate::models::Problem;

/// Outcome of checking a learner's slots against a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Per slot; inactive slots always read `true`.
    pub slots: Vec<bool>,
    pub all_correct: bool,
}

impl Verdict {
    pub fn incorrect_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, ok)| !**ok)
            .map(|(i, _)| i)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_digits: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(MAX_DIGITS)
    }
}

impl Validator {
    pub fn new(max_digits: usize) -> Self {
        Self { max_digits }
    }

    pub fn slot_count(&self) -> usize {
        BLOCK_COUNT * self.max_digits
    }

    /// Expected slots for left operand, right operand and result, in order.
    pub fn expected(&self, problem: &Problem) -> Result<Vec<Slot>, EngineError> {
        let mut expected = Vec::with_capacity(self.slot_count());
        for value in problem.blocks() {
            expected.extend(expected_digits(value, self.max_digits)?);
        }
        Ok(expected)
    }

    pub fn validate(
        &self,
        problem: &Problem,
        placed: &[Slot],
        active: &[bool],
    ) -> Result<Verdict, EngineError> {
        let expected_len = self.slot_count();
        if placed.len() != expected_len || active.len() != expected_len {
            return Err(EngineError::LengthMismatch {
                expected: expected_len,
                placed: placed.len(),
                active: active.len(),
            });
        }

        let expected = self.expected(problem)?;
        log::debug!("Placed digits: {:?}", placed);
        log::debug!("Expected digits: {:?}", expected);

        let slots: Vec<bool> = placed
            .iter()
            .zip(&expected)
            .zip(active)
            .enumerate()
            .map(|(i, ((placed, expected), &is_active))| {
                let ok = !is_active || placed == expected;
                if !ok {
                    log::debug!(
                        "Slot {} incorrect: expected {:?}, placed {:?}",
                        i,
                        expected,
                        placed
                    );
                }
                ok
            })
            .collect();

        let all_correct = slots.iter().all(|&ok| ok);
        Ok(Verdict { slots, all_correct })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::slots::SlotLayout;
    use crate::models::{Difficulty, OperatorKind};

    fn slots(text: &str) -> Vec<Slot> {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect()
    }

    fn all_active() -> Vec<bool> {
        vec![true; 9]
    }

    #[test]
    fn test_padding_block_correct_only_when_blank() {
        let problem = Problem::new(5, 3, OperatorKind::Addition).unwrap();
        let validator = Validator::default();

        let verdict = validator
            .validate(&problem, &slots("__5 __3 __8"), &all_active())
            .unwrap();
        assert!(verdict.all_correct);

        let verdict = validator
            .validate(&problem, &slots("_05 __3 __8"), &all_active())
            .unwrap();
        assert!(!verdict.all_correct);
        assert_eq!(&verdict.slots[0..3], &[true, false, true]);
        assert_eq!(verdict.incorrect_slots().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_zero_operand_must_be_entered() {
        let problem = Problem::new(0, 7, OperatorKind::Addition).unwrap();
        let validator = Validator::default();

        let verdict = validator
            .validate(&problem, &slots("___ __7 __7"), &all_active())
            .unwrap();
        assert!(!verdict.all_correct);
        assert!(!verdict.slots[2]);

        let verdict = validator
            .validate(&problem, &slots("__0 __7 __7"), &all_active())
            .unwrap();
        assert!(verdict.all_correct);
    }

    #[test]
    fn test_zero_result() {
        let problem = Problem::new(42, 42, OperatorKind::Subtraction).unwrap();
        let verdict = Validator::default()
            .validate(&problem, &slots("_42 _42 __0"), &all_active())
            .unwrap();
        assert!(verdict.all_correct);
    }

    #[test]
    fn test_inactive_slot_is_ignored() {
        let problem = Problem::new(12, 34, OperatorKind::Addition).unwrap();
        let mut active = all_active();
        active[0] = false;

        let verdict = Validator::default()
            .validate(&problem, &slots("912 _34 _46"), &active)
            .unwrap();
        assert!(verdict.all_correct);
        assert!(verdict.slots[0]);
    }

    #[test]
    fn test_layout_mask_from_config() {
        let problem = Problem::new(3, 4, OperatorKind::Multiplication).unwrap();
        let layout =
            SlotLayout::for_config(OperatorKind::Multiplication, Difficulty::Medium, MAX_DIGITS);

        // Hundreds of the result block is disabled, so stray digits there are ignored.
        let verdict = Validator::default()
            .validate(&problem, &slots("773 __4 112"), layout.active())
            .unwrap();
        assert!(verdict.all_correct);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let problem = Problem::new(25, 13, OperatorKind::Subtraction).unwrap();
        let placed = slots("_25 _13 _21");
        let validator = Validator::default();
        let first = validator.validate(&problem, &placed, &all_active()).unwrap();
        let second = validator.validate(&problem, &placed, &all_active()).unwrap();
        assert_eq!(first, second);
        assert!(!first.all_correct);
    }

    #[test]
    fn test_length_mismatch() {
        let problem = Problem::new(1, 1, OperatorKind::Addition).unwrap();
        let err = Validator::default()
            .validate(&problem, &slots("__1 __1"), &all_active())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::LengthMismatch {
                expected: 9,
                placed: 6,
                active: 9
            }
        );
    }

    #[test]
    fn test_short_active_mask() {
        let problem = Problem::new(1, 1, OperatorKind::Addition).unwrap();
        let err = Validator::default()
            .validate(&problem, &slots("__1 __1 __2"), &[true; 8])
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::LengthMismatch {
                expected: 9,
                placed: 9,
                active: 8
            }
        );
    }

    #[test]
    fn test_result_too_wide_for_grid() {
        let problem = Problem::new(60, 50, OperatorKind::Addition).unwrap();
        let err = Validator::new(2)
            .validate(&problem, &[None; 6], &[true; 6])
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::DigitOverflow {
                value: 110,
                max_digits: 2
            }
        );
    }
}
