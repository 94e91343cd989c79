use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::policy::Policy;
use crate::error::EngineError;
use crate::models::{Difficulty, OperatorKind, Problem};

/// Draws allowed before falling back to direct construction.
pub const MAX_RESAMPLES: u32 = 1_000;

/// Produces problems and remembers the last one for rendering and validation.
pub struct OperationGenerator<R = Pcg32> {
    rng: R,
    current: Option<Problem>,
}

impl OperationGenerator<Pcg32> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(Pcg32::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> OperationGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, current: None }
    }

    pub fn generate(&mut self, operator: OperatorKind, difficulty: Difficulty) -> Problem {
        let policy = Policy::for_config(operator, difficulty);

        let problem = match self.resample(&policy) {
            Some(problem) => problem,
            None => {
                log::warn!(
                    "No {:?}/{:?} problem after {} draws, constructing one directly",
                    operator,
                    difficulty,
                    MAX_RESAMPLES
                );
                self.construct(&policy)
            }
        };

        log::debug!("Generated {} {}", problem, problem.result());
        self.current = Some(problem);
        problem
    }

    pub fn current_problem(&self) -> Result<Problem, EngineError> {
        self.current.ok_or(EngineError::NotInitialized)
    }

    /// Shares the generator's random source with other game pieces.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    fn sample(&mut self, policy: &Policy) -> (u32, u32) {
        let left = self.rng.random_range(policy.left.clone());
        let right = self.rng.random_range(policy.right_bounds(left));
        (left, right)
    }

    fn resample(&mut self, policy: &Policy) -> Option<Problem> {
        (0..MAX_RESAMPLES)
            .map(|_| self.sample(policy))
            .filter(|&(left, right)| policy.accepts(left, right))
            .find_map(|(left, right)| Problem::new(left, right, policy.operator).ok())
    }

    /// Builds a pair that keeps the no-carry/no-borrow and result bounds,
    /// widening the right operand's lower bound if it has to.
    fn construct(&mut self, policy: &Policy) -> Problem {
        let left = self.rng.random_range(policy.left.clone());
        let bounds = policy.right_bounds(left);

        let right = match policy.operator {
            OperatorKind::Addition => {
                let cap = policy
                    .max_result
                    .saturating_sub(left)
                    .min(*bounds.end());
                if policy.no_regrouping {
                    let r = self.digitwise(left, |d| 9 - d);
                    if r > cap { 0 } else { r }
                } else {
                    self.rng.random_range((*bounds.start()).min(cap)..=cap)
                }
            }
            OperatorKind::Subtraction => {
                if policy.no_regrouping {
                    self.digitwise(left, |d| d)
                } else {
                    self.rng.random_range(0..=left)
                }
            }
            OperatorKind::Multiplication => self.rng.random_range(bounds),
        };

        // Subtraction keeps right <= left and addition stays under the cap,
        // so the operator can neither underflow nor overflow here.
        Problem::new(left, right, policy.operator)
            .expect("constructed operands stay within the policy bounds")
    }

    /// Random number whose digit in each column of `left` is at most `limit(digit)`.
    fn digitwise(&mut self, mut left: u32, limit: impl Fn(u32) -> u32) -> u32 {
        let mut value = 0;
        let mut place = 1;
        while left > 0 {
            value += self.rng.random_range(0..=limit(left % 10)) * place;
            left /= 10;
            place *= 10;
        }
        value
    }
}
