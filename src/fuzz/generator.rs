use super::case::FuzzCase;
use super::error::GenerateError;
use super::oracle::{classify, Oracle};
use rand::Rng;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;
pub const DEFAULT_MAGNITUDE_BOUND: f64 = 500.0;

/// Bounds the sample-and-ask loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Produces fuzz cases whose expectations come from an oracle
pub struct FuzzGenerator<O, R> {
    oracle: O,
    rng: R,
    units: Vec<String>,
    policy: RetryPolicy,
    magnitude_bound: f64,
}

impl<O: Oracle, R: Rng> FuzzGenerator<O, R> {
    pub fn new(oracle: O, rng: R, units: Vec<String>) -> Self {
        Self {
            oracle,
            rng,
            units,
            policy: RetryPolicy::default(),
            magnitude_bound: DEFAULT_MAGNITUDE_BOUND,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_magnitude_bound(mut self, bound: f64) -> Self {
        self.magnitude_bound = bound;
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Sample until the oracle accepts a case or the retry budget runs out
    ///
    /// Unusable oracle answers (nonzero exit, reciprocal conversion, output
    /// with no number) discard the sample. Failing to run the oracle at all
    /// is returned immediately.
    pub fn generate(&mut self) -> Result<FuzzCase, GenerateError> {
        if self.units.is_empty() {
            return Err(GenerateError::EmptyUniverse);
        }

        for attempt in 1..=self.policy.max_attempts {
            let case = FuzzCase::sample(&mut self.rng, &self.units, self.magnitude_bound)
                .ok_or(GenerateError::EmptyUniverse)?;
            let from = case.from.oracle_expr();
            let to = case.to.oracle_expr();

            let outcome = self
                .oracle
                .convert(&case.magnitude, &from, &to)
                .and_then(|stdout| classify(&stdout));

            match outcome {
                Ok(expected) => {
                    info!(attempt, %from, %to, %expected, "accepted fuzz case");
                    return Ok(case.with_expected(expected));
                }
                Err(e) if e.is_retryable() => {
                    debug!(attempt, %from, %to, reason = %e, "rejected sample");
                }
                Err(e) => return Err(e.into()),
            }
        }

        warn!(attempts = self.policy.max_attempts, "retry budget exhausted");
        Err(GenerateError::Exhausted {
            attempts: self.policy.max_attempts,
        })
    }
}
