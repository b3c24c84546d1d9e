use thiserror::Error;

use crate::strategy::MAX_N;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    /// N was negative, fractional or not a number at all.
    #[error("expected a non-negative integer but got '{input}'")]
    InvalidInput { input: String },
    #[error("sum of 1..={n} does not fit in 64 bits (largest supported n is {max})", max = MAX_N)]
    Overflow { n: u64 },
    /// N was typed as an integer too large for any integer type the strategies take.
    #[error("sum of 1..={input} does not fit in 64 bits (largest supported n is {max})", max = MAX_N)]
    OutOfRange { input: String },
    #[error("cannot allocate a sequence of {n} integers")]
    Capacity { n: u64 },
}

impl SumError {
    pub(crate) fn invalid(input: impl ToString) -> Self {
        SumError::InvalidInput {
            input: input.to_string(),
        }
    }
}
