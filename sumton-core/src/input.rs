use std::num::IntErrorKind;

use crate::error::SumError;

/// Parses user-supplied text into the `n` handed to a strategy.
///
/// Negative integers parse successfully; it is up to the strategies to
/// reject them, so every strategy reports the same error for the same input.
/// Fractions, exponents and anything else that is not a plain integer are
/// rejected here.
pub fn parse_count(text: &str) -> Result<i64, SumError> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => match trimmed.parse::<u64>() {
            Ok(n) => Err(SumError::Overflow { n }),
            Err(_) => Err(SumError::OutOfRange {
                input: trimmed.to_string(),
            }),
        },
        Err(_) => Err(SumError::invalid(trimmed)),
    }
}
