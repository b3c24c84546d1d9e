use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SumError;

/// Largest `n` whose triangular number `n * (n + 1) / 2` fits in a `u64`.
pub const MAX_N: u64 = 6_074_000_999;

/// One of the interchangeable ways of summing `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    Linear,
    PairedEnds,
    ClosedForm,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Linear, Strategy::PairedEnds, Strategy::ClosedForm];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Linear => "linear",
            Strategy::PairedEnds => "paired-ends",
            Strategy::ClosedForm => "closed-form",
        }
    }

    pub fn compute(self, n: i64) -> Result<u64, SumError> {
        match self {
            Strategy::Linear => sum_linear(n),
            Strategy::PairedEnds => sum_paired_ends(n),
            Strategy::ClosedForm => sum_closed_form(n),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == value)
            .ok_or_else(|| {
                let known = Strategy::ALL
                    .iter()
                    .map(|strategy| strategy.name())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("unknown strategy '{value}' (expected one of: {known})")
            })
    }
}

/// Checks the shared precondition of every strategy: `0 <= n <= MAX_N`.
pub fn validate(n: i64) -> Result<u64, SumError> {
    let n = u64::try_from(n).map_err(|_| SumError::invalid(n))?;
    if n > MAX_N {
        return Err(SumError::Overflow { n });
    }
    Ok(n)
}

/// Sums `1..=n` with a running total.
pub fn sum_linear(n: i64) -> Result<u64, SumError> {
    let n = validate(n)?;
    let mut total = 0u64;
    let mut i = 1u64;
    while i <= n {
        total += i;
        i += 1;
    }
    Ok(total)
}

/// Sums `1..=n` by materializing the sequence and adding pairs taken from
/// opposite ends, plus the middle element when `n` is odd.
pub fn sum_paired_ends(n: i64) -> Result<u64, SumError> {
    let n = validate(n)?;
    let len = usize::try_from(n).map_err(|_| SumError::Capacity { n })?;
    let mut sequence = reserve_sequence(n, len)?;
    sequence.extend(1..=n);

    let mid = len / 2;
    let mut total: u64 = sequence
        .iter()
        .zip(sequence.iter().rev())
        .take(mid)
        .map(|(low, high)| low + high)
        .sum();
    if len % 2 != 0 {
        total += sequence[mid];
    }
    Ok(total)
}

/// Allocates room for `len` terms, reporting allocation failure as `Capacity`.
fn reserve_sequence(n: u64, len: usize) -> Result<Vec<u64>, SumError> {
    let mut sequence = Vec::new();
    sequence
        .try_reserve_exact(len)
        .map_err(|_| SumError::Capacity { n })?;
    Ok(sequence)
}

/// Sums `1..=n` with Gauss's formula, split on parity so no step divides.
pub fn sum_closed_form(n: i64) -> Result<u64, SumError> {
    let n = validate(n)?;
    let mid = n / 2;
    let mut total = (1 + n) * mid;
    if n % 2 != 0 {
        total += mid + 1;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn unknown_name_lists_known_strategies() {
        let err = "gauss".parse::<Strategy>().unwrap_err();
        assert!(err.contains("linear, paired-ends, closed-form"), "{err}");
    }

    #[test]
    fn failed_reservation_is_a_capacity_error() {
        assert_eq!(
            reserve_sequence(MAX_N, usize::MAX),
            Err(SumError::Capacity { n: MAX_N })
        );
    }

    #[test]
    fn reservation_holds_every_term() {
        let sequence = reserve_sequence(10, 10).expect("small reservation");
        assert!(sequence.is_empty());
        assert!(sequence.capacity() >= 10);
    }

    #[test]
    fn validate_accepts_bounds() {
        assert_eq!(validate(0), Ok(0));
        assert_eq!(validate(MAX_N as i64), Ok(MAX_N));
    }
}
