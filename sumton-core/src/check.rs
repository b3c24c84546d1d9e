use log::{debug, info};
use serde::Serialize;

use crate::error::SumError;
use crate::strategy::{validate, Strategy};

/// The outcome of running every strategy on one `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agreement {
    pub n: u64,
    /// `n * (n + 1) / 2`, computed in 128 bits.
    pub expected: u64,
    pub results: Vec<(Strategy, u64)>,
}

impl Agreement {
    pub fn is_consistent(&self) -> bool {
        self.results
            .iter()
            .all(|(_, value)| *value == self.expected)
    }

    pub fn value_of(&self, strategy: Strategy) -> Option<u64> {
        self.results
            .iter()
            .find(|(candidate, _)| *candidate == strategy)
            .map(|(_, value)| *value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub from: u64,
    pub to: u64,
    pub checked: u64,
    pub mismatches: Vec<Agreement>,
}

impl CheckReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

fn reference_sum(n: u64) -> Result<u64, SumError> {
    let wide = u128::from(n) * (u128::from(n) + 1) / 2;
    u64::try_from(wide).map_err(|_| SumError::Overflow { n })
}

/// Runs all three strategies on `n` and compares them with the reference sum.
pub fn cross_check(n: i64) -> Result<Agreement, SumError> {
    let checked = validate(n)?;
    let expected = reference_sum(checked)?;
    let results = Strategy::ALL
        .into_iter()
        .map(|strategy| strategy.compute(n).map(|value| (strategy, value)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Agreement {
        n: checked,
        expected,
        results,
    })
}

/// Cross-checks every `n` in `from..=to`.
pub fn cross_check_range(from: i64, to: i64) -> Result<CheckReport, SumError> {
    if from > to {
        return Err(SumError::invalid(format!("{from}..={to}")));
    }
    let start = validate(from)?;
    let end = validate(to)?;

    let mut mismatches = Vec::new();
    for n in from..=to {
        let agreement = cross_check(n)?;
        if !agreement.is_consistent() {
            debug!(
                "strategies disagree at n={}: expected {}, got {:?}",
                agreement.n, agreement.expected, agreement.results
            );
            mismatches.push(agreement);
        }
    }

    let report = CheckReport {
        from: start,
        to: end,
        checked: end - start + 1,
        mismatches,
    };
    info!(
        "cross-checked {} values in {}..={}: {} mismatches",
        report.checked,
        report.from,
        report.to,
        report.mismatches.len()
    );
    Ok(report)
}
