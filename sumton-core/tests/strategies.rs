use sumton_core::{
    cross_check, cross_check_range, sum_closed_form, sum_linear, sum_paired_ends, Strategy,
    SumError, MAX_N,
};

fn triangular(n: u64) -> u64 {
    n * (n + 1) / 2
}

#[test]
fn empty_sum_is_zero() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.compute(0), Ok(0), "{strategy} at n=0");
    }
}

#[test]
fn single_term_is_one() {
    for strategy in Strategy::ALL {
        assert_eq!(strategy.compute(1), Ok(1), "{strategy} at n=1");
    }
}

#[test]
fn known_values() {
    for (n, expected) in [(2, 3), (5, 15), (10, 55), (100, 5050), (1000, 500_500)] {
        assert_eq!(sum_linear(n), Ok(expected), "linear at n={n}");
        assert_eq!(sum_paired_ends(n), Ok(expected), "paired-ends at n={n}");
        assert_eq!(sum_closed_form(n), Ok(expected), "closed-form at n={n}");
    }
}

#[test]
fn strategies_agree_on_first_ten_thousand() {
    for n in 0..=10_000i64 {
        let expected = triangular(n as u64);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.compute(n), Ok(expected), "{strategy} at n={n}");
        }
    }
}

#[test]
fn each_step_adds_the_next_term() {
    for strategy in Strategy::ALL {
        let mut previous = strategy.compute(0).expect("n=0");
        for n in 1..=2_000i64 {
            let current = strategy.compute(n).expect("in range");
            assert_eq!(current, previous + n as u64, "{strategy} at n={n}");
            previous = current;
        }
    }
}

#[test]
fn negative_input_is_rejected_by_every_strategy() {
    for n in [-1i64, -2, -100, i64::MIN] {
        let expected = SumError::InvalidInput {
            input: n.to_string(),
        };
        for strategy in Strategy::ALL {
            assert_eq!(strategy.compute(n), Err(expected.clone()), "{strategy} at n={n}");
        }
    }
}

#[test]
fn results_past_sixty_four_bits_are_rejected_by_every_strategy() {
    let first_too_large = MAX_N as i64 + 1;
    for n in [first_too_large, i64::MAX] {
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.compute(n),
                Err(SumError::Overflow { n: n as u64 }),
                "{strategy} at n={n}"
            );
        }
    }
}

#[test]
fn closed_form_is_exact_at_the_largest_supported_n() {
    assert_eq!(
        sum_closed_form(MAX_N as i64),
        Ok(18_446_744_070_963_499_500)
    );
}

#[test]
fn sums_past_thirty_two_bits_stay_exact() {
    let n = 70_000i64;
    let expected = 2_450_035_000u64;
    assert!(expected > i32::MAX as u64);
    for strategy in Strategy::ALL {
        assert_eq!(strategy.compute(n), Ok(expected), "{strategy} at n={n}");
    }
}

#[test]
fn cross_check_reports_every_strategy() -> anyhow::Result<()> {
    let agreement = cross_check(7)?;
    assert_eq!(agreement.n, 7);
    assert_eq!(agreement.expected, 28);
    assert!(agreement.is_consistent());
    for strategy in Strategy::ALL {
        assert_eq!(agreement.value_of(strategy), Some(28));
    }
    Ok(())
}

#[test]
fn cross_check_range_covers_inclusive_bounds() -> anyhow::Result<()> {
    let report = cross_check_range(0, 10_000)?;
    assert_eq!(report.from, 0);
    assert_eq!(report.to, 10_000);
    assert_eq!(report.checked, 10_001);
    assert!(report.is_consistent(), "mismatches: {:?}", report.mismatches);
    Ok(())
}

#[test]
fn cross_check_range_rejects_bad_bounds() {
    assert_eq!(
        cross_check_range(5, 1),
        Err(SumError::InvalidInput {
            input: "5..=1".to_string()
        })
    );
    assert_eq!(
        cross_check_range(-1, 3),
        Err(SumError::InvalidInput {
            input: "-1".to_string()
        })
    );
}

#[test]
fn report_serializes_strategy_names() -> anyhow::Result<()> {
    let agreement = cross_check(4)?;
    let json = serde_json::to_value(&agreement)?;
    assert_eq!(json["expected"], 10);
    assert_eq!(json["results"][1][0], "paired-ends");
    assert_eq!(json["results"][1][1], 10);
    Ok(())
}

#[test]
fn error_messages_name_the_input() {
    let err = sum_linear(-4).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected a non-negative integer but got '-4'"
    );
    let err = sum_paired_ends(i64::MAX).unwrap_err();
    assert!(
        err.to_string().contains("largest supported n is 6074000999"),
        "{err}"
    );
}
