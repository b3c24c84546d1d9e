use std::borrow::Cow;
use std::fmt;

fn escape_single_quotes(input: &str) -> Cow<'_, str> {
    if input.contains('\'') {
        Cow::Owned(input.replace('\'', "\\'"))
    } else {
        Cow::Borrowed(input)
    }
}

fn format_operation_error(
    module: &str,
    operation: &str,
    target: Option<&str>,
    error: impl fmt::Display,
) -> String {
    match target {
        Some(target) => {
            let escaped = escape_single_quotes(target);
            format!("{module}.{operation}('{}') failed: {error}", escaped)
        }
        None => format!("{module}.{operation} failed: {error}"),
    }
}

/// Message for a strategy that refused or failed to sum `input`.
pub fn strategy_error(strategy: &str, input: &str, error: impl fmt::Display) -> String {
    format_operation_error("sum", strategy, Some(input), error)
}

/// Message for a cross-check over `from..=to`.
pub fn check_error(from: &str, to: &str, error: impl fmt::Display) -> String {
    let target = format!("{from}..={to}");
    format_operation_error("sum", "check", Some(&target), error)
}

pub fn cli_error(operation: &str, error: impl fmt::Display) -> String {
    format_operation_error("sumton.cli", operation, None, error)
}
