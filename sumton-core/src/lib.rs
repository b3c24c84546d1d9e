mod check;
mod error;
mod input;
mod strategy;

pub use crate::check::{cross_check, cross_check_range, Agreement, CheckReport};
pub use crate::error::SumError;
pub use crate::input::parse_count;
pub use crate::strategy::{
    sum_closed_form, sum_linear, sum_paired_ends, validate, Strategy, MAX_N,
};
