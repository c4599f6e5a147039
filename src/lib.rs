#![deny(unused_imports)]

//! Exact rationals over `i64`.
//!
//! `Rational` keeps whatever numerator and denominator it's given: nothing is
//! reduced or sign-normalized unless `reduce` is called. Every operation
//! checks its inputs again before it computes, so a value whose denominator
//! was set to 0 by hand is reported instead of silently producing `inf`.

pub use ratio64_error::{
    ErrorContext,
    ErrorKind,
    InvalidArgument,
    RationalError,
};
pub use ratio64_number::{
    IntoOperand,
    Rational,
    add_ratio,
    cmp_ratio,
    div_ratio,
    mul_ratio,
    sub_ratio,
};
