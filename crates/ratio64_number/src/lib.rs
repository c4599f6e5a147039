#![deny(unused_imports)]

mod operand;
mod ratio;


pub use operand::IntoOperand;
pub use ratio::{
    Rational,
    cmp::cmp_ratio,
    op::{
        add_ratio,
        div_ratio,
        mul_ratio,
        sub_ratio,
    },
};
pub use ratio64_error::{ErrorContext, ErrorKind, InvalidArgument, RationalError};

// greatest common divisor, `gcd(0, 0)` is 0
pub(crate) fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    }

    else {
        gcd(b, a % b)
    }
}
