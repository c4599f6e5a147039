use super::Rational;
use ratio64_error::{ErrorContext, RationalError};
use std::cmp::Ordering;

// Equality is about values, not representations: `1/2 == 2/4 == -1/-2`.
// An invalid rational is not equal to anything, not even to itself.
impl PartialEq for Rational {
    fn eq(&self, other: &Rational) -> bool {
        self.try_eq(other).unwrap_or(false)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        cmp_ratio(self, other).ok()
    }
}

impl Rational {
    /// Unlike `==`, it fails if either side is invalid.
    pub fn try_eq(&self, other: &Rational) -> Result<bool, RationalError> {
        Ok(cmp_ratio(self, other)? == Ordering::Equal)
    }
}

/// compares `a·d` and `c·b`, the direction flips when `b·d < 0`
pub fn cmp_ratio(lhs: &Rational, rhs: &Rational) -> Result<Ordering, RationalError> {
    let context = ErrorContext::Comparing;
    lhs.validate(context)?;
    rhs.validate(context)?;

    // never overflows
    let lhs_numer = lhs.numer as i128 * rhs.denom as i128;
    let rhs_numer = rhs.numer as i128 * lhs.denom as i128;
    let ordering = lhs_numer.cmp(&rhs_numer);

    if (lhs.denom < 0) != (rhs.denom < 0) {
        Ok(ordering.reverse())
    }

    else {
        Ok(ordering)
    }
}
