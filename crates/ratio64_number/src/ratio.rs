use crate::gcd;
use log::{debug, trace};
use ratio64_error::{ErrorContext, RationalError};

pub mod cmp;
mod convert;
pub mod op;

/// `numer / denom`
///
/// Neither the sign nor the magnitude is normalized: `(2, 4)`, `(1, 2)` and
/// `(-1, -2)` are different states of the same value, and they compare equal.
/// Use `reduce` for the canonical form.
///
/// The fields are public. If `denom` is set to 0 by hand, the value becomes
/// invalid and every operation on it returns an error.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    pub numer: i64,
    pub denom: i64,
}

impl Rational {
    pub fn new(numer: i64, denom: i64) -> Result<Self, RationalError> {
        if denom == 0 {
            debug!("ratio64_number::Rational::new(), {numer}/0");
            Err(RationalError::zero_denominator(ErrorContext::Constructing).with_note(format!("numerator: {numer}")))
        }

        else {
            Ok(Rational { numer, denom })
        }
    }

    // It's the only way integers become rationals.
    pub fn from_int(n: i64) -> Self {
        Rational { numer: n, denom: 1 }
    }

    pub fn zero() -> Self {
        Rational::from_int(0)
    }

    pub fn one() -> Self {
        Rational::from_int(1)
    }

    pub fn is_valid(&self) -> bool {
        self.denom != 0
    }

    /// Every operation calls this on all of its inputs before it computes anything.
    pub fn validate(&self, context: ErrorContext) -> Result<(), RationalError> {
        if self.denom == 0 {
            debug!("ratio64_number: {}/0 while {context}", self.numer);
            Err(RationalError::invalid_operand(context).with_note(format!("numerator: {}", self.numer)))
        }

        else {
            Ok(())
        }
    }

    pub fn is_zero(&self) -> Result<bool, RationalError> {
        self.validate(ErrorContext::Validating)?;

        Ok(self.numer == 0)
    }

    pub fn is_integer(&self) -> Result<bool, RationalError> {
        self.validate(ErrorContext::Validating)?;

        // `i64::MIN % -1` panics
        Ok(self.numer as i128 % self.denom as i128 == 0)
    }

    /// -1, 0 or 1
    pub fn signum(&self) -> Result<i64, RationalError> {
        self.validate(ErrorContext::Validating)?;

        Ok(self.numer.signum() * self.denom.signum())
    }

    /// Lowest terms, positive denominator. `0/n` becomes `0/1`.
    pub fn reduce(&self) -> Result<Rational, RationalError> {
        let context = ErrorContext::Reducing;
        self.validate(context)?;

        // `denom` is not 0, so neither is `r`
        let r = gcd(self.numer.unsigned_abs(), self.denom.unsigned_abs()) as i128;
        let mut numer = self.numer as i128 / r;
        let mut denom = self.denom as i128 / r;

        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }

        trace!("ratio64_number::Rational::reduce(), {}/{} -> {numer}/{denom}", self.numer, self.denom);

        Ok(Rational {
            numer: narrow(numer, context)?,
            denom: narrow(denom, context)?,
        })
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

pub(crate) fn narrow(n: i128, context: ErrorContext) -> Result<i64, RationalError> {
    i64::try_from(n).map_err(|_| {
        debug!("ratio64_number: {n} does not fit in i64 while {context}");
        RationalError::overflow(context)
    })
}
