use super::{Rational, narrow};
use crate::IntoOperand;
use log::debug;
use ratio64_error::{ErrorContext, RationalError};

// Results are not reduced. Products are computed in i128 and narrowed back,
// so a result either is exact or is an overflow error.
impl Rational {
    pub fn add<T: IntoOperand>(&self, other: T) -> Result<Rational, RationalError> {
        let other = other.into_operand(ErrorContext::Adding)?;
        add_ratio(self, &other)
    }

    pub fn subtract<T: IntoOperand>(&self, other: T) -> Result<Rational, RationalError> {
        let other = other.into_operand(ErrorContext::Subtracting)?;
        sub_ratio(self, &other)
    }

    pub fn multiply<T: IntoOperand>(&self, other: T) -> Result<Rational, RationalError> {
        let other = other.into_operand(ErrorContext::Multiplying)?;
        mul_ratio(self, &other)
    }

    pub fn divide<T: IntoOperand>(&self, other: T) -> Result<Rational, RationalError> {
        let other = other.into_operand(ErrorContext::Dividing)?;
        div_ratio(self, &other)
    }

    /// `-a/b`, the denominator is untouched.
    pub fn negate(&self) -> Result<Rational, RationalError> {
        let context = ErrorContext::Negating;
        self.validate(context)?;

        Ok(Rational {
            numer: narrow(-(self.numer as i128), context)?,
            denom: self.denom,
        })
    }

    /// `b/a`
    pub fn inverse(&self) -> Result<Rational, RationalError> {
        let context = ErrorContext::Inverting;
        self.validate(context)?;

        if self.numer == 0 {
            debug!("ratio64_number::Rational::inverse(), 0/{}", self.denom);
            return Err(RationalError::inverse_of_zero(context));
        }

        Ok(Rational {
            numer: self.denom,
            denom: self.numer,
        })
    }

    /// `|a|/|b|`, both parts are made non-negative.
    pub fn abs(&self) -> Result<Rational, RationalError> {
        let context = ErrorContext::TakingAbs;
        self.validate(context)?;

        Ok(Rational {
            numer: narrow((self.numer as i128).abs(), context)?,
            denom: narrow((self.denom as i128).abs(), context)?,
        })
    }

    /// `x^0` is `1/1` for every valid `x`, including `0/n`.
    /// A negative exponent is the inverse of the positive power, so `(0/n)^-1` is an error.
    pub fn pow(&self, exponent: i32) -> Result<Rational, RationalError> {
        let context = ErrorContext::Powering;
        self.validate(context)?;

        match exponent {
            0 => Ok(Rational::one()),
            _ if exponent > 0 => self.pow_unsigned(exponent as u32),
            _ => {
                let power = self.pow_unsigned(exponent.unsigned_abs())?;

                power.inverse().map_err(|e| RationalError { context, ..e })
            },
        }
    }

    fn pow_unsigned(&self, exponent: u32) -> Result<Rational, RationalError> {
        let context = ErrorContext::Powering;
        let overflow = || {
            debug!("ratio64_number::Rational::pow(), ({}/{})^{exponent}", self.numer, self.denom);
            RationalError::overflow(context)
        };

        Ok(Rational {
            numer: self.numer.checked_pow(exponent).ok_or_else(overflow)?,
            denom: self.denom.checked_pow(exponent).ok_or_else(overflow)?,
        })
    }
}

/// `(a·d + b·c) / (b·d)`
pub fn add_ratio(lhs: &Rational, rhs: &Rational) -> Result<Rational, RationalError> {
    let context = ErrorContext::Adding;
    lhs.validate(context)?;
    rhs.validate(context)?;

    let lhs_numer = lhs.numer as i128 * rhs.denom as i128;
    let rhs_numer = rhs.numer as i128 * lhs.denom as i128;

    // `i64::MIN * i64::MIN` twice doesn't fit in i128
    let res_numer = lhs_numer.checked_add(rhs_numer).ok_or_else(|| {
        debug!("ratio64_number::add_ratio(), {lhs_numer} + {rhs_numer} does not fit in i128");
        RationalError::overflow(context)
    })?;
    let res_denom = lhs.denom as i128 * rhs.denom as i128;

    Ok(Rational {
        numer: narrow(res_numer, context)?,
        denom: narrow(res_denom, context)?,
    })
}

/// `(a·d − b·c) / (b·d)`
pub fn sub_ratio(lhs: &Rational, rhs: &Rational) -> Result<Rational, RationalError> {
    let context = ErrorContext::Subtracting;
    lhs.validate(context)?;
    rhs.validate(context)?;

    let lhs_numer = lhs.numer as i128 * rhs.denom as i128;
    let rhs_numer = rhs.numer as i128 * lhs.denom as i128;

    let res_numer = lhs_numer.checked_sub(rhs_numer).ok_or_else(|| {
        debug!("ratio64_number::sub_ratio(), {lhs_numer} - {rhs_numer} does not fit in i128");
        RationalError::overflow(context)
    })?;
    let res_denom = lhs.denom as i128 * rhs.denom as i128;

    Ok(Rational {
        numer: narrow(res_numer, context)?,
        denom: narrow(res_denom, context)?,
    })
}

/// `(a·c) / (b·d)`
pub fn mul_ratio(lhs: &Rational, rhs: &Rational) -> Result<Rational, RationalError> {
    let context = ErrorContext::Multiplying;
    lhs.validate(context)?;
    rhs.validate(context)?;

    let res_numer = lhs.numer as i128 * rhs.numer as i128;
    let res_denom = lhs.denom as i128 * rhs.denom as i128;

    Ok(Rational {
        numer: narrow(res_numer, context)?,
        denom: narrow(res_denom, context)?,
    })
}

/// `lhs * inverse(rhs)`
pub fn div_ratio(lhs: &Rational, rhs: &Rational) -> Result<Rational, RationalError> {
    let context = ErrorContext::Dividing;
    lhs.validate(context)?;
    rhs.validate(context)?;

    if rhs.numer == 0 {
        debug!("ratio64_number::div_ratio(), {}/{} by 0/{}", lhs.numer, lhs.denom, rhs.denom);
        return Err(RationalError::division_by_zero(context));
    }

    let inv = rhs.inverse()?;

    mul_ratio(lhs, &inv).map_err(|e| RationalError { context, ..e })
}
