use super::Rational;
use log::debug;
use ratio64_error::{ErrorContext, RationalError};

impl From<i64> for Rational {
    fn from(n: i64) -> Rational {
        Rational::from_int(n)
    }
}

// None of the conversions reduces the fraction first.
impl Rational {
    pub fn to_i8(&self) -> Result<i8, RationalError> {
        self.to_int("i8")
    }

    pub fn to_i16(&self) -> Result<i16, RationalError> {
        self.to_int("i16")
    }

    pub fn to_i32(&self) -> Result<i32, RationalError> {
        self.to_int("i32")
    }

    pub fn to_i64(&self) -> Result<i64, RationalError> {
        self.to_int("i64")
    }

    /// The `f32` nearest to the exact quotient.
    pub fn to_f32(&self) -> Result<f32, RationalError> {
        self.validate(ErrorContext::ConvertingToFloat)?;

        if self.numer == 0 {
            return Ok(0.0);
        }

        let (mantissa, exp) = round_quotient(self.numer.unsigned_abs(), self.denom.unsigned_abs(), f32::MANTISSA_DIGITS);

        // `exp` is in -87..=40, so `2^exp` is a normal f32 and the product is exact
        let abs = mantissa as f32 * f32::from_bits(((exp + 127) as u32) << 23);

        Ok(if self.is_negative_quotient() { -abs } else { abs })
    }

    /// The `f64` nearest to the exact quotient, ties to even. Neither part is
    /// rounded to `f64` before dividing.
    pub fn to_f64(&self) -> Result<f64, RationalError> {
        self.validate(ErrorContext::ConvertingToFloat)?;

        if self.numer == 0 {
            return Ok(0.0);
        }

        let (mantissa, exp) = round_quotient(self.numer.unsigned_abs(), self.denom.unsigned_abs(), f64::MANTISSA_DIGITS);

        // `exp` is in -116..=11
        let abs = mantissa as f64 * f64::from_bits(((exp + 1023) as u64) << 52);

        Ok(if self.is_negative_quotient() { -abs } else { abs })
    }

    fn is_negative_quotient(&self) -> bool {
        (self.numer < 0) != (self.denom < 0)
    }

    // Truncates toward zero. It's computed in i128 because `i64::MIN / -1` doesn't fit in i64.
    fn to_int<T: TryFrom<i128>>(&self, target: &'static str) -> Result<T, RationalError> {
        self.validate(ErrorContext::ConvertingToInt)?;

        let quotient = self.numer as i128 / self.denom as i128;

        T::try_from(quotient).map_err(|_| {
            debug!("ratio64_number: {}/{} = {quotient} does not fit in {target}", self.numer, self.denom);
            RationalError::out_of_range(target)
        })
    }
}

/// `numer / denom` rounded once to `digits` significant bits, ties to even.
/// Returns `(mantissa, exp)` where the rounded quotient is `mantissa * 2^exp`.
/// `numer` and `denom` must not be 0.
fn round_quotient(numer: u64, denom: u64, digits: u32) -> (u64, i32) {
    let (numer, denom) = (numer as u128, denom as u128);
    let bit_len = |n: u128| (128 - n.leading_zeros()) as i32;

    // `numer * 2^shift / denom` is in `2^(digits - 1)..2^(digits + 1)`
    let mut shift = digits as i32 + bit_len(denom) - bit_len(numer);
    let (mut quotient, mut rem) = div_shifted(numer, denom, shift);

    if quotient < 1 << digits {
        shift += 1;
        (quotient, rem) = div_shifted(numer, denom, shift);
    }

    // `quotient` has `digits + 1` bits: the lowest one decides the rounding,
    // `rem` tells whether anything below it is left.
    let mut mantissa = (quotient >> 1) as u64;

    if quotient & 1 == 1 && (rem != 0 || mantissa & 1 == 1) {
        mantissa += 1;
    }

    (mantissa, 1 - shift)
}

// `numer * 2^shift` divided by `denom`, never shifting a value past 2^118
fn div_shifted(numer: u128, denom: u128, shift: i32) -> (u128, u128) {
    if shift >= 0 {
        let numer = numer << shift;
        (numer / denom, numer % denom)
    }

    else {
        let denom = denom << -shift;
        (numer / denom, numer % denom)
    }
}

macro_rules! try_from_rational {
    ($ty: ty, $method: ident) => {
        impl TryFrom<&Rational> for $ty {
            type Error = RationalError;

            fn try_from(r: &Rational) -> Result<$ty, RationalError> {
                r.$method()
            }
        }

        impl TryFrom<Rational> for $ty {
            type Error = RationalError;

            fn try_from(r: Rational) -> Result<$ty, RationalError> {
                r.$method()
            }
        }
    };
}

try_from_rational!(i8, to_i8);
try_from_rational!(i16, to_i16);
try_from_rational!(i32, to_i32);
try_from_rational!(i64, to_i64);
try_from_rational!(f32, to_f32);
try_from_rational!(f64, to_f64);
