use crate::Rational;
use log::debug;
use ratio64_error::{ErrorContext, RationalError};

/// Anything that can be the right-hand side of an arithmetic operation.
///
/// Integers are promoted with `Rational::from_int`, so `n` always becomes `n/1`.
/// `None` is an absent operand, and it's an error.
pub trait IntoOperand {
    fn into_operand(self, context: ErrorContext) -> Result<Rational, RationalError>;
}

impl IntoOperand for Rational {
    fn into_operand(self, _: ErrorContext) -> Result<Rational, RationalError> {
        Ok(self)
    }
}

impl IntoOperand for &Rational {
    fn into_operand(self, _: ErrorContext) -> Result<Rational, RationalError> {
        Ok(*self)
    }
}

impl IntoOperand for i64 {
    fn into_operand(self, _: ErrorContext) -> Result<Rational, RationalError> {
        Ok(Rational::from_int(self))
    }
}

impl<T: IntoOperand> IntoOperand for Option<T> {
    fn into_operand(self, context: ErrorContext) -> Result<Rational, RationalError> {
        match self {
            Some(operand) => operand.into_operand(context),
            None => {
                debug!("ratio64_number: absent operand while {context}");
                Err(RationalError::null_operand(context))
            },
        }
    }
}
