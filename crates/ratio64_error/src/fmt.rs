use crate::{ErrorContext, RationalError};
use std::fmt;

impl fmt::Display for ErrorContext {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            ErrorContext::Constructing => "constructing a rational",
            ErrorContext::Validating => "validating a rational",
            ErrorContext::Adding => "adding",
            ErrorContext::Subtracting => "subtracting",
            ErrorContext::Multiplying => "multiplying",
            ErrorContext::Dividing => "dividing",
            ErrorContext::Negating => "negating",
            ErrorContext::Inverting => "taking an inverse",
            ErrorContext::TakingAbs => "taking an absolute value",
            ErrorContext::Powering => "raising to a power",
            ErrorContext::Reducing => "reducing to lowest terms",
            ErrorContext::Comparing => "comparing",
            ErrorContext::ConvertingToInt => "converting to an integer",
            ErrorContext::ConvertingToFloat => "converting to a float",
        };

        write!(fmt, "{s}")
    }
}

impl fmt::Display for RationalError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "{}: {}", self.code(), self.kind.msg())?;

        if let Some(note) = &self.note {
            write!(fmt, " ({note})")?;
        }

        Ok(())
    }
}
