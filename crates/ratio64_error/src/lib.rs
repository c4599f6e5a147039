#![deny(unused_imports)]

use colored::Colorize;

mod ctxt;
mod fmt;
mod kind;


pub use ctxt::ErrorContext;
pub use kind::{ErrorKind, InvalidArgument};

#[derive(Clone, Debug, PartialEq)]
pub struct RationalError {
    pub kind: ErrorKind,
    pub context: ErrorContext,

    // extra information, it's rendered after the main message
    pub note: Option<String>,
}

impl RationalError {
    pub fn zero_denominator(context: ErrorContext) -> Self {
        RationalError::invalid_argument(InvalidArgument::ZeroDenominator, context)
    }

    pub fn invalid_operand(context: ErrorContext) -> Self {
        RationalError::invalid_argument(InvalidArgument::InvalidOperand, context)
    }

    pub fn inverse_of_zero(context: ErrorContext) -> Self {
        RationalError::invalid_argument(InvalidArgument::InverseOfZero, context)
    }

    pub fn division_by_zero(context: ErrorContext) -> Self {
        RationalError::invalid_argument(InvalidArgument::DivisionByZero, context)
    }

    pub fn null_operand(context: ErrorContext) -> Self {
        RationalError {
            kind: ErrorKind::NullOperand,
            context,
            note: None,
        }
    }

    pub fn overflow(context: ErrorContext) -> Self {
        RationalError {
            kind: ErrorKind::Overflow,
            context,
            note: None,
        }
    }

    pub fn out_of_range(target: &'static str) -> Self {
        RationalError {
            kind: ErrorKind::OutOfRange { target },
            context: ErrorContext::ConvertingToInt,
            note: None,
        }
    }

    fn invalid_argument(a: InvalidArgument, context: ErrorContext) -> Self {
        RationalError {
            kind: ErrorKind::InvalidArgument(a),
            context,
            note: None,
        }
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.note = Some(note);

        self
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind.is_invalid_argument()
    }

    pub fn is_null_operand(&self) -> bool {
        self.kind == ErrorKind::NullOperand
    }

    pub fn is_overflow(&self) -> bool {
        self.kind == ErrorKind::Overflow
    }

    /// `E0001`, `E0010`, ...
    pub fn code(&self) -> String {
        format!("E{:04}", self.kind.index())
    }

    /// The colored, multi-line form. Use `to_string()` for a plain one-liner.
    pub fn render_error(&self) -> String {
        let note = match &self.note {
            Some(note) => format!("\nNote: {note}"),
            None => String::new(),
        };

        format!(
            "{}\n{}: {}{note}",
            render_error_title(self.context),
            self.code(),
            self.kind.msg(),
        )
    }
}

impl std::error::Error for RationalError {}

pub(crate) fn render_error_title(context: ErrorContext) -> String {
    format!("[Error while {context}]").red().to_string()
}
