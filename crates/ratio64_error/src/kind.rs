#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorKind {
    /// Something would be divided by zero.
    InvalidArgument(InvalidArgument),

    /// An operation that needs another rational got nothing.
    NullOperand,

    /// A numerator or a denominator does not fit in `i64`.
    Overflow,

    /// A quotient does not fit in the target integer type.
    OutOfRange {
        target: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidArgument {
    /// `Rational::new(n, 0)`
    ZeroDenominator,

    /// an operand whose denominator was set to 0 after construction
    InvalidOperand,

    /// `0/n` has no reciprocal
    InverseOfZero,

    /// `x / (0/n)`
    DivisionByZero,
}

impl ErrorKind {
    /// identifier of this errkind, it's used for error codes
    pub fn index(&self) -> u32 {
        match self {
            ErrorKind::InvalidArgument(a) => a.index(),
            ErrorKind::NullOperand => 10,
            ErrorKind::Overflow => 20,
            ErrorKind::OutOfRange { .. } => 30,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ErrorKind::InvalidArgument(_))
    }

    // no capital letters, no dot
    pub fn msg(&self) -> String {
        match self {
            ErrorKind::InvalidArgument(a) => a.msg().to_string(),
            ErrorKind::NullOperand => String::from("operand is absent"),
            ErrorKind::Overflow => String::from("integer overflow"),
            ErrorKind::OutOfRange { target } => format!("quotient does not fit in `{target}`"),
        }
    }
}

impl InvalidArgument {
    fn index(&self) -> u32 {
        match self {
            InvalidArgument::ZeroDenominator => 0,
            InvalidArgument::InvalidOperand => 1,
            InvalidArgument::InverseOfZero => 2,
            InvalidArgument::DivisionByZero => 3,
        }
    }

    fn msg(&self) -> &'static str {
        match self {
            InvalidArgument::ZeroDenominator => "cannot create a rational with zero as the denominator",
            InvalidArgument::InvalidOperand => "operand has zero as the denominator",
            InvalidArgument::InverseOfZero => "zero has no inverse",
            InvalidArgument::DivisionByZero => "division by zero",
        }
    }
}
