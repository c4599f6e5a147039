/// The operation that was running when an error was raised.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorContext {
    Constructing,
    Validating,
    Adding,
    Subtracting,
    Multiplying,
    Dividing,
    Negating,
    Inverting,
    TakingAbs,
    Powering,
    Reducing,
    Comparing,
    ConvertingToInt,
    ConvertingToFloat,
}
