use thiserror::Error;

/// Errors produced by operand validation and arithmetic dispatch.
///
/// Every variant is a per-request client error; the display strings are the
/// exact messages returned in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required operand was missing or not a finite number.
    #[error("Invalid input parameters. Please provide valid numbers.")]
    InvalidInput,

    /// Division with a zero divisor.
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    /// Modulo with a zero divisor.
    #[error("Cannot compute modulo by zero.")]
    ModuloByZero,

    /// Square root of a negative operand.
    #[error("Cannot compute square root of a negative number.")]
    NegativeSquareRoot,
}
