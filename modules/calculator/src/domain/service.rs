//! Domain service for the calculator.
//!
//! Dispatches a named operation over validated operands. Every operation is
//! a pure, bounded-time computation; there is no shared mutable state.

use tracing::{error, info};

use super::error::DomainError;

/// Arithmetic operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Modulo,
}

impl Operation {
    /// Human-readable name used in the `operation` field of the response.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
            Operation::Power => "exponentiation",
            Operation::Sqrt => "square root",
            Operation::Modulo => "modulo",
        }
    }

    /// Whether the operation takes a second operand.
    pub fn is_binary(self) -> bool {
        !matches!(self, Operation::Sqrt)
    }
}

/// Stateless dispatcher that performs the arithmetic for each operation.
///
/// Operands arrive already validated; the service only enforces the
/// mathematical preconditions (non-zero divisor, non-negative radicand).
#[derive(Clone, Default)]
pub struct CalculatorService;

impl CalculatorService {
    /// Create a new service.
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        let result = a + b;
        info!("Addition operation: {a} + {b} = {result}");
        result
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        let result = a - b;
        info!("Subtraction operation: {a} - {b} = {result}");
        result
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        let result = a * b;
        info!("Multiplication operation: {a} * {b} = {result}");
        result
    }

    pub fn divide(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        if b == 0.0 {
            error!("Division by zero attempt");
            return Err(DomainError::DivisionByZero);
        }
        let result = a / b;
        info!("Division operation: {a} / {b} = {result}");
        Ok(result)
    }

    /// Exponentiation carries no guards: zero, negative and fractional
    /// exponents all go straight through `f64::powf`, and non-finite
    /// results are returned as-is.
    pub fn power(&self, a: f64, b: f64) -> f64 {
        let result = a.powf(b);
        info!("Exponentiation operation: {a} ^ {b} = {result}");
        result
    }

    pub fn sqrt(&self, a: f64) -> Result<f64, DomainError> {
        if a < 0.0 {
            error!("Square root of negative number attempt");
            return Err(DomainError::NegativeSquareRoot);
        }
        let result = a.sqrt();
        info!("Square root operation: sqrt({a}) = {result}");
        Ok(result)
    }

    /// Truncating remainder; the sign of the result follows `a`.
    pub fn modulo(&self, a: f64, b: f64) -> Result<f64, DomainError> {
        if b == 0.0 {
            error!("Modulo by zero attempt");
            return Err(DomainError::ModuloByZero);
        }
        let result = a % b;
        info!("Modulo operation: {a} % {b} = {result}");
        Ok(result)
    }
}
