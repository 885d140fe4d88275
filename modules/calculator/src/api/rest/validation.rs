//! Input validation for query-string operands.
//!
//! Runs before any computation: a handler first obtains validated `f64`
//! operands from here, then hands them to the domain service. Rejections
//! log a fixed message without echoing the raw input.

use tracing::error;

use super::dto::OperandsQuery;
use crate::domain::error::DomainError;

/// Parse a raw operand, accepting only finite values.
///
/// `f64::from_str` would happily produce `inf` and `NaN` from their string
/// spellings; those are rejected here along with anything non-numeric.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn reject() -> DomainError {
    error!("Invalid input parameters");
    DomainError::InvalidInput
}

/// Validate the operand pair of a binary operation.
pub fn binary_operands(query: &OperandsQuery) -> Result<(f64, f64), DomainError> {
    let num1 = query.num1.as_deref().and_then(parse_finite);
    let num2 = query.num2.as_deref().and_then(parse_finite);
    match (num1, num2) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(reject()),
    }
}

/// Validate the single operand of a unary operation.
///
/// A `num2` supplied alongside it is ignored by the computation but must
/// still be numeric when present.
pub fn unary_operand(query: &OperandsQuery) -> Result<f64, DomainError> {
    let num1 = query.num1.as_deref().and_then(parse_finite);
    match num1 {
        Some(a) => match query.num2.as_deref() {
            Some(raw2) if parse_finite(raw2).is_none() => Err(reject()),
            _ => Ok(a),
        },
        None => Err(reject()),
    }
}
