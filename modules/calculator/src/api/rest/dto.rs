use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::service::Operation;

/// Raw query-string operands as received from the client.
///
/// Both fields stay strings here; parsing and finiteness checks happen in
/// [`crate::api::rest::validation`] so that malformed values are rejected
/// uniformly instead of failing inside the extractor.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OperandsQuery {
    /// First operand; required for every operation.
    pub num1: Option<String>,
    /// Second operand; required for binary operations.
    pub num2: Option<String>,
}

/// Successful computation response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OperationResponse {
    /// Human-readable operation name, e.g. `"addition"`.
    pub operation: String,
    /// Computed value. Non-finite values serialize as JSON `null`.
    pub result: f64,
}

impl OperationResponse {
    pub fn new(operation: Operation, result: f64) -> Self {
        Self {
            operation: operation.name().to_owned(),
            result,
        }
    }
}

/// Error payload for validation and domain failures.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}
