use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Query};

use super::dto::{ErrorBody, OperandsQuery, OperationResponse};
use super::error::ApiError;
use super::validation;
use crate::domain::service::{CalculatorService, Operation};

/// Greeting returned by `GET /`, regardless of any query parameters.
pub const GREETING: &str =
    "Hello! Calculator microservice is running with advanced operations.";

type OperationResult = Result<Json<OperationResponse>, ApiError>;

#[utoipa::path(
    get,
    path = "/",
    tag = "calculator",
    responses(
        (status = 200, description = "Service greeting", body = String, content_type = "text/plain"),
    ),
)]
pub async fn greeting() -> &'static str {
    GREETING
}

#[utoipa::path(
    get,
    path = "/add",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Sum of the operands", body = OperationResponse),
        (status = 400, description = "Missing or non-numeric operands", body = ErrorBody),
    ),
)]
pub async fn add(
    Extension(svc): Extension<Arc<CalculatorService>>,
    Query(raw): Query<OperandsQuery>,
) -> OperationResult {
    let (a, b) = validation::binary_operands(&raw)?;
    Ok(Json(OperationResponse::new(Operation::Add, svc.add(a, b))))
}

#[utoipa::path(
    get,
    path = "/subtract",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Difference of the operands", body = OperationResponse),
        (status = 400, description = "Missing or non-numeric operands", body = ErrorBody),
    ),
)]
pub async fn subtract(
    Extension(svc): Extension<Arc<CalculatorService>>,
    Query(raw): Query<OperandsQuery>,
) -> OperationResult {
    let (a, b) = validation::binary_operands(&raw)?;
    Ok(Json(OperationResponse::new(
        Operation::Subtract,
        svc.subtract(a, b),
    )))
}

#[utoipa::path(
    get,
    path = "/multiply",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Product of the operands", body = OperationResponse),
        (status = 400, description = "Missing or non-numeric operands", body = ErrorBody),
    ),
)]
pub async fn multiply(
    Extension(svc): Extension<Arc<CalculatorService>>,
    Query(raw): Query<OperandsQuery>,
) -> OperationResult {
    let (a, b) = validation::binary_operands(&raw)?;
    Ok(Json(OperationResponse::new(
        Operation::Multiply,
        svc.multiply(a, b),
    )))
}

#[utoipa::path(
    get,
    path = "/divide",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Quotient of the operands", body = OperationResponse),
        (status = 400, description = "Division by zero or invalid operands", body = ErrorBody),
    ),
)]
pub async fn divide(
    Extension(svc): Extension<Arc<CalculatorService>>,
    Query(raw): Query<OperandsQuery>,
) -> OperationResult {
    let (a, b) = validation::binary_operands(&raw)?;
    Ok(Json(OperationResponse::new(
        Operation::Divide,
        svc.divide(a, b)?,
    )))
}

#[utoipa::path(
    get,
    path = "/power",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "num1 raised to num2; non-finite results serialize as null", body = OperationResponse),
        (status = 400, description = "Missing or non-numeric operands", body = ErrorBody),
    ),
)]
pub async fn power(
    Extension(svc): Extension<Arc<CalculatorService>>,
    Query(raw): Query<OperandsQuery>,
) -> OperationResult {
    let (a, b) = validation::binary_operands(&raw)?;
    Ok(Json(OperationResponse::new(
        Operation::Power,
        svc.power(a, b),
    )))
}

#[utoipa::path(
    get,
    path = "/sqrt",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Square root of num1", body = OperationResponse),
        (status = 400, description = "Negative operand or invalid input", body = ErrorBody),
    ),
)]
pub async fn sqrt(
    Extension(svc): Extension<Arc<CalculatorService>>,
    Query(raw): Query<OperandsQuery>,
) -> OperationResult {
    let a = validation::unary_operand(&raw)?;
    Ok(Json(OperationResponse::new(Operation::Sqrt, svc.sqrt(a)?)))
}

#[utoipa::path(
    get,
    path = "/modulo",
    tag = "calculator",
    params(OperandsQuery),
    responses(
        (status = 200, description = "Truncating remainder of num1 / num2", body = OperationResponse),
        (status = 400, description = "Modulo by zero or invalid operands", body = ErrorBody),
    ),
)]
pub async fn modulo(
    Extension(svc): Extension<Arc<CalculatorService>>,
    Query(raw): Query<OperandsQuery>,
) -> OperationResult {
    let (a, b) = validation::binary_operands(&raw)?;
    Ok(Json(OperationResponse::new(
        Operation::Modulo,
        svc.modulo(a, b)?,
    )))
}
