//! Calculator module: arithmetic operation dispatch behind a small REST
//! surface, with query-string operand validation at the boundary.

pub mod api;
pub mod domain;

pub use api::rest::routes::router;
pub use domain::service::{CalculatorService, Operation};
