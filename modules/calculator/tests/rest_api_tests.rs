//! End-to-end tests for the REST surface, driven through the assembled
//! router with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use calculator::{CalculatorService, router};
use http_body_util::BodyExt as _;
use serde_json::Value;
use tower::ServiceExt as _;

fn app() -> Router {
    router(Arc::new(CalculatorService::new()), false)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get(app, uri).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn add_returns_sum() {
    let (status, body) = get_json(app(), "/add?num1=2&num2=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "addition");
    assert_eq!(body["result"].as_f64(), Some(5.0));
}

#[tokio::test]
async fn subtract_returns_difference() {
    let (status, body) = get_json(app(), "/subtract?num1=10&num2=4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "subtraction");
    assert_eq!(body["result"].as_f64(), Some(6.0));
}

#[tokio::test]
async fn multiply_returns_product() {
    let (status, body) = get_json(app(), "/multiply?num1=6&num2=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "multiplication");
    assert_eq!(body["result"].as_f64(), Some(42.0));
}

#[tokio::test]
async fn divide_returns_quotient() {
    let (status, body) = get_json(app(), "/divide?num1=10&num2=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "division");
    assert_eq!(body["result"].as_f64(), Some(5.0));
}

#[tokio::test]
async fn divide_by_zero_is_rejected() {
    let (status, body) = get_json(app(), "/divide?num1=5&num2=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot divide by zero.");
}

#[tokio::test]
async fn power_returns_exponentiation() {
    let (status, body) = get_json(app(), "/power?num1=2&num2=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "exponentiation");
    assert_eq!(body["result"].as_f64(), Some(1024.0));
}

#[tokio::test]
async fn power_passes_non_finite_result_through_as_null() {
    // Fractional exponent of a negative base is NaN; no dedicated error
    // path exists for it, so the result field serializes as null.
    let (status, body) = get_json(app(), "/power?num1=-8&num2=0.5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "exponentiation");
    assert!(body["result"].is_null());
}

#[tokio::test]
async fn sqrt_returns_root() {
    let (status, body) = get_json(app(), "/sqrt?num1=16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "square root");
    assert_eq!(body["result"].as_f64(), Some(4.0));
}

#[tokio::test]
async fn sqrt_of_negative_is_rejected() {
    let (status, body) = get_json(app(), "/sqrt?num1=-4").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot compute square root of a negative number."
    );
}

#[tokio::test]
async fn modulo_returns_remainder() {
    let (status, body) = get_json(app(), "/modulo?num1=10&num2=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["operation"], "modulo");
    assert_eq!(body["result"].as_f64(), Some(1.0));
}

#[tokio::test]
async fn modulo_sign_follows_first_operand() {
    let (status, body) = get_json(app(), "/modulo?num1=-7&num2=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"].as_f64(), Some(-1.0));
}

#[tokio::test]
async fn modulo_by_zero_is_rejected() {
    let (status, body) = get_json(app(), "/modulo?num1=10&num2=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot compute modulo by zero.");
}

#[tokio::test]
async fn missing_num1_is_rejected() {
    let (status, body) = get_json(app(), "/add?num2=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid input parameters. Please provide valid numbers."
    );
}

#[tokio::test]
async fn missing_num2_on_binary_route_is_rejected() {
    let (status, body) = get_json(app(), "/multiply?num1=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid input parameters. Please provide valid numbers."
    );
}

#[tokio::test]
async fn non_numeric_operands_are_rejected() {
    for uri in [
        "/add?num1=abc&num2=3",
        "/subtract?num1=1&num2=xyz",
        "/divide?num1=&num2=2",
        "/power?num1=Infinity&num2=2",
        "/sqrt?num1=16&num2=abc",
    ] {
        let (status, body) = get_json(app(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(
            body["error"],
            "Invalid input parameters. Please provide valid numbers.",
            "uri: {uri}"
        );
    }
}

#[tokio::test]
async fn greeting_ignores_query_parameters() {
    for uri in ["/", "/?num1=abc&foo=bar"] {
        let (status, bytes) = get(app(), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Hello! Calculator microservice is running with advanced operations."
        );
    }
}

#[tokio::test]
async fn error_responses_are_json() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/divide?num1=5&num2=0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn openapi_document_served_when_docs_enabled() {
    let app = router(Arc::new(CalculatorService::new()), true);
    let (status, body) = get_json(app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].is_string());
    assert!(body["paths"]["/divide"].is_object());
}

#[tokio::test]
async fn openapi_document_absent_by_default() {
    let (status, _) = get(app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn concurrent_requests_do_not_interfere() {
    let app = app();
    let (add, multiply, sqrt, modulo) = tokio::join!(
        get_json(app.clone(), "/add?num1=1&num2=2"),
        get_json(app.clone(), "/multiply?num1=3&num2=4"),
        get_json(app.clone(), "/sqrt?num1=81"),
        get_json(app, "/modulo?num1=10&num2=0"),
    );
    assert_eq!(add.1["result"].as_f64(), Some(3.0));
    assert_eq!(multiply.1["result"].as_f64(), Some(12.0));
    assert_eq!(sqrt.1["result"].as_f64(), Some(9.0));
    assert_eq!(modulo.0, StatusCode::BAD_REQUEST);
}
