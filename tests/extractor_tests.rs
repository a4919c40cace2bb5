//! End-to-end tests for the `Validated<T>` extractor: the complete flow
//! from HTTP request to validated payload or structured rejection.

use axum::http::StatusCode;
use axum::{Json, Router, routing::patch, routing::post};
use axum_test::TestServer;
use facture::prelude::*;
use serde_json::{Value, json};

async fn create_product(payload: Validated<Product>) -> Json<Value> {
    Json(payload.into_inner())
}

async fn update_product(payload: Validated<Product>) -> Json<Value> {
    Json(payload.into_inner())
}

async fn update_settings(payload: Validated<CompanySettings>) -> Json<Value> {
    Json(payload.into_inner())
}

fn create_test_server() -> TestServer {
    let app = Router::new()
        .route("/products", post(create_product))
        .route("/products/{id}", patch(update_product))
        .route("/settings", patch(update_settings));
    TestServer::new(app)
}

#[tokio::test]
async fn test_post_valid_product_returns_normalized_record() {
    let server = create_test_server();

    let response = server
        .post("/products")
        .json(&json!({
            "name": "  Consulting  ",
            "price": "150",
            "unit": "hour",
            "ignored_key": true
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"name": "Consulting", "price": 150.0, "unit": "hour"})
    );
}

#[tokio::test]
async fn test_post_incomplete_product_rejected_with_field_report() {
    let server = create_test_server();

    let response = server
        .post("/products")
        .json(&json!({"name": "Widget"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let fields = body["details"]["fields"]
        .as_object()
        .expect("fields should be an object");
    assert!(fields.contains_key("price"));
    assert!(fields.contains_key("unit"));
    assert!(!fields.contains_key("name"));
}

#[tokio::test]
async fn test_patch_uses_partial_validation() {
    let server = create_test_server();

    let response = server
        .patch("/products/4dcb077e-0000-0000-0000-000000000000")
        .json(&json!({"name": "Renamed"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body, json!({"name": "Renamed"}));
}

#[tokio::test]
async fn test_patch_present_invalid_field_rejected() {
    let server = create_test_server();

    let response = server
        .patch("/products/4dcb077e-0000-0000-0000-000000000000")
        .json(&json!({"unit": "fortnight"}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert!(
        body["details"]["fields"]["unit"][0]
            .as_str()
            .expect("message should be a string")
            .contains("hour, piece, service")
    );
}

#[tokio::test]
async fn test_malformed_json_rejected_as_bad_request() {
    let server = create_test_server();

    let response = server
        .post("/products")
        .bytes("{ not json".into())
        .content_type("application/json")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_JSON");
}

#[tokio::test]
async fn test_settings_patch_validates_bounds() {
    let server = create_test_server();

    let response = server
        .patch("/settings")
        .json(&json!({"default_currency": "EU", "default_tax_percent": 20}))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    let fields = body["details"]["fields"]
        .as_object()
        .expect("fields should be an object");
    assert!(fields.contains_key("default_currency"));
    assert!(!fields.contains_key("default_tax_percent"));
}
