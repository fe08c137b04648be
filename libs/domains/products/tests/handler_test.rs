//! Handler tests for Products domain
//!
//! These drive the product router with in-process requests and check:
//! - Status codes for every operation
//! - Product and confirmation JSON shapes
//! - Error bodies always carrying a `message`
//!
//! Only the product router is exercised, not the full application with
//! `/api` nesting, CORS or docs.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::ErrorResponse;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn seeded_app() -> Router {
    handlers::router(ProductService::new(InMemoryProductRepository::seeded()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201_with_next_id() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "Widget", "quantity": 10, "price": 19.99}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Value = json_body(response.into_body()).await;
    assert_eq!(
        product,
        json!({"id": 3, "name": "Widget", "quantity": 10, "price": 19.99})
    );
}

#[tokio::test]
async fn test_create_without_content_type_returns_400_required() {
    let app = seeded_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"name": "Widget", "quantity": 10, "price": 19.99}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "name, quantity and price are required");
}

#[tokio::test]
async fn test_create_with_empty_name_returns_400() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "", "quantity": 1, "price": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "name, quantity and price are required");
}

#[tokio::test]
async fn test_create_with_negative_quantity_returns_400() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "X", "quantity": -1, "price": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(
        error.message,
        "quantity and price must be non-negative numbers"
    );
}

#[tokio::test]
async fn test_create_with_string_quantity_returns_400() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({"name": "X", "quantity": "10", "price": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(
        error.message,
        "quantity and price must be non-negative numbers"
    );
}

#[tokio::test]
async fn test_create_with_malformed_json_returns_structured_400() {
    let app = seeded_app();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert!(!error.message.is_empty());
}

#[tokio::test]
async fn test_list_products_returns_seed_in_order() {
    let app = seeded_app();

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products, sample_products());
}

#[tokio::test]
async fn test_list_twice_without_mutation_is_identical() {
    let app = seeded_app();

    let first = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    let first: Value = json_body(first.into_body()).await;

    let second = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let second: Value = json_body(second.into_body()).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_product_returns_200() {
    let app = seeded_app();

    let response = app.oneshot(empty_request("GET", "/2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, 2);
    assert_eq!(product.name, "Produto Exemplo B");
}

#[tokio::test]
async fn test_get_product_returns_404_for_missing() {
    let app = seeded_app();

    let response = app.oneshot(empty_request("GET", "/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "product not found");
}

#[tokio::test]
async fn test_get_product_with_non_numeric_id_returns_404() {
    let app = seeded_app();

    let response = app.oneshot(empty_request("GET", "/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({"name": "X", "quantity": 1, "price": 2}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    let product: Value = json_body(response.into_body()).await;
    assert_eq!(
        product,
        json!({"id": 1, "name": "X", "quantity": 1, "price": 2})
    );
}

#[tokio::test]
async fn test_update_missing_product_returns_404_even_with_bad_body() {
    let app = seeded_app();

    let response = app
        .oneshot(json_request("PUT", "/999", json!({"name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_product_without_content_type_returns_404() {
    let app = seeded_app();

    let response = app.oneshot(empty_request("PUT", "/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "product not found");
}

#[tokio::test]
async fn test_update_with_invalid_body_returns_400() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/2",
            json!({"name": "Y", "quantity": 1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Product is unchanged
    let response = app.oneshot(empty_request("GET", "/2")).await.unwrap();
    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product, sample_products()[1]);
}

#[tokio::test]
async fn test_delete_returns_confirmation_and_removes_product() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = json_body(response.into_body()).await;
    assert!(body["message"].is_string());
    assert_eq!(body["product"]["id"], 1);

    let response = app.clone().oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert!(products.iter().all(|p| p.id != 1));
}

#[tokio::test]
async fn test_delete_missing_product_returns_404() {
    let app = seeded_app();

    let response = app.oneshot(empty_request("DELETE", "/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert!(!error.message.is_empty());
}

#[tokio::test]
async fn test_update_then_delete_then_get_returns_404() {
    let app = seeded_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/1",
            json!({"name": "Y", "quantity": 2, "price": 3}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let deleted: DeletedProduct = json_body(response.into_body()).await;
    assert_eq!(deleted.product.name, "Y");

    let response = app.oneshot(empty_request("GET", "/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_created_ids_strictly_increase() {
    let app = seeded_app();
    let mut last_id = 2;

    for name in ["a", "b", "c", "d"] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/",
                json!({"name": name, "quantity": 1, "price": 1}),
            ))
            .await
            .unwrap();
        let product: Product = json_body(response.into_body()).await;

        assert!(product.id > last_id);
        last_id = product.id;
    }
}
