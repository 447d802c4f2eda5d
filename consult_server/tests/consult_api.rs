//! Integration tests for the consultation endpoint.
//!
//! These drive the router in-process with `oneshot`, no socket involved.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use consult_core::config::ServerConfig;
use consult_server::{router, CONSULTATION_FAILED, CONSULT_PATH, REQUEST_ID_HEADER};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    consult_core::logging::init_test();
    router(&ServerConfig::default())
}

fn post_raw(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(CONSULT_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("Failed to build request")
}

fn post_json(body: &Value) -> Request<Body> {
    post_raw(body.to_string())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).expect("Response is not JSON");
    (status, body)
}

fn sample_body() -> Value {
    json!({
        "age": "30",
        "weight": "70",
        "height": "175",
        "goal": "weight-loss",
        "activityLevel": "moderate",
        "dietaryPreferences": "",
        "allergies": "",
        "healthConditions": "",
        "type": "nutrition"
    })
}

#[tokio::test]
async fn test_nutrition_advice() {
    let (status, body) = send(app(), post_json(&sample_body())).await;

    assert_eq!(status, StatusCode::OK);
    let advice = body["advice"].as_str().expect("advice missing");
    assert!(advice.starts_with("🥗 PERSONALIZED NUTRITION CONSULTATION"));
    assert!(advice.contains("BMI: 22.9 | Daily Calorie Needs: 2556 kcal"));
    assert!(advice.contains("Calories: 2056 kcal"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_fitness_advice_with_numeric_fields() {
    let mut request = sample_body();
    request["type"] = json!("fitness");
    request["age"] = json!(30);
    request["weight"] = json!(70);
    request["height"] = json!(175);

    let (status, body) = send(app(), post_json(&request)).await;

    assert_eq!(status, StatusCode::OK);
    let advice = body["advice"].as_str().expect("advice missing");
    assert!(advice.starts_with("🏋️ PERSONALIZED FITNESS CONSULTATION"));
    assert!(advice.contains("Age: 30 years | Weight: 70kg | Height: 175cm"));
}

#[tokio::test]
async fn test_same_input_same_output() {
    let (_, first) = send(app(), post_json(&sample_body())).await;
    let (_, second) = send(app(), post_json(&sample_body())).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_invalid_numbers_still_succeed() {
    let mut request = sample_body();
    request["height"] = json!("0");
    request.as_object_mut().unwrap().remove("age");

    let (status, body) = send(app(), post_json(&request)).await;

    assert_eq!(status, StatusCode::OK);
    let advice = body["advice"].as_str().expect("advice missing");
    assert!(advice.contains("BMI: Infinity | Daily Calorie Needs: NaN kcal"));
}

#[tokio::test]
async fn test_fitness_accepts_non_text_dietary_preferences() {
    let mut request = sample_body();
    request["type"] = json!("fitness");
    request["dietaryPreferences"] = json!(false);

    let (status, body) = send(app(), post_json(&request)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["advice"].as_str().is_some());

    request["type"] = json!("nutrition");
    let (status, body) = send(app(), post_json(&request)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], CONSULTATION_FAILED);
}

#[tokio::test]
async fn test_malformed_json_is_500() {
    let (status, body) = send(app(), post_raw("{\"age\": ")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": CONSULTATION_FAILED }));
}

#[tokio::test]
async fn test_missing_goal_is_500() {
    let mut request = sample_body();
    request.as_object_mut().unwrap().remove("goal");

    let (status, body) = send(app(), post_json(&request)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], CONSULTATION_FAILED);
}

#[tokio::test]
async fn test_non_object_body_is_500() {
    let (status, _) = send(app(), post_json(&json!(null))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = send(app(), post_raw("")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_oversized_body_is_500() {
    let config = ServerConfig {
        body_limit_bytes: 16,
        ..ServerConfig::default()
    };
    let app = router(&config);

    let (status, body) = send(app, post_json(&sample_body())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], CONSULTATION_FAILED);
}

#[tokio::test]
async fn test_request_id_generated() {
    let response = app()
        .oneshot(post_json(&sample_body()))
        .await
        .expect("Request failed");

    let id = response
        .headers()
        .get(REQUEST_ID_HEADER)
        .expect("request id header missing")
        .to_str()
        .expect("request id is not text");
    assert!(id.starts_with("req_"));
    assert_eq!(id.len(), "req_".len() + 32);
}

#[tokio::test]
async fn test_request_id_propagated() {
    let mut request = post_json(&sample_body());
    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, "client-abc".parse().unwrap());

    let response = app().oneshot(request).await.expect("Request failed");

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "client-abc");
}

#[tokio::test]
async fn test_get_is_not_routed_to_handler() {
    let request = Request::builder()
        .method(Method::GET)
        .uri(CONSULT_PATH)
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.expect("Request failed");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
