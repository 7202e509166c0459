//! Integration tests for the `/predict` endpoint

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use iris_classifiers::{Classifier, ClassifierConfig, Prediction};
use iris_core::{Error, FeatureVector, Result};
use iris_service::{create_router, AppState, ServiceConfig};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceExt;

fn reference_config() -> ServiceConfig {
    let model = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/iris_model.safetensors");
    ServiceConfig {
        classifier: ClassifierConfig::from_local(model),
        ..Default::default()
    }
}

fn reference_app() -> Router {
    let state = AppState::new(reference_config()).expect("reference model should load");
    create_router(state)
}

async fn post_predict(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Always fails, as a model would on a broken forward pass
struct FailingClassifier;

#[async_trait]
impl Classifier for FailingClassifier {
    async fn predict(&self, _features: &FeatureVector) -> Result<Prediction> {
        Err(Error::model("forward pass failed"))
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn num_features(&self) -> usize {
        4
    }
}

#[tokio::test]
async fn test_setosa() {
    let (status, body) =
        post_predict(reference_app(), json!({ "feature_array": [5.1, 3.5, 1.4, 0.2] }).to_string())
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prediction": ["setosa"] }));
}

#[tokio::test]
async fn test_virginica() {
    let (status, body) =
        post_predict(reference_app(), json!({ "feature_array": [6.7, 3.0, 5.2, 2.3] }).to_string())
            .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], json!(["virginica"]));
}

#[tokio::test]
async fn test_well_formed_vectors_return_single_label() {
    let vectors = [
        json!([0, 0, 0, 0]),
        json!([5.9, 3.0, 4.2, 1.5]),
        json!([100.0, 0.1, 50, 7]),
        json!([-1.0, -2.0, -3.0, -4.0]),
    ];

    for vector in vectors {
        let (status, body) = post_predict(
            reference_app(),
            json!({ "feature_array": vector }).to_string(),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{}", vector);
        assert_eq!(body["prediction"].as_array().map(Vec::len), Some(1), "{}", vector);
    }
}

#[tokio::test]
async fn test_index_labels() {
    let mut config = reference_config();
    config.classifier = config.classifier.with_index_labels();
    let app = create_router(AppState::new(config).unwrap());

    let (status, body) =
        post_predict(app, json!({ "feature_array": [6.7, 3.0, 5.2, 2.3] }).to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "prediction": [2] }));
}

#[tokio::test]
async fn test_wrong_arity_rejected() {
    let (status, body) =
        post_predict(reference_app(), json!({ "feature_array": [1.0, 2.0] }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("exactly 4 values"));
}

#[tokio::test]
async fn test_values_beyond_model_precision_rejected() {
    for features in [
        json!([5.1, 3.5, 1.4, 1e300]),
        json!([1e39, -1e39, 1.4, 0.2]),
        json!([1e300, 3.5, 1.4, 0.2]),
    ] {
        let (status, body) = post_predict(
            reference_app(),
            json!({ "feature_array": features }).to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", features);
        assert_eq!(body["error"]["type"], "invalid_request_error");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("is not a finite number"));
    }
}

#[tokio::test]
async fn test_non_numeric_rejected() {
    let (status, body) =
        post_predict(reference_app(), json!({ "feature_array": ["a", 1, 2, 3] }).to_string())
            .await;

    assert_ne!(status, StatusCode::OK);
    assert!(status.is_client_error());
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn test_missing_key_rejected() {
    let (status, _) =
        post_predict(reference_app(), json!({ "features": [1, 2, 3, 4] }).to_string()).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let (status, body) = post_predict(reference_app(), "{\"feature_array\": [1, 2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .body(Body::from(json!({ "feature_array": [5.1, 3.5, 1.4, 0.2] }).to_string()))
        .unwrap();

    let response = reference_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_model_failure_is_server_error() {
    let state = AppState::with_classifier(ServiceConfig::default(), Arc::new(FailingClassifier));
    let (status, body) = post_predict(
        create_router(state),
        json!({ "feature_array": [5.1, 3.5, 1.4, 0.2] }).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["type"], "model_error");
}

#[tokio::test]
async fn test_health_and_fallback() {
    let response = reference_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");

    let response = reference_app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/predict")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = reference_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[test]
fn test_missing_model_fails_startup() {
    let config = ServiceConfig {
        classifier: ClassifierConfig::from_local("/nonexistent/iris_model.safetensors"),
        ..Default::default()
    };
    assert!(AppState::new(config).is_err());
}
