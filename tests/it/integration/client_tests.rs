//! Prediction client tests against a local mock classifier.

use crate::helpers::{MockClassifier, StrokeSession};
use digitpad::api::{ApiError, PredictionClient};
use digitpad::raster::EncodedImage;
use serde_json::json;

fn healthy() -> serde_json::Value {
    json!({"status": "healthy", "model_loaded": true})
}

fn drawn_image() -> EncodedImage {
    let mut session = StrokeSession::new();
    session.pen_down(60.0, 60.0);
    session.pen_move(220.0, 220.0);
    session.pen_up();
    session.export()
}

#[test]
fn test_classify_maps_response_fields() {
    let mock = MockClassifier::start(
        healthy(),
        200,
        json!({
            "predicted_digit": 7,
            "confidence": 0.92,
            "probabilities": [0.01, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.92, 0.03, 0.04]
        }),
    );
    let client = PredictionClient::new(mock.url());

    let prediction = client.classify(&drawn_image()).unwrap();
    assert_eq!(prediction.predicted_digit, 7);
    assert!((prediction.confidence - 0.92).abs() < 1e-6);
    // Index i of the distribution is the probability of digit i
    assert!((prediction.probability_of(7) - 0.92).abs() < 1e-6);
    assert!((prediction.probability_of(0) - 0.01).abs() < 1e-6);
    assert!(prediction.is_well_formed());

    assert_eq!(mock.health_hits(), 1);
    assert_eq!(mock.predict_hits(), 1);
}

#[test]
fn test_unloaded_model_blocks_predict_request() {
    let mock = MockClassifier::start(
        json!({"status": "healthy", "model_loaded": false}),
        200,
        json!({"predicted_digit": 0, "confidence": 1.0, "probabilities": vec![0.0; 10]}),
    );
    let client = PredictionClient::new(mock.url());

    let error = client.classify(&drawn_image()).unwrap_err();
    assert!(matches!(error, ApiError::ModelNotReady));
    assert!(error.to_string().contains("not loaded"));

    // The gate fails before any predict request is issued
    assert_eq!(mock.health_hits(), 1);
    assert_eq!(mock.predict_hits(), 0);
}

#[test]
fn test_rejected_request_surfaces_service_detail() {
    let mock = MockClassifier::start(healthy(), 503, json!({"detail": "model unloaded"}));
    let client = PredictionClient::new(mock.url());

    let error = client.classify(&drawn_image()).unwrap_err();
    // The service-provided message, not a generic status line
    assert_eq!(error.to_string(), "model unloaded");
    assert_eq!(error.status(), Some(503));
}

#[test]
fn test_rejected_request_without_detail_gets_status_line() {
    let mock = MockClassifier::start(healthy(), 500, json!({"unexpected": "shape"}));
    let client = PredictionClient::new(mock.url());

    let error = client.classify(&drawn_image()).unwrap_err();
    assert!(error.to_string().contains("HTTP 500"));
    assert_eq!(error.status(), Some(500));
}

#[test]
fn test_unreachable_service_reports_connection_failure() {
    // Nothing listens on this port
    let client = PredictionClient::new("http://127.0.0.1:9");

    let error = client.check_health().unwrap_err();
    assert!(matches!(error, ApiError::ServiceUnavailable { .. }));
    assert!(error.to_string().contains("classifier backend is running"));
    assert_eq!(error.status(), None);
}

#[test]
fn test_predict_body_carries_raw_payload_only() {
    let mock = MockClassifier::start(
        healthy(),
        200,
        json!({"predicted_digit": 1, "confidence": 1.0, "probabilities": vec![0.0; 10]}),
    );
    let client = PredictionClient::new(mock.url());

    let image = drawn_image();
    client.classify(&image).unwrap();

    let bodies = mock.predict_bodies();
    assert_eq!(bodies.len(), 1);
    let body: serde_json::Value = serde_json::from_str(&bodies[0]).unwrap();
    let sent = body["image"].as_str().unwrap();
    // Raw base64, no data-URL prefix
    assert_eq!(sent, image.payload());
    assert!(!sent.starts_with("data:"));
    assert!(!sent.contains(','));
}

#[test]
fn test_health_parses_service_response() {
    let mock = MockClassifier::start(healthy(), 200, json!({}));
    let client = PredictionClient::new(mock.url());

    let health = client.check_health().unwrap();
    assert_eq!(health.status, "healthy");
    assert!(health.model_loaded);
}
