use reqwest::StatusCode;
use serde_json::json;

use crate::client::http::envelope_from_response;
use crate::client::{collection_path, record_path, ApiEnvelope, HttpApiClient};
use crate::error::AdminError;

#[test]
fn test_paths() {
    assert_eq!(collection_path("teams"), "/parametrizations/teams");
    assert_eq!(record_path("users", "u-1"), "/parametrizations/users/u-1");
}

#[test]
fn test_url_for_joins_without_double_slash() {
    let client = HttpApiClient::new("http://localhost:3333/", Some("tok")).unwrap();
    assert_eq!(client.base_url(), "http://localhost:3333");
    assert_eq!(
        client.url_for("/parametrizations/teams"),
        "http://localhost:3333/parametrizations/teams"
    );
}

#[test]
fn test_invalid_token_is_config_error() {
    let result = HttpApiClient::new("http://localhost", Some("bad\ntoken"));
    assert!(matches!(result, Err(AdminError::ConfigError(_))));
}

#[test]
fn test_success_with_data() {
    let envelope = envelope_from_response(StatusCode::OK, r#"{"data":{"uuid":"x"}}"#).unwrap();
    assert!(envelope.has_data());
    assert_eq!(envelope.warning(), None);
    assert_eq!(envelope.data.unwrap()["uuid"], "x");
}

#[test]
fn test_success_with_message_only() {
    let envelope =
        envelope_from_response(StatusCode::OK, r#"{"data":null,"message":"quota exceeded"}"#).unwrap();
    assert!(!envelope.has_data());
    assert_eq!(envelope.warning(), Some("quota exceeded"));
}

#[test]
fn test_empty_success_body() {
    let envelope = envelope_from_response(StatusCode::NO_CONTENT, "").unwrap();
    assert_eq!(envelope, ApiEnvelope::default());
}

#[test]
fn test_malformed_success_body() {
    let err = envelope_from_response(StatusCode::OK, "<html>").unwrap_err();
    assert!(matches!(err, AdminError::UnexpectedResponse(_)));
}

#[test]
fn test_error_status_with_message_is_business_rejection() {
    let envelope = envelope_from_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"data":{"ignored":true},"message":"CNPJ já cadastrado"}"#,
    )
    .unwrap();
    assert!(!envelope.has_data());
    assert_eq!(envelope.warning(), Some("CNPJ já cadastrado"));
}

#[test]
fn test_error_status_without_message_fails() {
    for body in ["", "oops", r#"{"message":"  "}"#] {
        let err = envelope_from_response(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_err();
        assert!(matches!(err, AdminError::ApiError(_)), "{}", body);
    }
}

#[test]
fn test_blank_message_is_not_a_warning() {
    let envelope = ApiEnvelope { data: Some(json!(null)), message: Some(" ".to_string()) };
    assert_eq!(envelope.warning(), None);
    assert!(!envelope.has_data());
}
