use std::fs;

use super::{
    ClientConfig, ClientError, DEFAULT_BASE_URL, RESULT_PATH, ResultClient, decode_body,
    load_config, result_query,
};
use crate::normalize::NormalizeError;

#[test]
fn result_query_disables_extra_sections() {
    let query = result_query("181108_AB_1");
    assert_eq!(query[0], ("test", "181108_AB_1".to_string()));
    for (key, value) in &query[1..] {
        assert!(matches!(*key, "requests" | "average" | "standard"));
        assert_eq!(value, "0");
    }
}

#[test]
fn result_url_joins_base_and_path() {
    let client = ResultClient::new(ClientConfig {
        base_url: "https://wpt.internal.example/".to_string(),
        ..ClientConfig::default()
    })
    .expect("client");
    assert_eq!(
        client.result_url(),
        format!("https://wpt.internal.example{RESULT_PATH}")
    );
}

#[test]
fn empty_test_id_is_rejected_without_a_request() {
    let client = ResultClient::new(ClientConfig::default()).expect("client");
    assert!(matches!(
        client.fetch_raw("   "),
        Err(ClientError::Config(_))
    ));
}

#[test]
fn yaml_config_is_loaded_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.yaml");
    fs::write(&path, "api_key: secret\ntimeout_secs: 5\n").expect("write config");
    let config = load_config(&path).expect("load config");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api_key.as_deref(), Some("secret"));
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn json_config_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.json");
    fs::write(&path, r#"{"base_url": "http://localhost:8080"}"#).expect("write config");
    let config = load_config(&path).expect("load config");
    assert_eq!(config.base_url, "http://localhost:8080");
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("client.yml");
    fs::write(&path, "base_url: ftp://example.com\n").expect("write config");
    assert!(matches!(load_config(&path), Err(ClientError::Config(_))));

    let zero_timeout = ClientConfig {
        timeout_secs: 0,
        ..ClientConfig::default()
    };
    assert!(zero_timeout.validate().is_err());
}

#[test]
fn fetched_body_decodes_into_result_set() {
    let body = include_str!("../../testdata/result_single.json");
    let result = decode_body(body.as_bytes()).expect("decode body");
    assert!(!result.id.is_empty());
    assert!(result.run_count() > 0);
}

#[test]
fn non_success_body_surfaces_as_remote_error() {
    let body = include_str!("../../testdata/result_error.json");
    match decode_body(body.as_bytes()) {
        Err(ClientError::Normalize(NormalizeError::Remote { code, text })) => {
            assert_eq!(code, 400);
            assert_eq!(text, "Test not found");
        }
        other => panic!("expected remote error, got {other:?}"),
    }
}
