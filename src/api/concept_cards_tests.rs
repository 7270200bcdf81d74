//! Tests for the HTTP concept card gateway.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{ConceptCardGateway, HttpConceptCardGateway};
use crate::config::Config;
use crate::error::ApiError;

/// Helper: a minimal concept card dictionary.
fn concept_card_json(n: u32) -> serde_json::Value {
    serde_json::json!({
        "explanation": {
            "html": format!("test explanation {n}"),
            "content_id": "explanation"
        },
        "worked_examples": [],
        "recorded_voiceovers": { "voiceovers_mapping": { "explanation": {} } }
    })
}

fn gateway_with_mock(mock_uri: &str) -> HttpConceptCardGateway {
    HttpConceptCardGateway::new(Config::new(mock_uri))
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn concept_card_url_percent_encodes_joined_ids() {
    let gateway = gateway_with_mock("http://localhost:8181/");
    assert_eq!(
        gateway.concept_card_url(&ids(&["1", "2"])),
        "http://localhost:8181/concept_card_handler/1%2C2"
    );
    assert_eq!(
        gateway.concept_card_url(&ids(&["skill one"])),
        "http://localhost:8181/concept_card_handler/skill%20one"
    );
}

#[tokio::test]
async fn fetch_single_card() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept_card_handler/1"))
        .and(header("User-Agent", "skill_cards/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "concept_card_dicts": [concept_card_json(1)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_with_mock(&mock_server.uri());
    let cards = gateway.fetch_concept_cards(&ids(&["1"])).await.unwrap();

    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].explanation.html, "test explanation 1");
}

#[tokio::test]
async fn fetch_multiple_cards_in_request_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept_card_handler/1%2C2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "concept_card_dicts": [concept_card_json(1), concept_card_json(2)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = gateway_with_mock(&mock_server.uri());
    let cards = gateway.fetch_concept_cards(&ids(&["1", "2"])).await.unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].explanation.html, "test explanation 1");
    assert_eq!(cards[1].explanation.html, "test explanation 2");
}

#[tokio::test]
async fn fetch_500_returns_error_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept_card_handler/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Error loading skill 1."))
        .mount(&mock_server)
        .await;

    let gateway = gateway_with_mock(&mock_server.uri());
    let result = gateway.fetch_concept_cards(&ids(&["1"])).await;

    match result {
        Err(ApiError::HttpStatus { status, body }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "Error loading skill 1.");
        }
        other => panic!("Expected ApiError::HttpStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_short_batch_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept_card_handler/1%2C2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "concept_card_dicts": [concept_card_json(1)]
        })))
        .mount(&mock_server)
        .await;

    let gateway = gateway_with_mock(&mock_server.uri());
    let result = gateway.fetch_concept_cards(&ids(&["1", "2"])).await;

    assert!(matches!(
        result,
        Err(ApiError::BatchSize {
            expected: 2,
            received: 1
        })
    ));
}

#[tokio::test]
async fn fetch_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept_card_handler/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let gateway = gateway_with_mock(&mock_server.uri());
    let result = gateway.fetch_concept_cards(&ids(&["1"])).await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}
