//! End-to-end tests: concept card loader over the HTTP gateway.

use skill_cards::{ApiError, ConceptCard, ConceptCardLoader, Config, HttpConceptCardGateway};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn worked_example(n: u32) -> serde_json::Value {
    serde_json::json!({
        "question": {
            "html": format!("worked example question {n}"),
            "content_id": format!("worked_example_q_{n}")
        },
        "explanation": {
            "html": format!("worked example explanation {n}"),
            "content_id": format!("worked_example_e_{n}")
        }
    })
}

fn concept_card_dict(n: u32) -> serde_json::Value {
    let (a, b) = (2 * n - 1, 2 * n);
    serde_json::json!({
        "explanation": {
            "html": format!("test explanation {n}"),
            "content_id": format!("explanation_{n}")
        },
        "worked_examples": [worked_example(a), worked_example(b)],
        "recorded_voiceovers": {
            "voiceovers_mapping": {
                "explanation": {},
                format!("worked_example_q_{a}"): {},
                format!("worked_example_e_{a}"): {},
                format!("worked_example_q_{b}"): {},
                format!("worked_example_e_{b}"): {}
            }
        }
    })
}

fn parsed(n: u32) -> ConceptCard {
    serde_json::from_value(concept_card_dict(n)).unwrap()
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn loader_for(server: &MockServer) -> ConceptCardLoader<HttpConceptCardGateway> {
    ConceptCardLoader::new(HttpConceptCardGateway::new(Config::new(server.uri())))
}

#[tokio::test]
async fn fetches_multiple_cards_in_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept_card_handler/1%2C2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "concept_card_dicts": [concept_card_dict(1), concept_card_dict(2)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let loader = loader_for(&mock_server);
    let cards = loader.load_concept_cards(&ids(&["1", "2"])).await.unwrap();

    assert_eq!(cards, vec![parsed(1), parsed(2)]);
}

#[tokio::test]
async fn second_load_fetches_only_the_new_card() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept_card_handler/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "concept_card_dicts": [concept_card_dict(1)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/concept_card_handler/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "concept_card_dicts": [concept_card_dict(2)]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let loader = loader_for(&mock_server);
    let first = loader.load_concept_cards(&ids(&["1"])).await.unwrap();
    let second = loader.load_concept_cards(&ids(&["1", "2"])).await.unwrap();
    let third = loader.load_concept_cards(&ids(&["2", "1"])).await.unwrap();

    assert_eq!(first, vec![parsed(1)]);
    assert_eq!(second, vec![parsed(1), parsed(2)]);
    assert_eq!(third, vec![parsed(2), parsed(1)]);
}

#[tokio::test]
async fn server_error_rejects_and_caches_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/concept_card_handler/1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Error loading skill 1."))
        .expect(2)
        .mount(&mock_server)
        .await;

    let loader = loader_for(&mock_server);
    for _ in 0..2 {
        match loader.load_concept_cards(&ids(&["1"])).await {
            Err(ApiError::HttpStatus { body, .. }) => assert_eq!(body, "Error loading skill 1."),
            other => panic!("Expected ApiError::HttpStatus, got: {other:?}"),
        }
    }
    assert!(loader.is_empty().await);
}
