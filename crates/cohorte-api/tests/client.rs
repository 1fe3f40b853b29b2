//! HTTP client tests against a local mock server.

use cohorte_api::api::QuestionApi;
use cohorte_api::client::HttpQuestionApi;
use cohorte_api::config::ApiConfig;
use cohorte_api::error::ApiError;
use cohorte_core::models::field::FieldType;
use cohorte_core::models::question::NewCustomQuestion;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpQuestionApi {
    HttpQuestionApi::new(&ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..ApiConfig::default()
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_sends_bearer_token_and_decodes_questions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom-questions"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 1,
                "label": "Fumeur",
                "type": "single-choice",
                "nomVariable": "FUMEUR",
                "options": "[\"Oui\",\"Non\"]",
                "themeNom": "Cardio-Vasculaire"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let questions = client_for(&server).fetch_questions("secret").await.unwrap();
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].variable_name, "FUMEUR");
    assert_eq!(questions[0].field_type, FieldType::SingleChoice);
}

#[tokio::test(flavor = "multi_thread")]
async fn add_posts_the_wire_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/custom-questions"))
        .and(body_json(json!({
            "label": "Toux",
            "type": "single-choice",
            "nomVariable": "TOUX",
            "options": "[\"Oui\",\"Non\"]",
            "themeNom": "Respiratoire"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "label": "Toux",
            "type": "single-choice",
            "nomVariable": "TOUX",
            "options": "[\"Oui\",\"Non\"]",
            "themeNom": "Respiratoire"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = NewCustomQuestion {
        theme_name: "Respiratoire".to_string(),
        label: "Toux".to_string(),
        field_type: FieldType::SingleChoice,
        variable_name: "TOUX".to_string(),
        options: Some(vec!["Oui".to_string(), "Non".to_string()]),
    }
    .to_payload()
    .unwrap();

    let created = client_for(&server)
        .add_question("secret", &payload)
        .await
        .unwrap();
    assert_eq!(created.id, 42);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_targets_the_question_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/custom-questions/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).delete_question("secret", 42).await.unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom-questions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_questions("expired").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 401 }));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_json_is_a_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom-questions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_questions("secret").await.unwrap_err();
    assert!(matches!(err, ApiError::Serialization(_)));
}
