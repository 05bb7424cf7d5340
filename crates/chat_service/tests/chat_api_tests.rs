//! HTTP-level tests for the chat endpoint

use std::io::Write;
use std::path::PathBuf;

use actix_web::{test, web, App};
use chat_service::knowledge::{EMPTY_PROMPT_REPLY, GREETING_REPLY, UNKNOWN_REPLY};
use chat_service::server::{app_config, AppState};

fn write_knowledge_base(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("knowledge_base.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"questions": [
            {{"question": "What is Rust?", "answer": "A systems programming language."}},
            {{"question": "Who maintains the service?", "answer": "The platform team."}}
        ]}}"#
    )
    .unwrap();
    path
}

macro_rules! test_app {
    ($kb_path:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState {
                    knowledge_base_path: $kb_path,
                }))
                .configure(app_config),
        )
        .await
    };
}

async fn chat_reply(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    message: &str,
) -> String {
    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(serde_json::json!({ "message": message }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(app, req).await;
    body["response"].as_str().unwrap().to_string()
}

#[actix_web::test]
async fn test_greeting_gets_the_greeting_reply() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(write_knowledge_base(&dir));

    assert_eq!(chat_reply(&app, "hello over there").await, GREETING_REPLY);
}

#[actix_web::test]
async fn test_known_question_gets_its_answer() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(write_knowledge_base(&dir));

    assert_eq!(
        chat_reply(&app, "please tell me what rust is").await,
        "A systems programming language."
    );
}

#[actix_web::test]
async fn test_unknown_question_gets_teach_me_reply() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(write_knowledge_base(&dir));

    assert_eq!(chat_reply(&app, "favorite color?").await, UNKNOWN_REPLY);
}

#[actix_web::test]
async fn test_empty_message_gets_prompt_reply() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(write_knowledge_base(&dir));

    assert_eq!(chat_reply(&app, "").await, EMPTY_PROMPT_REPLY);
    assert_eq!(chat_reply(&app, "   ").await, EMPTY_PROMPT_REPLY);
}

#[actix_web::test]
async fn test_body_without_message_field_gets_prompt_reply() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(write_knowledge_base(&dir));

    let req = test::TestRequest::post()
        .uri("/chat")
        .set_json(serde_json::json!({}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["response"], EMPTY_PROMPT_REPLY);
}

#[actix_web::test]
async fn test_missing_knowledge_base_behaves_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path().join("does_not_exist.json"));

    assert_eq!(
        chat_reply(&app, "completely unrecognized words").await,
        UNKNOWN_REPLY
    );
}

#[actix_web::test]
async fn test_malformed_body_is_a_client_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(write_knowledge_base(&dir));

    let req = test::TestRequest::post()
        .uri("/chat")
        .insert_header(("content-type", "application/json"))
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path().join("kb.json"));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
