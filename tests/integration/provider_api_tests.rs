/*!
 * Integration tests for provider API interactions
 *
 * These drive `Controller::run` against a local wiremock server standing in
 * for an OpenAI-compatible endpoint.
 */

use polib::message::MessageView;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use potwai::app_controller::{Controller, RunOutcome, TranslationJob};
use potwai::catalog::Catalog;
use potwai::errors::{AppError, ProviderError, TranslationError};
use crate::common::{self, HEADER_ONLY_TEMPLATE};

const TEMPLATE: &str = r#"msgid ""
msgstr ""
"Content-Type: text/plain; charset=UTF-8\n"

msgid "Settings"
msgstr ""

msgid "Save"
msgstr ""
"#;

fn chat_completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-5-nano",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }
        ],
        "usage": { "prompt_tokens": 40, "completion_tokens": 10, "total_tokens": 50 }
    })
}

#[tokio::test]
async fn test_run_withCompatibleServer_shouldPostOneJsonModeRequest() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-5-nano",
            "temperature": 0.2,
            "response_format": { "type": "json_object" }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion(r#"{"translations": ["Einstellungen", "Speichern"]}"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(dir.path(), "template.pot", TEMPLATE).unwrap();
    let output = dir.path().join("de.po");
    let controller = Controller::with_config(common::test_config(Some(format!("{}/v1", server.uri()))));

    let outcome = controller.run(&TranslationJob::new(&input, &output, "de")).await.unwrap();

    assert_eq!(outcome, RunOutcome::Translated { count: 2 });
    let saved = Catalog::load(&output).unwrap();
    let translated: Vec<&str> = saved
        .po()
        .messages()
        .map(|message| message.msgstr().unwrap_or_default())
        .collect();
    assert_eq!(translated, vec!["Einstellungen", "Speichern"]);
}

#[tokio::test]
async fn test_run_withUserPayload_shouldSendSourcesAsJsonArray() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion(r#"{"translations": ["a", "b"]}"#)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(dir.path(), "template.pot", TEMPLATE).unwrap();
    let output = dir.path().join("fr.po");
    let controller = Controller::with_config(common::test_config(Some(format!("{}/v1", server.uri()))));

    controller.run(&TranslationJob::new(&input, &output, "fr")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert!(messages[0]["content"].as_str().unwrap().contains("into French."));
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "[\"Settings\",\"Save\"]");
}

#[tokio::test]
async fn test_run_withUnauthorized_shouldFailWithoutOutput() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Incorrect API key provided"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(dir.path(), "template.pot", TEMPLATE).unwrap();
    let output = dir.path().join("fr.po");
    let controller = Controller::with_config(common::test_config(Some(format!("{}/v1", server.uri()))));

    let result = controller.run(&TranslationJob::new(&input, &output, "fr")).await;

    assert!(matches!(
        result,
        Err(AppError::Translation(TranslationError::Provider(ProviderError::AuthenticationError(_))))
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_run_withProseAnswer_shouldFailWithRawBody() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("Einstellungen, Speichern")))
        .mount(&server)
        .await;

    let dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(dir.path(), "template.pot", TEMPLATE).unwrap();
    let output = dir.path().join("de.po");
    let controller = Controller::with_config(common::test_config(Some(format!("{}/v1", server.uri()))));

    let error = controller.run(&TranslationJob::new(&input, &output, "de")).await.unwrap_err();

    assert!(error.to_string().contains("--- Raw AI Response ---\nEinstellungen, Speichern"));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_run_withEmptyCatalog_shouldNotContactServer() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let dir = common::create_temp_dir().unwrap();
    let input = common::create_test_file(dir.path(), "empty.pot", HEADER_ONLY_TEMPLATE).unwrap();
    let output = dir.path().join("fr.po");
    let controller = Controller::with_config(common::test_config(Some(format!("{}/v1", server.uri()))));

    let outcome = controller.run(&TranslationJob::new(&input, &output, "fr")).await.unwrap();

    assert_eq!(outcome, RunOutcome::NothingToTranslate);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}
