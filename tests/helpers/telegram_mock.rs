//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use url::Url;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::TEST_BOT_TOKEN;

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

fn sent_message(message_id: i32) -> Value {
    json!({
        "ok": true,
        "result": {
            "message_id": message_id,
            "from": {
                "id": 12345,
                "is_bot": true,
                "first_name": "TestBot",
                "username": "test_bot"
            },
            "chat": {
                "id": 555000111,
                "type": "private",
                "first_name": "Test"
            },
            "date": 1714550400,
            "text": "Test message"
        }
    })
}

impl TelegramMockServer {
    /// Start a server answering every call the handlers make
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let mock = Self { server };
        mock.setup_default_mocks().await;
        mock
    }

    async fn mount(&self, api_method: &str, body: Value) {
        // teloxide posts to `SendMessage`, not `sendMessage`
        let route = format!("(?i)^/bot{}/{}$", regex::escape(TEST_BOT_TOKEN), api_method);
        Mock::given(method("POST"))
            .and(path_regex(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn setup_default_mocks(&self) {
        self.mount("sendMessage", sent_message(123)).await;
        self.mount("editMessageText", sent_message(77)).await;
        self.mount("answerCallbackQuery", json!({ "ok": true, "result": true })).await;
    }

    /// A bot whose API calls land on this server
    pub fn create_bot(&self) -> Bot {
        let api_url = Url::parse(&self.server.uri()).expect("Mock server uri is a valid url");
        Bot::new(TEST_BOT_TOKEN).set_api_url(api_url)
    }

    /// JSON bodies of every call made to `api_method`, in order
    ///
    /// Method names are compared case-insensitively.
    pub async fn requests_to(&self, api_method: &str) -> Vec<Value> {
        let suffix = format!("/{}", api_method.to_lowercase());
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path().to_lowercase().ends_with(&suffix))
            .map(|request| serde_json::from_slice(&request.body).unwrap_or(Value::Null))
            .collect()
    }

    /// Text of every message sent or edited, in order
    pub async fn texts_to(&self, api_method: &str) -> Vec<String> {
        self.requests_to(api_method)
            .await
            .iter()
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }
}
