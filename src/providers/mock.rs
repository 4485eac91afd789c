/*!
 * Mock provider implementations for testing.
 *
 * This module provides a mock chat completion provider that simulates
 * different model behaviors without any network access:
 * - `MockProvider::working()` - Answers with one translation per source string
 * - `MockProvider::with_content(..)` - Answers with a fixed message body
 * - `MockProvider::failing()` - Always fails with an API error
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::Provider;
use crate::providers::openai::{OpenAIChoice, OpenAIRequest, OpenAIResponse, OpenAIResponseMessage};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Returns `{"translations": [...]}` with one `[TRANSLATED] ...` string per source
    Working,
    /// Like `Working` but drops the last translation
    MissingLast,
    /// Returns the given message content verbatim
    Content(String),
    /// Returns a response without any choices
    Empty,
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter
    request_count: Arc<AtomicUsize>,
    /// Last request received
    last_request: Arc<Mutex<Option<OpenAIRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that returns one translation too few
    pub fn missing_last() -> Self {
        Self::new(MockBehavior::MissingLast)
    }

    /// Create a mock that answers with fixed content
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::new(MockBehavior::Content(content.into()))
    }

    /// Create a mock that returns no choices
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Copy of the most recent request
    pub fn last_request(&self) -> Option<OpenAIRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }

    /// Build a response whose first choice carries the given content
    pub fn response_with_content(content: impl Into<String>) -> OpenAIResponse {
        OpenAIResponse {
            choices: vec![OpenAIChoice {
                message: OpenAIResponseMessage {
                    role: Some("assistant".to_string()),
                    content: Some(content.into()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        }
    }

    /// Generate a well-formed translations object for the given sources
    pub fn generate_translations(sources: &[String]) -> String {
        let translations: Vec<String> = sources
            .iter()
            .map(|source| format!("[TRANSLATED] {}", source))
            .collect();
        serde_json::json!({ "translations": translations }).to_string()
    }

    fn sources_of(request: &OpenAIRequest) -> Vec<String> {
        request
            .message_content("user")
            .and_then(|content| serde_json::from_str(content).ok())
            .unwrap_or_default()
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
            last_request: Arc::clone(&self.last_request),
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    type Request = OpenAIRequest;
    type Response = OpenAIResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some(request.clone());
        }

        match &self.behavior {
            MockBehavior::Working => {
                let sources = Self::sources_of(&request);
                Ok(Self::response_with_content(Self::generate_translations(&sources)))
            }

            MockBehavior::MissingLast => {
                let mut sources = Self::sources_of(&request);
                sources.pop();
                Ok(Self::response_with_content(Self::generate_translations(&sources)))
            }

            MockBehavior::Content(content) => Ok(Self::response_with_content(content.clone())),

            MockBehavior::Empty => Ok(OpenAIResponse {
                choices: Vec::new(),
                usage: None,
            }),

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated provider failure".to_string(),
                status_code: 500,
            }),
        }
    }

    fn extract_text(response: &Self::Response) -> String {
        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}
