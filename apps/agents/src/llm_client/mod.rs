/// LLM client: the single point of entry for all ASI1 chat-completion calls.
///
/// No agent talks to the completion API directly; every prompt goes through
/// `LlmClient::complete` so retry, logging and response validation live in one place.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod json;
pub mod prompts;

/// The model used for all LLM calls.
pub const MODEL: &str = "asi1-mini";
const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Gave up after {retries} retries")]
    RetriesExhausted { retries: u32 },

    #[error("Invalid response format from LLM API: missing message content")]
    EmptyContent,
}

/// Sampling parameters for a single completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: Option<f32>,
    pub web_search: bool,
}

impl CompletionParams {
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
            top_p: None,
            web_search: false,
        }
    }

    pub const fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub const fn with_web_search(mut self) -> Self {
        self.web_search = true;
        self
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatTurn<'a>; 2],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    max_tokens: u32,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra_body: Option<ExtraBody>,
}

#[derive(Debug, Serialize)]
struct ChatTurn<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ExtraBody {
    web_search: bool,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
}

impl CompletionResponse {
    /// Content of the first choice, if it is present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Statuses treated as transient and retried.
fn is_retryable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503)
}

/// The single LLM client shared by every agent.
/// Wraps the chat-completions endpoint with linear-backoff retry and JSON helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    completions_url: String,
    max_retries: u32,
    retry_delay: Duration,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: &str) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            api_key,
            completions_url: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY,
        })
    }

    /// Overrides the retry count and the linear backoff unit.
    pub fn with_retry_policy(mut self, max_retries: u32, retry_delay: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_delay = retry_delay;
        self
    }

    /// Sends one system + user exchange and returns the assistant's text.
    /// Retries on 429/500/502/503 and transport errors, sleeping `retry_delay * n` before retry `n`.
    pub async fn complete(
        &self,
        system: &str,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<String, LlmError> {
        let penalty = params.top_p.map(|_| 0.0);
        let request_body = CompletionRequest {
            model: MODEL,
            messages: [
                ChatTurn {
                    role: "system",
                    content: system,
                },
                ChatTurn {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: params.temperature,
            top_p: params.top_p,
            presence_penalty: penalty,
            frequency_penalty: penalty,
            max_tokens: params.max_tokens,
            stream: false,
            extra_body: params.web_search.then_some(ExtraBody { web_search: true }),
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.retry_delay * attempt;
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms ({} retries left)...",
                    attempt,
                    delay.as_millis(),
                    self.max_retries - attempt
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.completions_url)
                .bearer_auth(&self.api_key)
                .header("Accept", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    warn!("LLM request failed: {e}");
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if is_retryable(status) {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let completion: CompletionResponse = response.json().await?;

            if let Some(usage) = &completion.usage {
                debug!(
                    "LLM call succeeded: prompt_tokens={:?}, completion_tokens={:?}",
                    usage.prompt_tokens, usage.completion_tokens
                );
            }

            return completion
                .text()
                .map(str::to_owned)
                .ok_or(LlmError::EmptyContent);
        }

        Err(last_error.unwrap_or(LlmError::RetriesExhausted {
            retries: self.max_retries,
        }))
    }

    /// Completes and deserializes the JSON carried in the reply.
    /// Tolerates fenced blocks and prose around a single JSON object.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        system: &str,
        prompt: &str,
        params: CompletionParams,
    ) -> Result<T, LlmError> {
        let text = self.complete(system, prompt, params).await?;
        serde_json::from_str(json::extract_json_text(&text)).map_err(LlmError::Parse)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::time::Duration;

    use serde_json::{json, Value};
    use wiremock::MockServer;

    use super::LlmClient;

    /// A client pointed at a mock server with instant retries.
    pub fn mock_llm(server: &MockServer) -> LlmClient {
        LlmClient::new("test-key".to_string(), &server.uri())
            .unwrap()
            .with_retry_policy(3, Duration::ZERO)
    }

    /// A chat-completions body whose first choice carries `content`.
    pub fn completion_body(content: &str) -> Value {
        json!({
            "id": "chatcmpl-test",
            "model": "asi1-mini",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": content}}
            ],
            "usage": {"prompt_tokens": 12, "completion_tokens": 34}
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{completion_body, mock_llm};
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PARAMS: CompletionParams = CompletionParams::new(0.5, 800);

    #[test]
    fn test_completion_params_builders() {
        let params = CompletionParams::new(0.2, 1000)
            .with_top_p(0.9)
            .with_web_search();
        assert_eq!(params.top_p, Some(0.9));
        assert!(params.web_search);
    }

    #[test]
    fn test_request_omits_optional_fields_by_default() {
        let body = CompletionRequest {
            model: MODEL,
            messages: [
                ChatTurn { role: "system", content: "s" },
                ChatTurn { role: "user", content: "u" },
            ],
            temperature: 0.7,
            top_p: None,
            presence_penalty: None,
            frequency_penalty: None,
            max_tokens: 10,
            stream: false,
            extra_body: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("top_p").is_none());
        assert!(value.get("extra_body").is_none());
        assert_eq!(value["stream"], false);
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn test_blank_content_is_not_text() {
        let response: CompletionResponse =
            serde_json::from_value(completion_body("   ")).unwrap();
        assert!(response.text().is_none());

        let response: CompletionResponse =
            serde_json::from_value(serde_json::json!({"choices": []})).unwrap();
        assert!(response.text().is_none());
    }

    #[tokio::test]
    async fn test_complete_sends_auth_and_returns_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "model": "asi1-mini",
                "stream": false,
                "extra_body": {"web_search": true},
                "presence_penalty": 0.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hello")))
            .expect(1)
            .mount(&server)
            .await;

        let params = CompletionParams::new(0.5, 100).with_top_p(0.9).with_web_search();
        let text = mock_llm(&server).complete("sys", "hi", params).await.unwrap();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_retries_transient_errors_then_succeeds() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .mount(&server)
            .await;

        let text = mock_llm(&server).complete("sys", "hi", PARAMS).await.unwrap();
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(4)
            .mount(&server)
            .await;

        let err = mock_llm(&server)
            .complete("sys", "hi", PARAMS)
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"error": {"message": "bad key"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = mock_llm(&server)
            .complete("sys", "hi", PARAMS)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 401, ref message } if message == "bad key"));
    }

    #[tokio::test]
    async fn test_missing_content_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let err = mock_llm(&server)
            .complete("sys", "hi", PARAMS)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_complete_json_accepts_fenced_reply() {
        #[derive(Deserialize)]
        struct Reply {
            score: u32,
        }

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion_body("Result:\n```json\n{\"score\": 7}\n```")),
            )
            .mount(&server)
            .await;

        let reply: Reply = mock_llm(&server)
            .complete_json("sys", "hi", PARAMS)
            .await
            .unwrap();
        assert_eq!(reply.score, 7);
    }
}
