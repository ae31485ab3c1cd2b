//! GeminiProvider -- concrete [`LlmProvider`] implementation for Google Gemini.
//!
//! Sends requests to `{base_url}/v1beta/models/{model}:generateContent` with
//! the key in the `x-goog-api-key` header.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use secrecy::{ExposeSecret, SecretString};

use folio_core::llm::provider::LlmProvider;
use folio_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use super::types::{
    GeminiContent, GeminiErrorResponse, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig,
};

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini LLM provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with its own HTTP client.
    pub fn new(api_key: SecretString, model: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, model)
    }

    /// Create a provider that reuses an existing HTTP client.
    pub fn with_client(client: reqwest::Client, api_key: SecretString, model: String) -> Self {
        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Convert a generic [`CompletionRequest`] into a [`GenerateContentRequest`].
    fn to_gemini_request(&self, request: &CompletionRequest) -> GenerateContentRequest {
        let contents = request
            .messages
            .iter()
            .map(|m| {
                // Gemini calls the assistant side "model".
                let role = match m.role {
                    folio_types::llm::MessageRole::User => "user",
                    folio_types::llm::MessageRole::Assistant => "model",
                };
                GeminiContent::text(Some(role), m.content.clone())
            })
            .collect();

        GenerateContentRequest {
            system_instruction: request
                .system
                .as_ref()
                .map(|s| GeminiContent::text(None, s.clone())),
            contents,
            generation_config: Some(GenerationConfig {
                max_output_tokens: request.max_tokens,
                temperature: request.temperature,
            }),
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug; the SecretString
// already hides the key, and the rest of the state is not worth printing.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };
        let body = self.to_gemini_request(request);

        let response = self
            .client
            .post(self.url(model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorResponse>(&error_body)
                .map(|e| format!("{} ({})", e.error.message, e.error.status))
                .unwrap_or(error_body);
            return Err(match status.as_u16() {
                400 => LlmError::InvalidRequest(message),
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited,
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {message}"),
                },
            });
        }

        let gemini_resp: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let stop_reason = match gemini_resp
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            Some("MAX_TOKENS") => StopReason::MaxTokens,
            Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
                StopReason::ContentFilter
            }
            _ => StopReason::EndTurn,
        };

        let usage = gemini_resp
            .usage_metadata
            .as_ref()
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: gemini_resp.response_id.clone().unwrap_or_default(),
            content: gemini_resp.text(),
            model: gemini_resp
                .model_version
                .clone()
                .unwrap_or_else(|| model.to_string()),
            stop_reason,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::Path;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(
            SecretString::from("test-key-not-real"),
            "gemini-3-flash-preview".to_string(),
        )
    }

    fn request() -> CompletionRequest {
        CompletionRequest::single_turn("", "What do you do?", "Be helpful", 256, Some(0.5))
    }

    /// Spawn a local stand-in for the Gemini endpoint and return its base URL.
    async fn spawn_mock(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_provider_name_and_model() {
        let provider = make_provider();
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.model(), "gemini-3-flash-preview");
    }

    #[test]
    fn test_url_includes_model_action() {
        let provider = make_provider().with_base_url("http://localhost:9000/");
        assert_eq!(
            provider.url("gemini-3-flash-preview"),
            "http://localhost:9000/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_to_gemini_request() {
        let provider = make_provider();
        let body = provider.to_gemini_request(&request());
        assert_eq!(body.contents.len(), 1);
        assert_eq!(body.contents[0].role.as_deref(), Some("user"));
        assert_eq!(
            body.system_instruction.unwrap().parts[0].text.as_deref(),
            Some("Be helpful")
        );
        let config = body.generation_config.unwrap();
        assert_eq!(config.max_output_tokens, 256);
        assert_eq!(config.temperature, Some(0.5));
    }

    #[tokio::test]
    async fn test_complete_against_mock_endpoint() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(
                |Path(call): Path<String>, headers: HeaderMap, Json(body): Json<Value>| async move {
                    assert_eq!(call, "gemini-3-flash-preview:generateContent");
                    assert_eq!(headers["x-goog-api-key"], "test-key-not-real");
                    assert_eq!(body["contents"][0]["parts"][0]["text"], "What do you do?");
                    Json(json!({
                        "candidates": [{
                            "content": {"role": "model", "parts": [{"text": "I analyse data."}]},
                            "finishReason": "STOP"
                        }],
                        "usageMetadata": {"promptTokenCount": 40, "candidatesTokenCount": 4},
                        "modelVersion": "gemini-3-flash-preview",
                        "responseId": "abc123"
                    }))
                },
            ),
        );
        let base = spawn_mock(router).await;

        let provider = make_provider().with_base_url(base);
        let response = provider.complete(&request()).await.unwrap();

        assert_eq!(response.content, "I analyse data.");
        assert_eq!(response.id, "abc123");
        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.usage.input_tokens, 40);
        assert_eq!(response.usage.output_tokens, 4);
    }

    #[tokio::test]
    async fn test_complete_maps_forbidden_to_auth_failure() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|| async {
                (
                    StatusCode::FORBIDDEN,
                    Json(json!({"error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}})),
                )
            }),
        );
        let base = spawn_mock(router).await;

        let err = make_provider()
            .with_base_url(base)
            .complete(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[tokio::test]
    async fn test_complete_maps_bad_request_message() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": {"code": 400, "message": "model not found", "status": "INVALID_ARGUMENT"}})),
                )
            }),
        );
        let base = spawn_mock(router).await;

        let err = make_provider()
            .with_base_url(base)
            .complete(&request())
            .await
            .unwrap_err();
        match err {
            LlmError::InvalidRequest(msg) => {
                assert!(msg.contains("model not found"));
                assert!(msg.contains("INVALID_ARGUMENT"));
            }
            other => panic!("expected InvalidRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blocked_response_has_empty_content() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|| async {
                Json(json!({"candidates": [{"finishReason": "SAFETY"}]}))
            }),
        );
        let base = spawn_mock(router).await;

        let response = make_provider()
            .with_base_url(base)
            .complete(&request())
            .await
            .unwrap();
        assert_eq!(response.content, "");
        assert_eq!(response.stop_reason, StopReason::ContentFilter);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = make_provider()
            .with_base_url(format!("http://{addr}"))
            .complete(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }
}
