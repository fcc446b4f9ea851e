//! Gemini provider over the generateContent HTTP endpoint.
//!
//! Assistant turns map to Gemini's `model` role; the system instruction
//! travels in `system_instruction`, never in `contents`.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::credentials::{SecretString, env_api_key};
use crate::{
    Message, ModelProvider, ModelReply, ModelRequest, ProviderError, ProviderFuture, ProviderId,
    Role,
};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    fallback_model: String,
}

impl GeminiProvider {
    pub fn new(client: Client, api_key: SecretString) -> Self {
        Self {
            client,
            base_url: GEMINI_BASE_URL.to_string(),
            api_key,
            fallback_model: GEMINI_DEFAULT_MODEL.to_string(),
        }
    }

    /// Builds a provider from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = env_api_key(GEMINI_API_KEY_VAR)?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ProviderError::transport(err.to_string()))?;

        Ok(Self::new(client, api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_fallback_model(mut self, model: impl Into<String>) -> Self {
        self.fallback_model = model.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.base_url.trim_end_matches('/')
        )
    }

    fn build_body(&self, request: &ModelRequest) -> GeminiGenerateRequest {
        let contents = request.messages.iter().map(GeminiContent::from).collect();

        GeminiGenerateRequest {
            system_instruction: request.system.as_ref().map(|text| GeminiSystemInstruction {
                parts: vec![GeminiPart { text: text.clone() }],
            }),
            contents,
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        }
    }
}

impl ModelProvider for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn generate<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelReply, ProviderError>> {
        Box::pin(async move {
            request.validate()?;

            let model = if request.model.trim().is_empty() {
                self.fallback_model.clone()
            } else {
                request.model.clone()
            };

            let body = self.build_body(&request);
            let response = self
                .client
                .post(self.endpoint(&model))
                .header("x-goog-api-key", self.api_key.expose())
                .json(&body)
                .send()
                .await
                .map_err(|err| {
                    if err.is_timeout() {
                        ProviderError::timeout(err.to_string())
                    } else {
                        ProviderError::transport(err.to_string())
                    }
                })?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = format!("http {status}: {}", truncate(&body, 4096));
                return Err(if status.as_u16() == 401 || status.as_u16() == 403 {
                    ProviderError::authentication(message)
                } else if status.as_u16() == 429 {
                    ProviderError::unavailable(message)
                } else {
                    ProviderError::transport(message)
                });
            }

            let parsed = response
                .json::<GeminiGenerateResponse>()
                .await
                .map_err(|err| ProviderError::transport(err.to_string()))?;

            let text = parsed
                .candidates
                .into_iter()
                .next()
                .and_then(|candidate| candidate.content)
                .map(|content| {
                    content
                        .parts
                        .into_iter()
                        .map(|part| part.text)
                        .collect::<Vec<_>>()
                        .join("")
                })
                .ok_or_else(|| ProviderError::other("no candidates in Gemini response"))?;

            Ok(ModelReply {
                provider: ProviderId::Gemini,
                model,
                text: text.trim().to_string(),
            })
        })
    }
}

fn truncate(input: &str, max: usize) -> String {
    if input.len() <= max {
        return input.to_string();
    }
    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    let mut output = input[..end].to_string();
    output.push_str("...");
    output
}

#[derive(Debug, Serialize)]
struct GeminiGenerateRequest {
    #[serde(rename = "system_instruction", skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiSystemInstruction>,
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

impl From<&Message> for GeminiContent {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            Role::Assistant => "model",
            _ => "user",
        };

        Self {
            role: role.to_string(),
            parts: vec![GeminiPart {
                text: message.content.clone(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiGenerateResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_turns_map_to_the_model_role() {
        let assistant = GeminiContent::from(&Message::new(Role::Assistant, "FUNCTION_CALL: x"));
        assert_eq!(assistant.role, "model");

        let user = GeminiContent::from(&Message::new(Role::User, "hello"));
        assert_eq!(user.role, "user");
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let provider = GeminiProvider::new(Client::new(), SecretString::new("k"))
            .with_base_url("https://example.test/v1beta/");

        assert_eq!(
            provider.endpoint("gemini-1.5-flash"),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_carries_system_instruction_separately() {
        let provider = GeminiProvider::new(Client::new(), SecretString::new("k"));
        let request = ModelRequest::new(
            "gemini-1.5-flash",
            vec![Message::new(Role::User, "Fetch recipes.")],
        )
        .with_system("You are a recipe agent.");

        let body = provider.build_body(&request);
        assert!(body.system_instruction.is_some());
        assert_eq!(body.contents.len(), 1);
        assert_eq!(body.contents[0].role, "user");
    }

    #[test]
    fn truncate_appends_ellipsis_past_the_limit() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789", 4), "0123...");
    }
}
