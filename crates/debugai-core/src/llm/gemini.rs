use crate::constants::{endpoints, models};
use crate::error::DebugAiError;
use crate::llm::traits::*;
use serde::{Deserialize, Serialize};

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: models::DEFAULT_GEMINI_MODEL.to_string(),
            base_url: endpoints::GEMINI_BASE_URL.to_string(),
            generation_config: GenerationConfig::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = config;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url,
            endpoints::GEMINI_API_VERSION,
            self.model
        )
    }

    fn build_request<'a>(&'a self, prompt: &'a str) -> GeminiRequest<'a> {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user",
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: WireGenerationConfig::from(&self.generation_config),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    generation_config: WireGenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: u32,
    max_output_tokens: u32,
}

impl From<&GenerationConfig> for WireGenerationConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            max_output_tokens: config.max_output_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'a str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiResponsePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

fn parse_response(body: &str) -> Result<LlmResponse, DebugAiError> {
    let api_response: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| DebugAiError::Llm(format!("Failed to parse response: {e}")))?;

    if let Some(reason) = api_response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(DebugAiError::Llm(format!("Prompt blocked: {reason}")));
    }

    let parts = api_response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|c| &c.parts)
        .filter(|parts| parts.iter().any(|p| p.text.is_some()))
        .ok_or_else(|| DebugAiError::Llm("No response from API".into()))?;

    let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();

    Ok(LlmResponse {
        text,
        usage: api_response.usage_metadata.map(|u| Usage {
            input_tokens: u.prompt_token_count,
            output_tokens: u.candidates_token_count,
        }),
    })
}

#[async_trait::async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse, DebugAiError> {
        let url = self.endpoint();
        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| DebugAiError::Http(e.without_url()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| DebugAiError::Http(e.without_url()))?;

        if !status.is_success() {
            return Err(DebugAiError::Llm(format!(
                "Gemini API error ({}): {}",
                status, response_text
            )));
        }

        parse_response(&response_text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
