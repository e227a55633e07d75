use crate::constants::generation;
use crate::error::DebugAiError;
use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: generation::TEMPERATURE,
            top_p: generation::TOP_P,
            top_k: generation::TOP_K,
            max_output_tokens: generation::MAX_OUTPUT_TOKENS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

#[derive(Debug, Clone)]
pub struct LlmResponse {
    pub text: String,
    pub usage: Option<Usage>,
}

impl LlmResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// A configured text-generation model. One prompt in, one text out.
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<LlmResponse, DebugAiError>;

    /// Model identifier, used for status display.
    fn model_name(&self) -> &str;
}
