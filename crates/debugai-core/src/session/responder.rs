use std::fmt;

use crate::constants::text::ERROR_PREFIX;
use crate::context::{PromptComposer, Turn};
use crate::llm::LlmClient;

/// Outcome of one generation request.
///
/// Both variants end up in the transcript as an assistant turn; `Failure`
/// is rendered with the `"Erro ao gerar resposta: "` prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Answer(String),
    Failure(String),
}

impl Reply {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Answer(text) => text,
            Self::Failure(message) => format!("{ERROR_PREFIX}{message}"),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Answer(text) => f.write_str(text),
            Self::Failure(message) => write!(f, "{ERROR_PREFIX}{message}"),
        }
    }
}

/// Sends the composed prompt to the model and folds any error into a `Reply`.
pub struct Responder<'a> {
    client: &'a dyn LlmClient,
}

impl<'a> Responder<'a> {
    pub fn new(client: &'a dyn LlmClient) -> Self {
        Self { client }
    }

    /// `history` may be longer than the prompt window; the composer trims it.
    pub async fn respond(&self, history: &[Turn], user_input: &str) -> Reply {
        let prompt = PromptComposer::compose(history, user_input);

        match self.client.generate(&prompt).await {
            Ok(response) => {
                if let Some(usage) = &response.usage {
                    tracing::debug!(
                        input_tokens = usage.input_tokens,
                        output_tokens = usage.output_tokens,
                        "generation complete"
                    );
                }
                Reply::Answer(response.text)
            }
            Err(e) => {
                tracing::warn!(model = self.client.model_name(), error = %e, "generation failed");
                Reply::Failure(e.to_string())
            }
        }
    }
}
