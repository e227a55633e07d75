pub mod error;
pub mod constants;
pub mod llm;
pub mod context;
pub mod session;
pub mod config;

// Re-export key types
pub use error::{DebugAiError, Result};
pub use llm::{GeminiClient, GenerationConfig, LlmClient, LlmResponse, Usage};
pub use context::{ConversationStore, PromptComposer, Role, Turn};
pub use session::{Reply, Responder, Session};
pub use config::Settings;
