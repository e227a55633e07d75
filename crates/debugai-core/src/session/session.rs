use super::responder::Responder;
use crate::constants::limits::HISTORY_WINDOW;
use crate::context::{ConversationStore, Turn};
use crate::error::{DebugAiError, Result};
use crate::llm::LlmClient;

/// Per-session context: one conversation store and one model handle.
///
/// Requests run one at a time. Each `submit` appends exactly one user turn
/// followed by exactly one assistant turn.
pub struct Session {
    llm: Box<dyn LlmClient>,
    store: ConversationStore,
}

impl Session {
    /// Starts a session whose store holds the greeting.
    pub fn new(llm: Box<dyn LlmClient>) -> Self {
        Self::with_store(llm, ConversationStore::with_greeting())
    }

    pub fn with_store(llm: Box<dyn LlmClient>, store: ConversationStore) -> Self {
        Self { llm, store }
    }

    /// Runs one request cycle and returns the appended assistant turn.
    ///
    /// The user turn is stored before the prompt is composed, so it is part
    /// of the history window sent to the model.
    pub async fn submit(&mut self, user_input: &str) -> Result<&Turn> {
        if user_input.trim().is_empty() {
            return Err(DebugAiError::EmptyInput);
        }

        self.store.push_user(user_input);

        let reply = Responder::new(self.llm.as_ref())
            .respond(self.store.recent(HISTORY_WINDOW), user_input)
            .await;

        Ok(self.store.push_assistant(reply.into_text()))
    }

    /// Irreversibly empties the conversation. The greeting is not restored.
    pub fn clear(&mut self) {
        tracing::info!(turns = self.store.len(), "clearing conversation");
        self.store.clear();
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Number of turns exchanged so far, greeting included.
    pub fn message_count(&self) -> usize {
        self.store.len()
    }

    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }
}
