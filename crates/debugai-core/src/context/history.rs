use super::turn::Turn;
use crate::constants::text::GREETING;

/// Ordered, append-only record of one session's turns.
///
/// Insertion order is both display order and prompt order. Turns are never
/// edited or removed individually; `clear` drops everything.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    turns: Vec<Turn>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Session-start state: a single assistant greeting.
    pub fn with_greeting() -> Self {
        let mut store = Self::new();
        store.push_assistant(GREETING);
        store
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> &Turn {
        self.push(Turn::user(content))
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) -> &Turn {
        self.push(Turn::assistant(content))
    }

    fn push(&mut self, turn: Turn) -> &Turn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The last `n` turns, oldest first.
    pub fn recent(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Drops every turn. The greeting is not re-inserted.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
