use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label used when the turn is rendered into a prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "Usuário",
            Self::Assistant => "Assistente",
        }
    }
}

/// One message in the conversation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Turn {
    role: Role,
    content: String,
    timestamp: DateTime<Local>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Creation time. Shown in the UI, never sent to the model.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}
