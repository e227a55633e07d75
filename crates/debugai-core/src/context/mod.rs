mod turn;
mod history;
mod composer;

pub use turn::{Role, Turn};
pub use history::ConversationStore;
pub use composer::PromptComposer;
