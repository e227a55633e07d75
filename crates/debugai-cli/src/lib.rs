// Library interface for debugai-cli
// The binary and the integration tests both go through these modules.

pub mod app;
pub mod commands;
pub mod theme;
pub mod transcript;

// Re-export commonly used items for easier testing
pub use commands::{handle_command, CommandResult};
pub use theme::Theme;
