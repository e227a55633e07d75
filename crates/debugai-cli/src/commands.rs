use debugai_core::constants::links::DOC_LINKS;

/// Result of processing a slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Clear the conversation.
    Clear,
    /// Quit the application.
    Quit,
    /// Show the exchanged-message count.
    ShowStats,
    /// Not a command - submit as a regular message.
    NotACommand,
}

/// Interprets `/word` inputs. Anything else, including absolute paths such as
/// `/var/lib/docker: no space left`, is submitted for analysis.
pub fn handle_command(input: &str) -> CommandResult {
    let input = input.trim();
    let cmd = input.split_whitespace().next().unwrap_or(input);
    if !is_command_word(cmd) {
        return CommandResult::NotACommand;
    }

    match cmd {
        "/help" | "/h" => CommandResult::Message(HELP_TEXT.into()),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/clear" => CommandResult::Clear,
        "/stats" => CommandResult::ShowStats,
        "/links" => CommandResult::Message(links_text()),
        "/version" => CommandResult::Message(format!("DebugAI v{}", env!("CARGO_PKG_VERSION"))),
        _ => CommandResult::Message(format!("Comando desconhecido: {cmd}. Digite /help para ver os comandos.")),
    }
}

fn is_command_word(token: &str) -> bool {
    token
        .strip_prefix('/')
        .is_some_and(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()))
}

pub fn links_text() -> String {
    let mut text = String::from("🔧 Links úteis");
    for (label, url) in DOC_LINKS {
        text.push_str(&format!("\n  {label}: {url}"));
    }
    text
}

const HELP_TEXT: &str = "\
╭─ DebugAI ──────────────────────────────────────────╮

  /clear             Limpar conversa
  /stats             Mensagens trocadas
  /links             Links úteis (Docker, Kubernetes, ...)
  /version           Versão
  /help, /h          Esta ajuda
  /exit, /quit, /q   Sair

  Qualquer outro texto é enviado para análise.

╰────────────────────────────────────────────────────╯";
