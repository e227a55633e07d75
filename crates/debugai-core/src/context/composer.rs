use super::turn::Turn;
use crate::constants::limits::HISTORY_WINDOW;

/// Builds the model-facing prompt from recent history and the new message.
///
/// Pure: the same history and input always produce the same string.
pub struct PromptComposer;

impl PromptComposer {
    pub const HISTORY_WINDOW: usize = HISTORY_WINDOW;

    /// Renders each turn as `"<label>: <content>"`, one per line.
    pub fn render_history(turns: &[Turn]) -> String {
        let mut block = String::new();
        for turn in turns {
            block.push_str(turn.role().label());
            block.push_str(": ");
            block.push_str(turn.content());
            block.push('\n');
        }
        block
    }

    /// Composes the full prompt. Only the last [`Self::HISTORY_WINDOW`] turns
    /// of `history` are used.
    pub fn compose(history: &[Turn], new_input: &str) -> String {
        let start = history.len().saturating_sub(Self::HISTORY_WINDOW);
        let history_block = Self::render_history(&history[start..]);

        let mut prompt = String::with_capacity(
            PREAMBLE.len() + RULES.len() + history_block.len() + new_input.len() + 64,
        );
        prompt.push_str(PREAMBLE);
        prompt.push_str("\n\nHistórico da conversa até agora:\n");
        prompt.push_str(&history_block);
        prompt.push_str("\n\nNova mensagem do usuário:\n");
        prompt.push_str(new_input);
        prompt.push_str("\n\n");
        prompt.push_str(RULES);
        prompt
    }
}

const PREAMBLE: &str = "\
Você é um assistente especializado em DevOps, Docker, Kubernetes, Prometheus, AWS e Linux.
O usuário fornecerá mensagens, incluindo erros, logs e contexto adicional.";

const RULES: &str = "\
Regras:
1. Sempre responda em português.
2. Mantenha coerência com o histórico (não reinicie a conversa).
3. Se o usuário apenas adicionar detalhes (ex.: \"no Linux\"), use o contexto anterior.
4. Explique de forma clara e sugira soluções práticas.
5. Se não souber, peça mais detalhes, mas sem perder o contexto.";
