use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use debugai_core::*;

/// Replays canned results and records every prompt it receives.
struct ScriptedClient {
    replies: Mutex<VecDeque<std::result::Result<String, String>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedClient {
    fn new(replies: Vec<std::result::Result<&str, &str>>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let prompts = Arc::new(Mutex::new(Vec::new()));
        let client = Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(String::from).map_err(String::from))
                    .collect(),
            ),
            prompts: prompts.clone(),
        };
        (client, prompts)
    }

    fn always_ok() -> Self {
        Self::new(Vec::new()).0
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<LlmResponse, DebugAiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(LlmResponse::text(text)),
            Some(Err(message)) => Err(DebugAiError::Llm(message)),
            None => Ok(LlmResponse::text("ok")),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

// ========================================================================
// Session Tests (session/session.rs)
// ========================================================================

#[tokio::test]
async fn test_session_starts_with_greeting() {
    let session = Session::new(Box::new(ScriptedClient::always_ok()));
    assert_eq!(session.message_count(), 1);
    assert_eq!(session.store().turns()[0].role(), Role::Assistant);
    assert_eq!(session.model_name(), "scripted");
}

#[tokio::test]
async fn test_n_submissions_append_two_n_alternating_turns() {
    let mut session = Session::new(Box::new(ScriptedClient::always_ok()));

    for i in 0..4 {
        session.submit(&format!("erro {i}")).await.unwrap();
    }

    let turns = session.store().turns();
    assert_eq!(turns.len(), 1 + 2 * 4);
    for (i, turn) in turns[1..].iter().enumerate() {
        let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
        assert_eq!(turn.role(), expected);
    }
}

#[tokio::test]
async fn test_submit_returns_answer_verbatim() {
    let (client, _) = ScriptedClient::new(vec![Ok("Execute `sudo systemctl start docker`.")]);
    let mut session = Session::with_store(Box::new(client), ConversationStore::new());

    let turn = session.submit("Error: Docker daemon not running").await.unwrap();
    assert_eq!(turn.role(), Role::Assistant);
    assert_eq!(turn.content(), "Execute `sudo systemctl start docker`.");
}

#[tokio::test]
async fn test_timeout_error_becomes_assistant_turn() {
    let (client, _) = ScriptedClient::new(vec![Err("timeout"), Ok("segunda resposta")]);
    let mut session = Session::with_store(Box::new(client), ConversationStore::new());

    let turn = session.submit("Timeout conectando no RDS").await.unwrap();
    assert_eq!(turn.role(), Role::Assistant);
    assert_eq!(turn.content(), "Erro ao gerar resposta: timeout");

    // The conversation continues after a failure.
    let turn = session.submit("ainda falha").await.unwrap();
    assert_eq!(turn.content(), "segunda resposta");
    assert_eq!(session.message_count(), 4);
}

#[tokio::test]
async fn test_unreachable_gemini_keeps_api_key_out_of_transcript() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new("SECRET-KEY-123").with_base_url(format!("http://{addr}"));
    let mut session = Session::with_store(Box::new(client), ConversationStore::new());

    let turn = session
        .submit("/var/log/syslog: disk full")
        .await
        .unwrap();
    assert!(turn.content().starts_with("Erro ao gerar resposta: "));
    assert!(!turn.content().contains("SECRET-KEY-123"), "{}", turn.content());
    assert_eq!(session.message_count(), 2);
}

#[tokio::test]
async fn test_empty_input_is_rejected_without_appending() {
    let (client, prompts) = ScriptedClient::new(Vec::new());
    let mut session = Session::new(Box::new(client));

    let err = session.submit("   ").await.unwrap_err();
    assert!(matches!(err, DebugAiError::EmptyInput));
    assert_eq!(session.message_count(), 1);
    assert!(prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_prompt_window_includes_current_input_and_drops_old_turns() {
    let (client, prompts) = ScriptedClient::new(vec![Ok("r1"), Ok("r2"), Ok("r3")]);
    let mut session = Session::new(Box::new(client));

    session.submit("q1").await.unwrap();
    session.submit("q2").await.unwrap();
    session.submit("q3").await.unwrap();

    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 3);

    // First prompt: greeting + q1 are the whole history.
    assert!(prompts[0].contains("Assistente: 💡 Olá!"));
    assert!(prompts[0].contains("Usuário: q1\n"));

    // Third prompt: store holds greeting,q1,r1,q2,r2,q3 -> last five drop the greeting.
    let third = &prompts[2];
    assert!(!third.contains("💡 Olá!"));
    assert!(third.contains("Usuário: q1\nAssistente: r1\nUsuário: q2\nAssistente: r2\nUsuário: q3\n"));
    assert!(third.contains("Nova mensagem do usuário:\nq3"));
}

#[tokio::test]
async fn test_clear_empties_store_without_greeting() {
    let mut session = Session::new(Box::new(ScriptedClient::always_ok()));
    session.submit("q").await.unwrap();
    session.clear();

    assert_eq!(session.message_count(), 0);
    assert!(session.store().is_empty());

    session.submit("depois").await.unwrap();
    let turns = session.store().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].content(), "depois");
}

// ========================================================================
// Responder Tests (session/responder.rs)
// ========================================================================

#[tokio::test]
async fn test_responder_does_not_touch_history() {
    let (client, prompts) = ScriptedClient::new(vec![Ok("resposta")]);
    let history = vec![Turn::user("a"), Turn::assistant("b")];

    let reply = Responder::new(&client).respond(&history, "c").await;

    assert_eq!(reply, Reply::Answer("resposta".into()));
    assert_eq!(history.len(), 2);
    assert_eq!(
        prompts.lock().unwrap()[0],
        PromptComposer::compose(&history, "c")
    );
}

#[tokio::test]
async fn test_responder_folds_error_into_failure() {
    let (client, _) = ScriptedClient::new(vec![Err("timeout")]);
    let reply = Responder::new(&client).respond(&[], "x").await;

    assert_eq!(reply, Reply::Failure("timeout".into()));
    assert_eq!(reply.to_string(), "Erro ao gerar resposta: timeout");
}
