use debugai_cli::commands::{handle_command, links_text, CommandResult};
use debugai_cli::theme::Theme;
use debugai_cli::transcript::{build_transcript_lines, last_activity, scroll_row, turn_lines};
use debugai_core::Turn;

// ========================================================================
// Command Parsing Tests (commands.rs)
// ========================================================================

#[test]
fn test_help_command() {
    let result = handle_command("/help");
    assert!(matches!(result, CommandResult::Message(_)));

    if let CommandResult::Message(msg) = result {
        assert!(msg.contains("DebugAI"));
        assert!(msg.contains("/clear"));
        assert!(msg.contains("/stats"));
    }
}

#[test]
fn test_help_command_short_alias() {
    assert!(matches!(handle_command("/h"), CommandResult::Message(_)));
}

#[test]
fn test_quit_aliases() {
    for cmd in ["/exit", "/quit", "/q"] {
        assert_eq!(handle_command(cmd), CommandResult::Quit, "{cmd}");
    }
}

#[test]
fn test_clear_command() {
    assert_eq!(handle_command("/clear"), CommandResult::Clear);
}

#[test]
fn test_clear_command_with_surrounding_whitespace() {
    assert_eq!(handle_command("  /clear  "), CommandResult::Clear);
}

#[test]
fn test_stats_command() {
    assert_eq!(handle_command("/stats"), CommandResult::ShowStats);
}

#[test]
fn test_links_command_lists_docs() {
    let CommandResult::Message(msg) = handle_command("/links") else {
        panic!("expected message");
    };
    assert!(msg.contains("https://docs.docker.com/"));
    assert!(msg.contains("https://kubernetes.io/docs/"));
    assert!(msg.contains("https://prometheus.io/docs/"));
    assert!(msg.contains("https://docs.aws.amazon.com/cli/"));
    assert_eq!(msg, links_text());
}

#[test]
fn test_version_command() {
    let CommandResult::Message(msg) = handle_command("/version") else {
        panic!("expected message");
    };
    assert!(msg.starts_with("DebugAI v"));
}

#[test]
fn test_unknown_command_points_to_help() {
    let CommandResult::Message(msg) = handle_command("/foo bar") else {
        panic!("expected message");
    };
    assert!(msg.contains("/foo"));
    assert!(msg.contains("/help"));
}

#[test]
fn test_plain_text_is_not_a_command() {
    assert_eq!(
        handle_command("Error: Docker daemon not running"),
        CommandResult::NotACommand
    );
    assert_eq!(handle_command("kubectl get pods /tmp"), CommandResult::NotACommand);
}

#[test]
fn test_path_prefixed_log_lines_are_not_commands() {
    for input in [
        "/var/lib/docker: no space left on device",
        "/usr/bin/python3 exited with code 137",
        "/etc: permission denied",
        "/ is 100% full",
        "/opt/app/start.sh",
    ] {
        assert_eq!(handle_command(input), CommandResult::NotACommand, "{input}");
    }
}

// ========================================================================
// Theme Tests (theme.rs)
// ========================================================================

#[test]
fn test_theme_by_name_falls_back_to_hacker() {
    assert_eq!(Theme::by_name("plain").name, "plain");
    assert_eq!(Theme::by_name("does-not-exist").name, "hacker");
    for name in Theme::all_names() {
        assert_eq!(Theme::by_name(name).name, *name);
    }
}

// ========================================================================
// Transcript Tests (transcript.rs)
// ========================================================================

fn line_text(line: &ratatui::text::Line) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_turn_lines_prefix_first_line_and_indent_rest() {
    let theme = Theme::hacker();
    let turn = Turn::assistant("linha 1\nlinha 2");
    let lines = turn_lines(&turn, &theme);

    assert_eq!(lines.len(), 2);
    assert_eq!(line_text(&lines[0]), "DebugAI > linha 1");
    assert_eq!(line_text(&lines[1]), "          linha 2");
}

#[test]
fn test_code_block_lines_use_code_color() {
    let theme = Theme::hacker();
    let turn = Turn::assistant("Rode:\n```bash\nsudo systemctl start docker\n```\nPronto.");
    let lines = turn_lines(&turn, &theme);

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2].spans[1].style.fg, Some(theme.code_fg));
    assert_eq!(lines[4].spans[1].style.fg, Some(theme.assistant_color));
}

#[test]
fn test_error_reply_uses_error_color() {
    let theme = Theme::hacker();
    let turn = Turn::assistant("Erro ao gerar resposta: timeout");
    let lines = turn_lines(&turn, &theme);
    assert_eq!(lines[0].spans[1].style.fg, Some(theme.error));
}

#[test]
fn test_transcript_shows_pending_turn_and_thinking_marker() {
    let theme = Theme::plain();
    let turns = vec![Turn::assistant("olá")];
    let pending = Turn::user("erro 500");

    let idle = build_transcript_lines(&turns, None, &theme);
    assert_eq!(idle.len(), 2);

    let busy = build_transcript_lines(&turns, Some(&pending), &theme);
    let text: Vec<String> = busy.iter().map(line_text).collect();
    assert!(text.contains(&"Você > erro 500".to_string()));
    assert!(text.last().unwrap().contains("Analisando"));
}

#[test]
fn test_empty_transcript_renders_nothing() {
    let theme = Theme::plain();
    assert!(build_transcript_lines(&[], None, &theme).is_empty());
}

#[test]
fn test_last_activity_uses_newest_turn_time() {
    assert_eq!(last_activity(&[]), None);

    let turns = vec![Turn::user("a"), Turn::assistant("b")];
    let expected = turns[1].timestamp().format("%H:%M:%S").to_string();
    let label = last_activity(&turns).unwrap();
    assert_eq!(label, expected);
    assert_eq!(label.len(), 8);
}

#[test]
fn test_scroll_row_saturates_instead_of_wrapping() {
    assert_eq!(scroll_row(0), 0);
    assert_eq!(scroll_row(1234), 1234);
    assert_eq!(scroll_row(65_535), u16::MAX);
    assert_eq!(scroll_row(65_536), u16::MAX);
    assert_eq!(scroll_row(200_000), u16::MAX);
}
