use debugai_core::constants::text::{ERROR_PREFIX, THINKING};
use debugai_core::{Role, Turn};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::theme::Theme;

pub const USER_PREFIX: &str = "Você > ";
pub const ASSISTANT_PREFIX: &str = "DebugAI > ";

/// Renders one turn. Assistant turns get fenced code blocks highlighted.
pub fn turn_lines<'a>(turn: &'a Turn, theme: &Theme) -> Vec<Line<'a>> {
    let (prefix, color) = match turn.role() {
        Role::User => (USER_PREFIX, theme.user_color),
        Role::Assistant if turn.content().starts_with(ERROR_PREFIX) => {
            (ASSISTANT_PREFIX, theme.error)
        }
        Role::Assistant => (ASSISTANT_PREFIX, theme.assistant_color),
    };
    let prefix_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let indent = " ".repeat(prefix.chars().count());
    let highlight_code = turn.role() == Role::Assistant;

    let mut lines = Vec::new();
    let mut in_code_block = false;

    for (i, raw_line) in turn.content().lines().enumerate() {
        let lead = if i == 0 {
            Span::styled(prefix, prefix_style)
        } else {
            Span::raw(indent.clone())
        };

        if highlight_code && raw_line.trim_start().starts_with("```") {
            in_code_block = !in_code_block;
            lines.push(Line::from(vec![
                lead,
                Span::styled(raw_line, Style::default().fg(theme.muted)),
            ]));
            continue;
        }

        let style = if in_code_block {
            Style::default().fg(theme.code_fg)
        } else {
            Style::default().fg(color)
        };
        lines.push(Line::from(vec![lead, Span::styled(raw_line, style)]));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(prefix, prefix_style)));
    }

    lines
}

/// Full transcript, plus the in-flight message and a thinking marker while
/// a request is pending.
pub fn build_transcript_lines<'a>(
    turns: &'a [Turn],
    pending: Option<&'a Turn>,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for turn in turns {
        lines.extend(turn_lines(turn, theme));
        lines.push(Line::raw(""));
    }

    if let Some(turn) = pending {
        lines.extend(turn_lines(turn, theme));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("  {THINKING}"),
            Style::default().fg(theme.accent).add_modifier(Modifier::DIM),
        )));
    }

    lines
}

/// `HH:MM:SS` of the newest turn, for the sidebar.
pub fn last_activity(turns: &[Turn]) -> Option<String> {
    turns
        .last()
        .map(|turn| turn.timestamp().format("%H:%M:%S").to_string())
}

/// Paragraph scroll row. Offsets past `u16::MAX` pin to the last reachable row.
pub fn scroll_row(offset: usize) -> u16 {
    offset.min(u16::MAX as usize) as u16
}
