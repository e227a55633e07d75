use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use debugai_core::constants::links::DOC_LINKS;
use debugai_core::constants::text::{INTRO, THINKING};
use debugai_core::{LlmClient, Session, Turn};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Terminal,
};
use std::io;
use tokio::sync::mpsc;

use crate::commands::{self, CommandResult};
use crate::theme::Theme;
use crate::transcript;

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(llm: Box<dyn LlmClient>, prompt: &str) -> Result<()> {
    let mut session = Session::new(llm);
    let turn = session.submit(prompt).await?;
    println!("{}", turn.content());
    Ok(())
}

// ── Session worker ──────────────────────────────────────────────────────

enum SessionRequest {
    Submit(String),
    Clear,
}

/// Owns the session and handles requests one at a time. After each request
/// the full transcript is sent back to the UI.
fn spawn_session_worker(
    mut session: Session,
    mut requests: mpsc::UnboundedReceiver<SessionRequest>,
    updates: mpsc::UnboundedSender<Vec<Turn>>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = requests.recv().await {
            match request {
                SessionRequest::Submit(input) => {
                    if let Err(e) = session.submit(&input).await {
                        tracing::warn!(error = %e, "submission rejected");
                    }
                }
                SessionRequest::Clear => session.clear(),
            }
            if updates.send(session.store().turns().to_vec()).is_err() {
                break;
            }
        }
    })
}

// ── Interactive TUI ─────────────────────────────────────────────────────

struct AppState {
    // Input
    input: String,
    cursor_pos: usize,
    input_history: Vec<String>,
    history_pos: Option<usize>,

    // Transcript
    turns: Vec<Turn>,
    pending: Option<Turn>,
    notice: Option<String>,
    scroll_offset: usize,

    // Status
    is_processing: bool,
    status_text: String,
    model_name: String,

    should_quit: bool,
    theme: Theme,
}

impl AppState {
    fn new(session: &Session, theme_name: &str) -> Self {
        Self {
            input: String::new(),
            cursor_pos: 0,
            input_history: Vec::new(),
            history_pos: None,

            turns: session.store().turns().to_vec(),
            pending: None,
            notice: None,
            scroll_offset: 0,

            is_processing: false,
            status_text: "Pronto".into(),
            model_name: session.model_name().to_string(),

            should_quit: false,
            theme: Theme::by_name(theme_name),
        }
    }

    fn scroll_to_bottom(&mut self) {
        // Resolved on next draw
        self.scroll_offset = usize::MAX;
    }

    fn apply_update(&mut self, turns: Vec<Turn>) {
        self.turns = turns;
        self.pending = None;
        self.is_processing = false;
        self.status_text = "Pronto".into();
        self.scroll_to_bottom();
    }

    fn push_history(&mut self, input: String) {
        if !input.is_empty() && self.input_history.last() != Some(&input) {
            self.input_history.push(input);
        }
        self.history_pos = None;
    }

    fn history_prev(&mut self) {
        if self.input_history.is_empty() {
            return;
        }
        let pos = match self.history_pos {
            None => self.input_history.len() - 1,
            Some(p) => p.saturating_sub(1),
        };
        self.history_pos = Some(pos);
        self.input = self.input_history[pos].clone();
        self.cursor_pos = self.input.len();
    }

    fn history_next(&mut self) {
        if let Some(pos) = self.history_pos {
            if pos + 1 >= self.input_history.len() {
                self.history_pos = None;
                self.input.clear();
                self.cursor_pos = 0;
            } else {
                self.history_pos = Some(pos + 1);
                self.input = self.input_history[pos + 1].clone();
                self.cursor_pos = self.input.len();
            }
        }
    }
}

pub async fn run_tui(llm: Box<dyn LlmClient>, theme_name: &str) -> Result<()> {
    let session = Session::new(llm);
    let mut state = AppState::new(&session, theme_name);

    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = spawn_session_worker(session, request_rx, update_tx);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut state, &request_tx, &mut update_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    worker.abort();
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    request_tx: &mpsc::UnboundedSender<SessionRequest>,
    update_rx: &mut mpsc::UnboundedReceiver<Vec<Turn>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, state))?;

        while let Ok(turns) = update_rx.try_recv() {
            state.apply_update(turns);
        }

        if event::poll(std::time::Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(state, key, request_tx);
                }
            }
        }

        if state.should_quit {
            return Ok(());
        }
    }
}

fn draw_ui(f: &mut ratatui::Frame, state: &mut AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(34)])
        .split(f.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // intro
            Constraint::Min(5),    // chat
            Constraint::Length(3), // input
            Constraint::Length(1), // status
        ])
        .split(columns[0]);

    draw_intro(f, rows[0], &state.theme);
    draw_chat(f, rows[1], state);
    draw_input(f, rows[2], state);
    draw_status_bar(f, rows[3], state);
    draw_sidebar(f, columns[1], state);
}

fn draw_intro(f: &mut ratatui::Frame, area: Rect, theme: &Theme) {
    let intro = Paragraph::new(INTRO)
        .style(Style::default().fg(theme.muted).bg(theme.bg))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " 👾 DebugAI ",
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(intro, area);
}

fn draw_chat(f: &mut ratatui::Frame, area: Rect, state: &mut AppState) {
    let theme = &state.theme;
    let mut lines = transcript::build_transcript_lines(&state.turns, state.pending.as_ref(), theme);
    if let Some(ref notice) = state.notice {
        for line in notice.lines() {
            lines.push(Line::from(Span::styled(line, Style::default().fg(theme.muted))));
        }
    }

    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);

    if state.scroll_offset == usize::MAX || state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    let chat = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(theme.bg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Conversa ")
                .border_style(Style::default().fg(theme.border)),
        )
        .wrap(Wrap { trim: false })
        .scroll((transcript::scroll_row(state.scroll_offset), 0));
    f.render_widget(chat, area);

    if total_lines > visible_height {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(state.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("^"))
                .end_symbol(Some("v")),
            area,
            &mut scrollbar_state,
        );
    }
}

fn draw_input(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let is_command = state.input.starts_with('/');

    let title = if state.is_processing {
        " Analisando... "
    } else if is_command {
        " Comando "
    } else {
        " 💬 Digite o erro ou log aqui "
    };

    let input_style = if state.is_processing {
        Style::default().fg(theme.muted)
    } else {
        Style::default().fg(theme.fg)
    };

    let input = Paragraph::new(state.input.as_str())
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(if is_command {
                    theme.accent
                } else {
                    theme.border
                })),
        );
    f.render_widget(input, area);

    if !state.is_processing {
        let cursor_col = state.input[..state.cursor_pos].chars().count() as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        f.set_cursor_position(((area.x + cursor_col + 1).min(max_x), area.y + 1));
    }
}

fn draw_status_bar(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", state.model_name),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(theme.muted)),
        Span::styled(&state.status_text, Style::default().fg(theme.muted)),
        Span::styled("  Ctrl+C sair · /help", Style::default().fg(theme.muted)),
    ]));
    f.render_widget(status, area);
}

fn draw_sidebar(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let heading = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("⚙️ Configurações", heading)),
        Line::from(Span::styled("  /clear  Limpar conversa", Style::default().fg(theme.fg))),
        Line::raw(""),
        Line::from(Span::styled("📊 Estatísticas", heading)),
        Line::from(vec![
            Span::styled("  Mensagens trocadas: ", Style::default().fg(theme.fg)),
            Span::styled(
                state.turns.len().to_string(),
                Style::default().fg(theme.code_fg).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if let Some(time) = transcript::last_activity(&state.turns) {
        lines.push(Line::from(vec![
            Span::styled("  Última mensagem: ", Style::default().fg(theme.fg)),
            Span::styled(time, Style::default().fg(theme.muted)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("🔧 Links úteis", heading)));
    for (label, url) in DOC_LINKS {
        lines.push(Line::from(Span::styled(format!("  {label}"), Style::default().fg(theme.fg))));
        lines.push(Line::from(Span::styled(format!("    {url}"), Style::default().fg(theme.muted))));
    }

    let sidebar = Paragraph::new(Text::from(lines))
        .style(Style::default().bg(theme.bg))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(sidebar, area);
}

fn handle_key(
    state: &mut AppState,
    key: KeyEvent,
    request_tx: &mpsc::UnboundedSender<SessionRequest>,
) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => state.should_quit = true,

        (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
            if !state.is_processing {
                clear_conversation(state, request_tx);
            }
        }

        (_, KeyCode::Enter) => {
            if state.input.trim().is_empty() || state.is_processing {
                return;
            }
            let input = std::mem::take(&mut state.input);
            state.cursor_pos = 0;
            state.push_history(input.clone());
            submit_input(state, input, request_tx);
        }

        (_, KeyCode::Backspace) => {
            let prev = state.input[..state.cursor_pos].chars().next_back();
            if let Some(ch) = prev {
                state.cursor_pos -= ch.len_utf8();
                state.input.remove(state.cursor_pos);
            }
        }
        (_, KeyCode::Delete) => {
            if state.cursor_pos < state.input.len() {
                state.input.remove(state.cursor_pos);
            }
        }
        (_, KeyCode::Left) => {
            if let Some(ch) = state.input[..state.cursor_pos].chars().next_back() {
                state.cursor_pos -= ch.len_utf8();
            }
        }
        (_, KeyCode::Right) => {
            if let Some(ch) = state.input[state.cursor_pos..].chars().next() {
                state.cursor_pos += ch.len_utf8();
            }
        }
        (_, KeyCode::Home) => state.cursor_pos = 0,
        (_, KeyCode::End) => state.cursor_pos = state.input.len(),
        (_, KeyCode::Up) => state.history_prev(),
        (_, KeyCode::Down) => state.history_next(),
        (_, KeyCode::PageUp) => state.scroll_offset = state.scroll_offset.saturating_sub(10),
        (_, KeyCode::PageDown) => state.scroll_offset = state.scroll_offset.saturating_add(10),

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            state.input.insert(state.cursor_pos, c);
            state.cursor_pos += c.len_utf8();
        }
        _ => {}
    }
}

fn submit_input(
    state: &mut AppState,
    input: String,
    request_tx: &mpsc::UnboundedSender<SessionRequest>,
) {
    match commands::handle_command(&input) {
        CommandResult::NotACommand => {
            state.notice = None;
            state.pending = Some(Turn::user(input.clone()));
            state.is_processing = true;
            state.status_text = THINKING.into();
            state.scroll_to_bottom();
            let _ = request_tx.send(SessionRequest::Submit(input));
        }
        CommandResult::Clear => clear_conversation(state, request_tx),
        CommandResult::Quit => state.should_quit = true,
        CommandResult::ShowStats => {
            state.notice = Some(format!("📊 Mensagens trocadas: {}", state.turns.len()));
            state.scroll_to_bottom();
        }
        CommandResult::Message(text) => {
            state.notice = Some(text);
            state.scroll_to_bottom();
        }
    }
}

fn clear_conversation(state: &mut AppState, request_tx: &mpsc::UnboundedSender<SessionRequest>) {
    let _ = request_tx.send(SessionRequest::Clear);
    state.notice = Some("🗑️ Conversa limpa.".into());
    state.scroll_offset = 0;
}
