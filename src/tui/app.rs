// src/tui/app.rs — TUI application state, event loop, and rendering.

use std::io;
use std::time::Duration;

use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, TableState},
    Frame, Terminal,
};

use crate::core::progress::Outcome;
use crate::core::state::{GameEvent, GameState};
use crate::core::types::QuestDraft;
use crate::infra::config::Config;

use super::theme::Theme;
use super::widgets::{self, form::FormField};

// ── Focus ────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Form,
    Quests,
}

// ── Footer notice ────────────────────────────────────────────────

#[derive(Clone, Copy)]
enum NoticeKind {
    Reward,
    Penalty,
    Info,
}

struct Notice {
    text: String,
    kind: NoticeKind,
}

impl Notice {
    fn reward(text: String) -> Self {
        Self {
            text,
            kind: NoticeKind::Reward,
        }
    }

    fn penalty(text: String) -> Self {
        Self {
            text,
            kind: NoticeKind::Penalty,
        }
    }

    fn info(text: String) -> Self {
        Self {
            text,
            kind: NoticeKind::Info,
        }
    }

    fn style(&self) -> Style {
        match self.kind {
            NoticeKind::Reward => Theme::success(),
            NoticeKind::Penalty => Theme::error(),
            NoticeKind::Info => Theme::text_dim(),
        }
    }
}

// ── App state ────────────────────────────────────────────────────

struct App {
    game: GameState,
    draft: QuestDraft,
    focus: Focus,
    form_field: FormField,
    quest_table: TableState,
    notice: Option<Notice>,
}

impl App {
    fn new() -> Self {
        Self {
            game: GameState::new(),
            draft: QuestDraft::default(),
            focus: Focus::Form,
            form_field: FormField::Name,
            quest_table: TableState::default(),
            notice: None,
        }
    }

    /// Handle one key event. Returns true when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl-C quits from anywhere, even mid-typing.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Quests => self.handle_quests_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Esc => {
                self.focus = Focus::Quests;
                self.ensure_selection();
            }
            KeyCode::Up => self.form_field = self.form_field.prev(),
            KeyCode::Down => self.form_field = self.form_field.next(),
            KeyCode::Enter => self.submit_draft(),
            KeyCode::Left if self.form_field == FormField::Difficulty => {
                self.draft.difficulty = self.draft.difficulty.prev();
            }
            KeyCode::Right if self.form_field == FormField::Difficulty => {
                self.draft.difficulty = self.draft.difficulty.next();
            }
            KeyCode::Char(' ') if self.form_field == FormField::Difficulty => {
                self.draft.difficulty = self.draft.difficulty.next();
            }
            KeyCode::Backspace => {
                if let Some(value) = self.active_text_field() {
                    value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(value) = self.active_text_field() {
                    value.push(c);
                }
            }
            _ => {}
        }
        false
    }

    fn handle_quests_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.focus = Focus::Form,
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.quest_table.selected().unwrap_or(0);
                let max = self.game.quests.len().saturating_sub(1);
                self.quest_table.select(Some((i + 1).min(max)));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.quest_table.selected().unwrap_or(0);
                self.quest_table.select(Some(i.saturating_sub(1)));
            }
            KeyCode::Enter | KeyCode::Char('c') => self.complete_selected(),
            _ => {}
        }
        false
    }

    /// The draft field currently receiving text, if any.
    fn active_text_field(&mut self) -> Option<&mut String> {
        match self.form_field {
            FormField::Name => Some(&mut self.draft.name),
            FormField::Gold => Some(&mut self.draft.gold),
            FormField::TimeLimit => Some(&mut self.draft.time_limit),
            FormField::Difficulty => None,
        }
    }

    fn submit_draft(&mut self) {
        // The form layer enforces required fields; the store does not.
        if !self.draft.is_submittable() {
            self.notice = Some(Notice::info("every field is required".into()));
            return;
        }

        let draft = std::mem::take(&mut self.draft);
        let name = draft.name.clone();
        self.game.apply(GameEvent::QuestSubmitted {
            draft,
            at: Utc::now(),
        });
        self.form_field = FormField::Name;
        self.notice = Some(Notice::info(format!("quest accepted: {name}")));
        self.ensure_selection();
    }

    fn complete_selected(&mut self) {
        let Some(idx) = self.quest_table.selected() else {
            return;
        };
        let Some(id) = self.game.quests.iter().nth(idx).map(|q| q.id) else {
            return;
        };

        if let Some(resolution) = self.game.apply(GameEvent::QuestCompleted {
            id,
            at: Utc::now(),
        }) {
            self.notice = Some(match resolution.outcome {
                Outcome::OnTime { gold, exp } => Notice::reward(format!(
                    "{} complete: +{gold} gold, +{exp} EXP",
                    resolution.quest_name
                )),
                Outcome::Late { health_lost } => Notice::penalty(format!(
                    "{} was overdue: -{health_lost} HP",
                    resolution.quest_name
                )),
            });
        }

        // Keep the selection inside the shrunken list.
        let len = self.game.quests.len();
        if len == 0 {
            self.quest_table.select(None);
        } else if idx >= len {
            self.quest_table.select(Some(len - 1));
        }
    }

    fn ensure_selection(&mut self) {
        if self.quest_table.selected().is_none() && !self.game.quests.is_empty() {
            self.quest_table.select(Some(0));
        }
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the quest board. Blocks until the user quits (q / Esc in
/// the quest list, Ctrl-C anywhere).
pub fn run_app(config: &Config) -> anyhow::Result<()> {
    let mut app = App::new();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let banner = config.ui.banner;

    loop {
        // Draw; the tick also refreshes the elapsed-time column.
        terminal.draw(|f| render(f, app, banner))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key) {
                    return Ok(());
                }
            }
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

fn render(f: &mut Frame, app: &mut App, banner: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(widgets::status::height(banner)),
            Constraint::Length(widgets::form::HEIGHT),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(f.area());

    widgets::status::render(f, chunks[0], &app.game.stats, banner);

    let focus_field = if app.focus == Focus::Form {
        Some(app.form_field)
    } else {
        None
    };
    widgets::form::render(f, chunks[1], &app.draft, focus_field);

    widgets::quests::render(
        f,
        chunks[2],
        &app.game.quests,
        Utc::now(),
        &mut app.quest_table,
        app.focus == Focus::Quests,
    );

    render_footer(f, chunks[3], app);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let notice_line = match &app.notice {
        Some(n) => Line::from(Span::styled(format!(" {}", n.text), n.style())),
        None => Line::from(""),
    };

    let hints = match app.focus {
        Focus::Form => Line::from(vec![
            Span::styled(" Tab", Theme::key_hint()),
            Span::styled(" quest list  ", Theme::key_desc()),
            Span::styled("\u{2191}\u{2193}", Theme::key_hint()),
            Span::styled(" field  ", Theme::key_desc()),
            Span::styled("\u{2190}\u{2192}", Theme::key_hint()),
            Span::styled(" difficulty  ", Theme::key_desc()),
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" accept  ", Theme::key_desc()),
            Span::styled("Ctrl-C", Theme::key_hint()),
            Span::styled(" quit", Theme::key_desc()),
        ]),
        Focus::Quests => Line::from(vec![
            Span::styled(" Tab", Theme::key_hint()),
            Span::styled(" new quest  ", Theme::key_desc()),
            Span::styled("j/k/\u{2191}\u{2193}", Theme::key_hint()),
            Span::styled(" select  ", Theme::key_desc()),
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(" complete  ", Theme::key_desc()),
            Span::styled("q", Theme::key_hint()),
            Span::styled(" quit", Theme::key_desc()),
        ]),
    };

    f.render_widget(Paragraph::new(vec![notice_line, hints]), area);
}
