// src/tui/widgets/quests.rs — Active quest table panel.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::core::progress::elapsed_hours;
use crate::core::quests::QuestLog;
use crate::core::types::Quest;
use crate::tui::theme::Theme;

pub fn render(
    f: &mut Frame,
    area: Rect,
    log: &QuestLog,
    now: DateTime<Utc>,
    state: &mut TableState,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" Quests ({}) ", log.len()))
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focus()
        } else {
            Theme::border()
        });

    if log.is_empty() {
        let p = Paragraph::new(Line::from(Span::styled(
            "  No active quests. Tab to the form and take one on.",
            Theme::text_dim(),
        )))
        .block(block);
        f.render_widget(p, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Quest").style(Theme::table_header()),
        Cell::from("Difficulty").style(Theme::table_header()),
        Cell::from("Gold").style(Theme::table_header()),
        Cell::from("Limit").style(Theme::table_header()),
        Cell::from("Elapsed").style(Theme::table_header()),
        Cell::from("Due").style(Theme::table_header()),
    ]);

    let rows: Vec<Row> = log.iter().map(|q| quest_row(q, now)).collect();

    let widths = [
        Constraint::Min(20),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Theme::table_selected())
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, state);
}

fn quest_row(q: &Quest, now: DateTime<Utc>) -> Row<'static> {
    let elapsed = elapsed_hours(q.created_at, now);
    let remaining = q.time_limit_hours - elapsed;

    // Display only: the limit is enforced when the player completes
    // the quest, never by a timer.
    let due_cell = if remaining >= 0.0 {
        let style = if remaining < 0.25 {
            Theme::warning()
        } else {
            Theme::success()
        };
        Cell::from(format!("{} left", format_hours(remaining))).style(style)
    } else {
        Cell::from("overdue").style(Theme::error())
    };

    Row::new(vec![
        Cell::from(truncate(&q.name, 32)).style(Theme::text()),
        Cell::from(q.difficulty.label()).style(Theme::difficulty(q.difficulty)),
        Cell::from(format!("{}g", q.gold)).style(Theme::gold()),
        Cell::from(format_hours(q.time_limit_hours)).style(Theme::text_dim()),
        Cell::from(format_hours(elapsed.max(0.0))).style(Theme::text_dim()),
        due_cell,
    ])
}

fn format_hours(hours: f64) -> String {
    if hours < 1.0 {
        format!("{:.0}m", hours * 60.0)
    } else if hours < 48.0 {
        format!("{:.1}h", hours)
    } else {
        format!("{:.0}d", hours / 24.0)
    }
}

/// Truncate for display (UTF-8 safe).
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max.saturating_sub(3);
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
