// src/tui/widgets/status.rs — Player stats header panel.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::types::{PlayerStats, EXP_PER_LEVEL, MAX_HEALTH};
use crate::tui::theme::Theme;

const BANNER: &str = r"  ___  _   _ _____ ____ _____ _     ___   ____
 / _ \| | | | ____/ ___|_   _| |   / _ \ / ___|
| | | | | | |  _| \___ \ | | | |  | | | | |  _
| |_| | |_| | |___ ___) || | | |__| |_| | |_| |
 \__\_\\___/|_____|____/ |_| |_____\___/ \____|";

/// Panel height in rows. The stats line and borders always fit in 3;
/// the banner adds its own lines plus a spacer.
pub fn height(banner: bool) -> u16 {
    if banner {
        3 + BANNER.lines().count() as u16 + 1
    } else {
        3
    }
}

pub fn render(f: &mut Frame, area: Rect, stats: &PlayerStats, banner: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut lines: Vec<Line> = Vec::new();
    if banner {
        for l in BANNER.lines() {
            lines.push(Line::from(Span::styled(l.to_string(), Theme::header())));
        }
        lines.push(Line::from(""));
    }
    lines.push(stat_line(stats));

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(p, area);
}

fn stat_line(stats: &PlayerStats) -> Line<'static> {
    let next_level_at = u64::from(stats.level()) * EXP_PER_LEVEL;
    Line::from(vec![
        Span::styled("HP ", Theme::text_dim()),
        Span::styled(
            format!("{}/{}", stats.health, MAX_HEALTH),
            Theme::health(stats.health),
        ),
        Span::styled("   Gold ", Theme::text_dim()),
        Span::styled(stats.gold.to_string(), Theme::gold()),
        Span::styled("   Level ", Theme::text_dim()),
        Span::styled(stats.level().to_string(), Theme::arcane()),
        Span::styled("   EXP ", Theme::text_dim()),
        Span::styled(stats.exp.to_string(), Theme::text()),
        Span::styled(
            format!(" (next level at {next_level_at})"),
            Theme::text_dim(),
        ),
    ])
}
