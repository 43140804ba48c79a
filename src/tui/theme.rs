// src/tui/theme.rs — Color scheme and style definitions for the quest board.

use ratatui::style::{Color, Modifier, Style};

use crate::core::types::Difficulty;

/// Dungeon-terminal palette.
pub struct Theme;

impl Theme {
    // ── Palette ──────────────────────────────────────────────────
    pub const GOLD: Color = Color::Rgb(230, 190, 80);
    pub const PARCHMENT: Color = Color::Rgb(235, 225, 200);
    pub const MOSS: Color = Color::Rgb(110, 190, 100);
    pub const TORCH: Color = Color::Rgb(240, 150, 50);
    pub const EMBER: Color = Color::Rgb(220, 90, 60);
    pub const ARCANE: Color = Color::Rgb(150, 130, 230);
    pub const SLATE: Color = Color::Rgb(130, 130, 150);
    pub const SHADOW: Color = Color::Rgb(80, 80, 100);

    // ── Semantic styles ──────────────────────────────────────────

    /// Main title / banner.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::GOLD)
            .add_modifier(Modifier::BOLD)
    }

    /// Block border (normal).
    pub fn border() -> Style {
        Style::default().fg(Theme::SHADOW)
    }

    /// Block border (focused panel).
    pub fn border_focus() -> Style {
        Style::default().fg(Theme::GOLD)
    }

    /// Normal body text.
    pub fn text() -> Style {
        Style::default().fg(Theme::PARCHMENT)
    }

    /// Dimmed / secondary text.
    pub fn text_dim() -> Style {
        Style::default().fg(Theme::SLATE)
    }

    /// Reward granted / on-time indicator.
    pub fn success() -> Style {
        Style::default().fg(Theme::MOSS)
    }

    /// Warning / running-out-of-time indicator.
    pub fn warning() -> Style {
        Style::default().fg(Theme::TORCH)
    }

    /// Penalty / overdue indicator.
    pub fn error() -> Style {
        Style::default().fg(Theme::EMBER)
    }

    /// Gold amounts.
    pub fn gold() -> Style {
        Style::default().fg(Theme::GOLD)
    }

    /// Level / experience accent.
    pub fn arcane() -> Style {
        Style::default().fg(Theme::ARCANE)
    }

    /// Table header row.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::GOLD)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Selected table row.
    pub fn table_selected() -> Style {
        Style::default()
            .bg(Color::Rgb(50, 45, 35))
            .fg(Theme::PARCHMENT)
    }

    /// Key hint in the footer.
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::GOLD)
    }

    /// Description next to a key hint.
    pub fn key_desc() -> Style {
        Style::default().fg(Theme::SLATE)
    }

    /// Focused form field label.
    pub fn field_focus() -> Style {
        Style::default()
            .fg(Theme::GOLD)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the health readout, color-coded by remaining HP.
    pub fn health(hp: u32) -> Style {
        if hp > 60 {
            Style::default().fg(Theme::MOSS)
        } else if hp > 30 {
            Style::default().fg(Theme::TORCH)
        } else {
            Style::default().fg(Theme::EMBER)
        }
    }

    /// Style for a difficulty tag.
    pub fn difficulty(d: Difficulty) -> Style {
        match d {
            Difficulty::Easy => Style::default().fg(Theme::MOSS),
            Difficulty::Medium => Style::default().fg(Theme::TORCH),
            Difficulty::Hard => Style::default().fg(Theme::EMBER),
        }
    }
}
