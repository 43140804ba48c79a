// src/tui/widgets/form.rs — New quest form panel.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::types::QuestDraft;
use crate::tui::theme::Theme;

/// Rows the form panel needs: four fields, a spacer, the submit hint,
/// and the borders.
pub const HEIGHT: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Difficulty,
    Gold,
    TimeLimit,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Difficulty,
        FormField::Gold,
        FormField::TimeLimit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Quest name",
            FormField::Difficulty => "Difficulty",
            FormField::Gold => "Gold reward",
            FormField::TimeLimit => "Time limit (hours)",
        }
    }

    /// Whether the field takes typed text (difficulty is a selector).
    pub fn is_text(&self) -> bool {
        !matches!(self, FormField::Difficulty)
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Difficulty,
            FormField::Difficulty => FormField::Gold,
            FormField::Gold => FormField::TimeLimit,
            FormField::TimeLimit => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::TimeLimit,
            FormField::Difficulty => FormField::Name,
            FormField::Gold => FormField::Difficulty,
            FormField::TimeLimit => FormField::Gold,
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, draft: &QuestDraft, focus: Option<FormField>) {
    let block = Block::default()
        .title(" New Quest ")
        .borders(Borders::ALL)
        .border_style(if focus.is_some() {
            Theme::border_focus()
        } else {
            Theme::border()
        });

    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| field_line(field, draft, focus == Some(field)))
        .collect();
    lines.push(Line::from(""));
    lines.push(submit_hint(draft));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(field: FormField, draft: &QuestDraft, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Theme::field_focus()
    } else {
        Theme::text_dim()
    };

    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{:<20}", field.label()), label_style),
    ];

    if field == FormField::Difficulty {
        let value = if focused {
            format!("< {} >", draft.difficulty)
        } else {
            draft.difficulty.to_string()
        };
        spans.push(Span::styled(value, Theme::difficulty(draft.difficulty)));
    } else {
        let value = match field {
            FormField::Name => &draft.name,
            FormField::Gold => &draft.gold,
            FormField::TimeLimit => &draft.time_limit,
            FormField::Difficulty => unreachable!(),
        };
        if value.is_empty() && !focused {
            spans.push(Span::styled("(required)", Theme::text_dim()));
        } else {
            spans.push(Span::styled(value.clone(), Theme::text()));
        }
        if focused {
            spans.push(Span::styled("▏", Theme::header()));
        }
    }

    Line::from(spans)
}

fn submit_hint(draft: &QuestDraft) -> Line<'static> {
    if draft.is_submittable() {
        Line::from(vec![
            Span::styled("  Enter", Theme::key_hint()),
            Span::styled(" accept quest", Theme::key_desc()),
        ])
    } else {
        Line::from(Span::styled(
            "  fill every field to accept",
            Theme::text_dim(),
        ))
    }
}
