//! Settings overlay: the prize editor.
//!
//! A centered dialog over the box scene listing every configured prize.
//! Arrow keys pick a row, Tab picks the name or probability field, Enter
//! opens an edit buffer, [A]/[D] add and delete. The probability range is a
//! hint only; the panel validates that the input parses, nothing more, and
//! never checks the sum.

use crate::prizes::{PrizeUpdate, Registry};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Which prize field the cursor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Probability,
}

impl EditField {
    pub fn toggled(self) -> Self {
        match self {
            EditField::Name => EditField::Probability,
            EditField::Probability => EditField::Name,
        }
    }
}

/// View state of the settings overlay, owned by the event loop.
pub struct SettingsPanel {
    pub selected: usize,
    pub field: EditField,
    /// Edit buffer; `Some` while typing into the selected field.
    pub input: Option<String>,
    pub validation_error: Option<String>,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self {
            selected: 0,
            field: EditField::Name,
            input: None,
            validation_error: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    /// Keep the selection valid after the registry shrinks.
    pub fn clamp_selection(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn toggle_field(&mut self) {
        self.field = self.field.toggled();
    }

    /// Opens the edit buffer seeded with the selected prize's current value.
    pub fn begin_edit(&mut self, registry: &Registry) {
        let Some(prize) = registry.prizes().get(self.selected) else {
            return;
        };
        self.input = Some(match self.field {
            EditField::Name => prize.name.clone(),
            EditField::Probability => format!("{}", prize.probability),
        });
        self.validation_error = None;
    }

    pub fn handle_char(&mut self, c: char) {
        if let Some(input) = &mut self.input {
            input.push(c);
            self.validation_error = None;
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(input) = &mut self.input {
            input.pop();
            self.validation_error = None;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.input = None;
        self.validation_error = None;
    }

    /// Closes the edit buffer and returns the update to apply. A probability
    /// that fails to parse keeps the buffer open with a validation message.
    pub fn commit_edit(&mut self) -> Option<PrizeUpdate> {
        let input = self.input.as_ref()?;
        let update = match self.field {
            EditField::Name => PrizeUpdate::Name(input.clone()),
            EditField::Probability => match input.trim().parse::<f64>() {
                Ok(value) => PrizeUpdate::Probability(value),
                Err(_) => {
                    self.validation_error = Some("概率必须是数字".to_string());
                    return None;
                }
            },
        };
        self.input = None;
        self.validation_error = None;
        Some(update)
    }

    pub fn draw(&self, frame: &mut Frame, registry: &Registry) {
        let size = frame.size();

        let dialog_width = 52.min(size.width.saturating_sub(4));
        let dialog_height = (registry.len() as u16 + 9).min(size.height.saturating_sub(4));
        let x = (size.width.saturating_sub(dialog_width)) / 2;
        let y = (size.height.saturating_sub(dialog_height)) / 2;
        let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let title = Line::from(vec![Span::styled(
            " 奖项设置 ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]);

        let mut lines = vec![Line::from("")];

        if registry.is_empty() {
            lines.push(Line::from(Span::styled(
                "  （没有奖项，按 [A] 添加）",
                Style::default().fg(Color::DarkGray),
            )));
        }

        for (index, prize) in registry.prizes().iter().enumerate() {
            lines.push(self.prize_row(index, &prize.name, prize.probability));
        }

        lines.push(Line::from(""));
        lines.push(self.status_line(registry));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            if self.is_editing() {
                "  [Enter] 确认    [Esc] 取消"
            } else {
                "  [↑↓] 选择  [Tab] 切换字段  [Enter] 编辑  [A] 添加  [D] 删除  [Esc] 返回"
            },
            Style::default().fg(Color::Gray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(paragraph, dialog_area);
    }

    fn prize_row(&self, index: usize, name: &str, probability: f64) -> Line<'static> {
        let selected = index == self.selected;

        let field_style = |field: EditField| {
            if selected && self.field == field {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        };

        let marker = if selected { "▸ " } else { "  " };

        let (name_text, prob_text) = match (&self.input, selected) {
            (Some(input), true) if self.field == EditField::Name => {
                (format!("{input}_"), format!("{probability}"))
            }
            (Some(input), true) if self.field == EditField::Probability => {
                (name.to_string(), format!("{input}_"))
            }
            _ => (name.to_string(), format!("{probability}")),
        };

        Line::from(vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Yellow)),
            Span::styled(format!("{name_text:<16}"), field_style(EditField::Name)),
            Span::raw("  "),
            Span::styled(prob_text, field_style(EditField::Probability)),
        ])
    }

    fn status_line(&self, registry: &Registry) -> Line<'static> {
        if let Some(error) = &self.validation_error {
            return Line::from(Span::styled(
                format!("  ✗ {error}"),
                Style::default().fg(Color::Red),
            ));
        }

        // Informational only: sums past 1 stay legal, later prizes just
        // become unreachable.
        let sum: f64 = registry.prizes().iter().map(|p| p.probability).sum();
        Line::from(Span::styled(
            format!("  概率合计 {sum:.2}（剩余为未中奖概率）"),
            Style::default().fg(Color::DarkGray),
        ))
    }
}
