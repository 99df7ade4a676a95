//! Fixed-choice selector widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Cycles through a fixed option list. Starts with nothing selected.
#[derive(Debug, Clone)]
pub struct SelectInput {
    label: String,
    prompt: String,
    options: Vec<&'static str>,
    selected: Option<usize>,
    focused: bool,
    accent: Color,
}

impl SelectInput {
    #[must_use]
    pub fn new(label: impl Into<String>, options: Vec<&'static str>) -> Self {
        let label = label.into();
        Self {
            prompt: format!("Select {label}"),
            label,
            options,
            selected: None,
            focused: false,
            accent: Color::Cyan,
        }
    }

    #[must_use]
    pub const fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Selected option, or an empty string when none.
    #[must_use]
    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i).copied())
            .unwrap_or_default()
    }

    /// Selects the option equal to `value`; anything else clears the selection.
    pub fn set_value(&mut self, value: &str) {
        self.selected = self.options.iter().position(|o| *o == value);
    }

    pub fn select_next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.options.len(),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.selected = Some(match self.selected {
            Some(0) | None => last,
            Some(i) => i - 1,
        });
    }
}

impl Widget for &SelectInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());
        let inner = block.inner(area);
        block.render(area, buf);

        let value = match self.selected {
            Some(_) => Span::styled(self.value(), Style::default().fg(Color::White)),
            None => Span::styled(self.prompt.as_str(), Style::default().fg(Color::DarkGray)),
        };
        let arrows = if self.focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(Line::from(vec![
            Span::styled("‹ ", arrows),
            value,
            Span::styled(" ›", arrows),
        ]))
        .render(inner, buf);
    }
}
