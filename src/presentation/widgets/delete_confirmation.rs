//! Modal dialog confirming a delete.
//!
//! The dialog only reports the choice through [`ConfirmAction`]; the owner
//! performs the deletion.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::domain::keybinding::Action;
use crate::presentation::theme::Theme;

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Button {
    Proceed,
    #[default]
    Cancel,
}

/// Outcome of a key action on the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    None,
    Cancel,
    Proceed,
}

/// Yes/no dialog guarding a deletion. It only reports the user's choice.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    name: Option<String>,
    focused: Button,
}

impl DeleteConfirmation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog for the record named `name`, focusing Cancel.
    pub fn open(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
        self.focused = Button::Cancel;
    }

    pub fn close(&mut self) {
        self.name = None;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.name.is_some()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Maps a confirm-context action to the dialog outcome.
    /// Closed dialogs ignore everything.
    pub fn handle_action(&mut self, action: Action) -> ConfirmAction {
        if !self.is_open() {
            return ConfirmAction::None;
        }
        match action {
            Action::Proceed => ConfirmAction::Proceed,
            Action::Cancel => ConfirmAction::Cancel,
            Action::Activate => match self.focused {
                Button::Proceed => ConfirmAction::Proceed,
                Button::Cancel => ConfirmAction::Cancel,
            },
            Action::FocusNext | Action::FocusPrevious => {
                self.focused = match self.focused {
                    Button::Proceed => Button::Cancel,
                    Button::Cancel => Button::Proceed,
                };
                ConfirmAction::None
            }
            _ => ConfirmAction::None,
        }
    }

    #[must_use]
    pub fn message(name: &str) -> String {
        format!("Selected Employee record of {name} will be deleted")
    }
}

pub struct DeleteConfirmationWidget<'a> {
    dialog: &'a DeleteConfirmation,
    theme: &'a Theme,
}

impl<'a> DeleteConfirmationWidget<'a> {
    #[must_use]
    pub const fn new(dialog: &'a DeleteConfirmation, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }

    fn button(&self, label: &'static str, button: Button) -> Span<'static> {
        let style = if self.dialog.focused == button {
            self.theme.accent_label()
        } else {
            self.theme.key_style
        };
        Span::styled(format!(" {label} "), style)
    }
}

impl Widget for DeleteConfirmationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(name) = self.dialog.name() else {
            return;
        };

        let [row] = Layout::vertical([Constraint::Length(DIALOG_HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [dialog_area] = Layout::horizontal([Constraint::Length(DIALOG_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(Span::styled(
                " Are you sure? ",
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let [message_area, buttons_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        Paragraph::new(DeleteConfirmation::message(name))
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .render(message_area, buf);

        Paragraph::new(Line::from(vec![
            self.button("Proceed", Button::Proceed),
            Span::raw("   "),
            self.button("Cancel", Button::Cancel),
        ]))
        .alignment(Alignment::Center)
        .render(buttons_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opened() -> DeleteConfirmation {
        let mut dialog = DeleteConfirmation::new();
        dialog.open("Ada Lovelace");
        dialog
    }

    fn render(dialog: &DeleteConfirmation) -> String {
        let area = Rect::new(0, 0, 70, 15);
        let mut buf = Buffer::empty(area);
        DeleteConfirmationWidget::new(dialog, &Theme::default()).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_closed_ignores_actions() {
        let mut dialog = DeleteConfirmation::new();
        assert!(!dialog.is_open());
        assert_eq!(dialog.handle_action(Action::Proceed), ConfirmAction::None);
    }

    #[test]
    fn test_proceed_and_cancel_are_distinct() {
        let mut dialog = opened();
        assert_eq!(dialog.handle_action(Action::Proceed), ConfirmAction::Proceed);
        assert_eq!(dialog.handle_action(Action::Cancel), ConfirmAction::Cancel);
        // Reporting an outcome does not close the dialog.
        assert!(dialog.is_open());
    }

    #[test]
    fn test_activate_follows_focus() {
        let mut dialog = opened();
        assert_eq!(dialog.handle_action(Action::Activate), ConfirmAction::Cancel);

        dialog.handle_action(Action::FocusNext);
        assert_eq!(dialog.handle_action(Action::Activate), ConfirmAction::Proceed);

        dialog.open("Grace Hopper");
        assert_eq!(dialog.handle_action(Action::Activate), ConfirmAction::Cancel);
    }

    #[test]
    fn test_render_shows_name() {
        let text = render(&opened());
        assert!(text.contains("Are you sure?"));
        assert!(text.contains("Ada Lovelace"));
        assert!(text.contains("Proceed"));
        assert!(text.contains("Cancel"));
    }

    #[test]
    fn test_render_closed_is_blank() {
        let text = render(&DeleteConfirmation::new());
        assert!(text.trim().is_empty());
    }

    #[test]
    fn test_message_text() {
        assert_eq!(
            DeleteConfirmation::message("3 selected employees"),
            "Selected Employee record of 3 selected employees will be deleted"
        );
    }
}
