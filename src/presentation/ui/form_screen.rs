//! Create/edit employee form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tracing::debug;

use crate::application::dto::{FormMode, SaveEmployeeRequest};
use crate::domain::entities::{Department, Position};
use crate::domain::keybinding::{Action, KeyContext};
use crate::domain::validation::{self, EmployeeDraft, Field, ValidationErrors};
use crate::presentation::commands::CommandRegistry;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{SelectInput, TextInput};

const PHONE_LENGTH: usize = 10;
const FIELD_HEIGHT: u16 = 4;

/// Outcome of a key press on the form.
#[derive(Debug, Clone)]
pub enum FormAction {
    None,
    Cancel,
    Submit(SaveEmployeeRequest),
}

enum FieldInput {
    Text(TextInput),
    Choice(SelectInput),
}

impl FieldInput {
    fn value(&self) -> &str {
        match self {
            Self::Text(input) => input.value(),
            Self::Choice(select) => select.value(),
        }
    }

    fn set_focused(&mut self, focused: bool) {
        match self {
            Self::Text(input) => input.set_focused(focused),
            Self::Choice(select) => select.set_focused(focused),
        }
    }

    /// Applies an editing key. Returns whether the value changed.
    fn edit(&mut self, key: KeyEvent) -> bool {
        match self {
            Self::Text(input) => match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    input.input_char(c)
                }
                KeyCode::Backspace => input.backspace(),
                KeyCode::Delete => input.delete(),
                KeyCode::Left => {
                    input.move_left();
                    false
                }
                KeyCode::Right => {
                    input.move_right();
                    false
                }
                KeyCode::Home => {
                    input.move_start();
                    false
                }
                KeyCode::End => {
                    input.move_end();
                    false
                }
                _ => false,
            },
            Self::Choice(select) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    select.select_previous();
                    true
                }
                KeyCode::Right | KeyCode::Char('l' | ' ') => {
                    select.select_next();
                    true
                }
                _ => false,
            },
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        match self {
            Self::Text(input) => input.render(area, buf),
            Self::Choice(select) => select.render(area, buf),
        }
    }
}

fn build_input(field: Field, theme: &Theme) -> FieldInput {
    match field {
        Field::Department => FieldInput::Choice(
            SelectInput::new(
                field.label(),
                Department::ALL.iter().map(|d| d.as_str()).collect(),
            )
            .accent(theme.accent),
        ),
        Field::Position => FieldInput::Choice(
            SelectInput::new(
                field.label(),
                Position::ALL.iter().map(|p| p.as_str()).collect(),
            )
            .accent(theme.accent),
        ),
        Field::DateOfEmployment | Field::DateOfBirth => FieldInput::Text(
            TextInput::new(field.label())
                .placeholder("DD/MM/YYYY")
                .max_len(10)
                .accent(theme.accent),
        ),
        Field::Phone => FieldInput::Text(
            TextInput::new(field.label())
                .placeholder("5306626742")
                .max_len(PHONE_LENGTH)
                .accent(theme.accent),
        ),
        Field::Email => FieldInput::Text(
            TextInput::new(field.label())
                .placeholder("name@example.com")
                .accent(theme.accent),
        ),
        Field::FirstName | Field::LastName => {
            FieldInput::Text(TextInput::new(field.label()).accent(theme.accent))
        }
    }
}

/// Employee form with inline validation.
pub struct FormScreen {
    mode: FormMode,
    editing_name: Option<String>,
    inputs: Vec<FieldInput>,
    focus: usize,
    errors: ValidationErrors,
}

impl FormScreen {
    /// Creates a form for `mode` pre-filled with `draft`.
    #[must_use]
    pub fn new(mode: FormMode, draft: &EmployeeDraft, theme: &Theme) -> Self {
        let inputs = Field::ALL
            .iter()
            .map(|field| {
                let mut input = build_input(*field, theme);
                match &mut input {
                    FieldInput::Text(text) => text.set_value(draft.get(*field)),
                    FieldInput::Choice(select) => select.set_value(draft.get(*field)),
                }
                input
            })
            .collect();

        let editing_name = mode
            .is_edit()
            .then(|| format!("{} {}", draft.first_name, draft.last_name).trim().to_string());

        let mut screen = Self {
            mode,
            editing_name,
            inputs,
            focus: 0,
            errors: ValidationErrors::new(),
        };
        screen.focus_index(0);
        screen
    }

    #[must_use]
    pub fn focused_field(&self) -> Field {
        Field::ALL[self.focus]
    }

    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub const fn key_context(&self) -> KeyContext {
        KeyContext::Form
    }

    /// Current contents as a draft.
    #[must_use]
    pub fn draft(&self) -> EmployeeDraft {
        let mut draft = EmployeeDraft::default();
        for (field, input) in Field::ALL.iter().zip(&self.inputs) {
            draft.set(*field, input.value());
        }
        draft
    }

    /// Shows `errors` inline and focuses the first invalid field.
    pub fn set_errors(&mut self, errors: ValidationErrors) {
        if let Some(field) = errors.first_field() {
            self.focus_field(field);
        }
        self.errors = errors;
    }

    pub fn focus_field(&mut self, field: Field) {
        if let Some(index) = Field::ALL.iter().position(|f| *f == field) {
            self.focus_index(index);
        }
    }

    fn focus_index(&mut self, index: usize) {
        if let Some(current) = self.inputs.get_mut(self.focus) {
            current.set_focused(false);
        }
        self.focus = index % self.inputs.len().max(1);
        if let Some(next) = self.inputs.get_mut(self.focus) {
            next.set_focused(true);
        }
    }

    fn focus_next(&mut self) {
        self.focus_index(self.focus + 1);
    }

    fn focus_previous(&mut self) {
        let len = self.inputs.len();
        self.focus_index((self.focus + len - 1) % len.max(1));
    }

    pub fn handle_key(&mut self, key: KeyEvent, commands: &CommandRegistry) -> FormAction {
        match commands.find_action(KeyContext::Form, key) {
            Some(Action::FocusNext) => self.focus_next(),
            Some(Action::FocusPrevious) => self.focus_previous(),
            Some(Action::Cancel) => return FormAction::Cancel,
            Some(Action::Submit) => return self.submit(),
            _ => {
                let field = self.focused_field();
                if let Some(input) = self.inputs.get_mut(self.focus)
                    && input.edit(key)
                {
                    self.errors.clear_field(field);
                }
            }
        }
        FormAction::None
    }

    fn submit(&mut self) -> FormAction {
        let draft = self.draft();
        let errors = draft.validate(validation::current_year());
        if errors.is_empty() {
            FormAction::Submit(SaveEmployeeRequest::new(self.mode, draft))
        } else {
            debug!(invalid_fields = errors.len(), "Form has errors");
            self.set_errors(errors);
            FormAction::None
        }
    }

    fn render_field(&self, index: usize, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let field = Field::ALL[index];
        let [input_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);

        self.inputs[index].render(input_area, buf);
        if let Some(message) = self.errors.get(field) {
            Paragraph::new(Span::styled(format!(" {message}"), theme.error_style))
                .render(error_area, buf);
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let title = match self.mode {
            FormMode::Create => " Add Employee ",
            FormMode::Edit(_) => " Edit Employee ",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.dimmed_style)
            .title(Span::styled(title, theme.header_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.inputs.len().div_ceil(2);
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(std::iter::repeat_n(Constraint::Length(FIELD_HEIGHT), rows));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let areas = Layout::vertical(constraints).split(inner);

        if let Some(name) = &self.editing_name {
            Paragraph::new(Span::styled(
                format!("You are editing {name}"),
                theme.dimmed_style,
            ))
            .render(areas[0], buf);
        }

        for row in 0..rows {
            let [left, right] =
                Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .spacing(2)
                    .areas(areas[row + 1]);
            for (column, column_area) in [left, right].into_iter().enumerate() {
                let index = row * 2 + column;
                if index < self.inputs.len() {
                    self.render_field(index, column_area, buf, theme);
                }
            }
        }

        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", self.mode.verb()), theme.accent_label()),
            Span::styled(" Enter ", theme.key_style),
            Span::raw("  "),
            Span::styled(" Cancel ", theme.accent_label()),
            Span::styled(" Esc ", theme.key_style),
        ]))
        .render(areas[rows + 1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EmployeeId;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut FormScreen, text: &str) {
        let commands = CommandRegistry::new();
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)), &commands);
        }
    }

    fn tab(form: &mut FormScreen) {
        form.handle_key(key(KeyCode::Tab), &CommandRegistry::new());
    }

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            date_of_employment: "01/02/2020".to_string(),
            date_of_birth: "10/12/1985".to_string(),
            phone: "5306626742".to_string(),
            email: "ada@example.com".to_string(),
            department: "Tech".to_string(),
            position: "Senior".to_string(),
        }
    }

    fn create_form() -> FormScreen {
        FormScreen::new(FormMode::Create, &EmployeeDraft::default(), &Theme::default())
    }

    #[test]
    fn test_create_starts_empty_on_first_field() {
        let form = create_form();
        assert_eq!(form.draft(), EmployeeDraft::default());
        assert_eq!(form.focused_field(), Field::FirstName);
    }

    #[test]
    fn test_edit_prefills_draft() {
        let id = EmployeeId::generate();
        let form = FormScreen::new(FormMode::Edit(id), &valid_draft(), &Theme::default());
        assert_eq!(form.draft(), valid_draft());
        assert_eq!(form.editing_name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = create_form();
        let commands = CommandRegistry::new();
        form.handle_key(key(KeyCode::Up), &commands);
        assert_eq!(form.focused_field(), Field::Position);
        form.handle_key(key(KeyCode::Tab), &commands);
        assert_eq!(form.focused_field(), Field::FirstName);
    }

    #[test]
    fn test_empty_submit_reports_errors_and_focuses_first() {
        let mut form = create_form();
        tab(&mut form);
        tab(&mut form);

        let action = form.handle_key(key(KeyCode::Enter), &CommandRegistry::new());

        assert!(matches!(action, FormAction::None));
        assert_eq!(form.errors().len(), 8);
        assert_eq!(form.focused_field(), Field::FirstName);
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut form = create_form();
        form.handle_key(key(KeyCode::Enter), &CommandRegistry::new());
        assert!(form.errors().contains(Field::FirstName));

        type_text(&mut form, "A");

        assert!(!form.errors().contains(Field::FirstName));
        assert!(form.errors().contains(Field::LastName));
    }

    #[test]
    fn test_phone_is_capped() {
        let mut form = create_form();
        form.focus_field(Field::Phone);
        type_text(&mut form, "530662674299");
        assert_eq!(form.draft().phone, "5306626742");
    }

    #[test]
    fn test_select_cycles_with_arrows() {
        let mut form = create_form();
        let commands = CommandRegistry::new();
        form.focus_field(Field::Department);
        form.handle_key(key(KeyCode::Right), &commands);
        assert_eq!(form.draft().department, "Analytics");
        form.handle_key(key(KeyCode::Right), &commands);
        assert_eq!(form.draft().department, "Tech");
    }

    #[test]
    fn test_valid_submit_emits_request() {
        let id = EmployeeId::generate();
        let mut form = FormScreen::new(FormMode::Edit(id), &valid_draft(), &Theme::default());

        match form.handle_key(key(KeyCode::Enter), &CommandRegistry::new()) {
            FormAction::Submit(request) => {
                assert_eq!(request.mode, FormMode::Edit(id));
                assert_eq!(request.draft, valid_draft());
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = create_form();
        assert!(matches!(
            form.handle_key(key(KeyCode::Esc), &CommandRegistry::new()),
            FormAction::Cancel
        ));
    }

    #[test]
    fn test_render_shows_errors_inline() {
        let mut form = create_form();
        form.handle_key(key(KeyCode::Enter), &CommandRegistry::new());

        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        form.render(area, &mut buf, &Theme::default());

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Add Employee"));
        assert!(text.contains("First name must be at least 2 characters"));
    }
}
