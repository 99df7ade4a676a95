use crate::domain::keybinding::{Action, KeyContext, Keybind, parse_key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::warn;

struct Binding {
    context: KeyContext,
    key: KeyEvent,
    action: Action,
    hint: Option<&'static str>,
}

/// Resolves key presses to actions per screen context.
pub struct CommandRegistry {
    bindings: Vec<Binding>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self {
            bindings: Vec::new(),
        };

        let key = |code: KeyCode| KeyEvent::new(code, KeyModifiers::NONE);
        let ctrl = |c: char| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);

        use Action as A;
        use KeyContext::{Confirm, Form, List};

        registry.register(List, key(KeyCode::Char('n')), A::CreateEmployee, Some("New"));
        registry.register(List, key(KeyCode::Enter), A::EditEmployee, Some("Edit"));
        registry.register(List, key(KeyCode::Char('e')), A::EditEmployee, None);
        registry.register(List, key(KeyCode::Char('d')), A::DeleteEmployee, Some("Delete"));
        registry.register(List, key(KeyCode::Delete), A::DeleteEmployee, None);
        registry.register(List, key(KeyCode::Char(' ')), A::ToggleSelect, Some("Select"));
        registry.register(List, key(KeyCode::Char('a')), A::ToggleSelectAll, Some("All"));
        registry.register(
            List,
            KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT),
            A::DeleteSelected,
            Some("Delete sel."),
        );
        registry.register(List, key(KeyCode::Up), A::NavigateUp, None);
        registry.register(List, key(KeyCode::Char('k')), A::NavigateUp, None);
        registry.register(List, key(KeyCode::Down), A::NavigateDown, None);
        registry.register(List, key(KeyCode::Char('j')), A::NavigateDown, None);
        registry.register(List, key(KeyCode::Left), A::PreviousPage, Some("Prev"));
        registry.register(List, key(KeyCode::Char('h')), A::PreviousPage, None);
        registry.register(List, key(KeyCode::Char('[')), A::PreviousPage, None);
        registry.register(List, key(KeyCode::Right), A::NextPage, Some("Next"));
        registry.register(List, key(KeyCode::Char('l')), A::NextPage, None);
        registry.register(List, key(KeyCode::Char(']')), A::NextPage, None);
        registry.register(List, key(KeyCode::Home), A::FirstPage, None);
        registry.register(List, key(KeyCode::End), A::LastPage, None);
        registry.register(List, key(KeyCode::Char('q')), A::Quit, Some("Quit"));
        registry.register(List, ctrl('c'), A::Quit, None);

        registry.register(Form, key(KeyCode::Enter), A::Submit, Some("Save"));
        registry.register(Form, ctrl('s'), A::Submit, None);
        registry.register(Form, key(KeyCode::Tab), A::FocusNext, Some("Next field"));
        registry.register(Form, key(KeyCode::Down), A::FocusNext, None);
        registry.register(
            Form,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            A::FocusPrevious,
            None,
        );
        registry.register(Form, key(KeyCode::BackTab), A::FocusPrevious, None);
        registry.register(Form, key(KeyCode::Up), A::FocusPrevious, None);
        registry.register(Form, key(KeyCode::Esc), A::Cancel, Some("Cancel"));

        registry.register(Confirm, key(KeyCode::Char('y')), A::Proceed, Some("Proceed"));
        registry.register(Confirm, key(KeyCode::Char('n')), A::Cancel, Some("Cancel"));
        registry.register(Confirm, key(KeyCode::Esc), A::Cancel, None);
        registry.register(Confirm, key(KeyCode::Enter), A::Activate, Some("Choose"));
        registry.register(Confirm, key(KeyCode::Tab), A::FocusNext, None);
        registry.register(Confirm, key(KeyCode::Right), A::FocusNext, None);
        registry.register(Confirm, key(KeyCode::Left), A::FocusPrevious, None);
        registry.register(
            Confirm,
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            A::FocusPrevious,
            None,
        );

        registry
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default registry with user overrides applied on top.
    /// Unparseable key strings are logged and ignored.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();
        for (binding, action) in overrides {
            let Some(key) = parse_key(binding) else {
                warn!(key = %binding, "Ignoring unparseable keybinding");
                continue;
            };
            for context in action.contexts() {
                registry.bindings.retain(|b| !(b.context == *context && same_key(&b.key, &key)));
                // Overrides go first so they win lookups.
                registry.bindings.insert(
                    0,
                    Binding {
                        context: *context,
                        key,
                        action: *action,
                        hint: None,
                    },
                );
            }
        }
        registry
    }

    fn register(
        &mut self,
        context: KeyContext,
        key: KeyEvent,
        action: Action,
        hint: Option<&'static str>,
    ) {
        self.bindings.push(Binding {
            context,
            key,
            action,
            hint,
        });
    }

    #[must_use]
    pub fn find_action(&self, context: KeyContext, key: KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.context == context && same_key(&b.key, &key))
            .map(|b| b.action)
    }

    /// Bindings to advertise in the footer for `context`.
    #[must_use]
    pub fn hints(&self, context: KeyContext) -> Vec<Keybind> {
        self.bindings
            .iter()
            .filter(|b| b.context == context)
            .filter_map(|b| b.hint.map(|label| Keybind::new(b.key, b.action, label)))
            .collect()
    }
}

fn same_key(a: &KeyEvent, b: &KeyEvent) -> bool {
    a.code == b.code && a.modifiers == b.modifiers
}
