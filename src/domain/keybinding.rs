use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Screen region a binding applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    List,
    Form,
    Confirm,
}

impl KeyContext {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::List => "LIST",
            Self::Form => "FORM",
            Self::Confirm => "CONFIRM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,

    // List navigation
    NavigateUp,
    NavigateDown,
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,

    // Selection
    ToggleSelect,
    ToggleSelectAll,

    // Records
    CreateEmployee,
    EditEmployee,
    DeleteEmployee,
    DeleteSelected,

    // Form
    FocusNext,
    FocusPrevious,
    Submit,

    // Dialog
    Proceed,
    Activate,
    Cancel,
}

impl Action {
    /// Contexts in which the action has meaning.
    #[must_use]
    pub const fn contexts(self) -> &'static [KeyContext] {
        match self {
            Self::Quit
            | Self::NavigateUp
            | Self::NavigateDown
            | Self::PreviousPage
            | Self::NextPage
            | Self::FirstPage
            | Self::LastPage
            | Self::ToggleSelect
            | Self::ToggleSelectAll
            | Self::CreateEmployee
            | Self::EditEmployee
            | Self::DeleteEmployee
            | Self::DeleteSelected => &[KeyContext::List],
            Self::FocusNext | Self::FocusPrevious => &[KeyContext::Form, KeyContext::Confirm],
            Self::Submit => &[KeyContext::Form],
            Self::Proceed | Self::Activate => &[KeyContext::Confirm],
            Self::Cancel => &[KeyContext::Form, KeyContext::Confirm],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
        }
    }
}

/// Parses a key description such as `Ctrl+q`, `Alt+Enter`, `Shift+Tab`,
/// `F1`, `Space` or a single character.
#[must_use]
pub fn parse_key(text: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::NONE;
    let mut parts: Vec<&str> = text.split('+').collect();

    // A trailing '+' means the plus key itself: "Ctrl++".
    if text.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }

    let (key_part, modifier_parts) = parts.split_last()?;
    for modifier in modifier_parts {
        match modifier.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "a" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" | "s" => modifiers |= KeyModifiers::SHIFT,
            _ => return None,
        }
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "backspace" | "bksp" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        lower if lower.len() > 1 && lower.starts_with('f') => {
            KeyCode::F(lower[1..].parse().ok()?)
        }
        _ => {
            let mut chars = key_part.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            if c.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c)
        }
    };

    Some(KeyEvent::new(code, modifiers))
}
