//! Employee list screen.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};
use tracing::debug;

use crate::application::use_cases::DeleteEmployeeUseCase;
use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::keybinding::{Action, KeyContext};
use crate::domain::pagination::Pagination;
use crate::domain::ports::EmployeeRepository;
use crate::domain::Notification;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::router::Route;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{
    Column, ConfirmAction, DataTable, DataTableAction, DataTableState, DeleteConfirmation,
    DeleteConfirmationWidget, RowAction, TableRow,
};

const EDIT_ACTION: &str = "edit";
const DELETE_ACTION: &str = "delete";

const COLUMNS: [Column<Employee>; 8] = [
    Column::new("First Name", Constraint::Min(10), |e: &Employee| {
        e.first_name.clone()
    }),
    Column::new("Last Name", Constraint::Min(10), |e: &Employee| {
        e.last_name.clone()
    }),
    Column::new("Employed", Constraint::Length(10), |e: &Employee| {
        e.date_of_employment.clone()
    }),
    Column::new("Born", Constraint::Length(10), |e: &Employee| {
        e.date_of_birth.clone()
    }),
    Column::new("Phone", Constraint::Length(10), |e: &Employee| {
        e.phone.clone()
    }),
    Column::new("Email", Constraint::Min(16), |e: &Employee| e.email.clone()),
    Column::new("Department", Constraint::Length(10), |e: &Employee| {
        e.department.to_string()
    }),
    Column::new("Position", Constraint::Length(8), |e: &Employee| {
        e.position.to_string()
    }),
];

const ROW_ACTIONS: [RowAction; 2] = [
    RowAction {
        id: EDIT_ACTION,
        label: "Edit",
        icon: "✎",
        trigger: Action::EditEmployee,
    },
    RowAction {
        id: DELETE_ACTION,
        label: "Delete",
        icon: "✗",
        trigger: Action::DeleteEmployee,
    },
];

impl TableRow for Employee {
    type Key = EmployeeId;

    fn key(&self) -> EmployeeId {
        self.id
    }
}

/// Outcome of a key press on the list screen.
#[derive(Debug, Clone)]
pub enum ListAction {
    None,
    Quit,
    Navigate(Route),
    Notify(Notification),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PendingDelete {
    One(EmployeeId),
    Many(Vec<EmployeeId>),
}

/// Paginated employee table with delete confirmation.
pub struct ListScreen {
    repository: Arc<dyn EmployeeRepository>,
    delete_use_case: DeleteEmployeeUseCase,
    employees: Vec<Employee>,
    pagination: Pagination,
    table_state: DataTableState<EmployeeId>,
    confirmation: DeleteConfirmation,
    pending_delete: Option<PendingDelete>,
}

impl ListScreen {
    #[must_use]
    pub fn new(repository: Arc<dyn EmployeeRepository>, page_size: usize) -> Self {
        let mut screen = Self {
            delete_use_case: DeleteEmployeeUseCase::new(Arc::clone(&repository)),
            repository,
            employees: Vec::new(),
            pagination: Pagination::new(page_size),
            table_state: DataTableState::new(),
            confirmation: DeleteConfirmation::new(),
            pending_delete: None,
        };
        screen.refresh();
        screen
    }

    /// Re-reads the store and pulls page, cursor and selection back into range.
    pub fn refresh(&mut self) {
        self.employees = self.repository.list();
        self.pagination.set_total_items(self.employees.len());
        self.table_state.clamp_cursor(self.pagination.item_range().len());

        let employees = &self.employees;
        self.table_state
            .retain_selected(|id| employees.iter().any(|e| e.id == *id));
        debug!(
            total = self.employees.len(),
            page = self.pagination.page(),
            "List refreshed"
        );
    }

    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub fn selected(&self) -> &[EmployeeId] {
        self.table_state.selected()
    }

    /// Rows of the current page.
    #[must_use]
    pub fn page_rows(&self) -> &[Employee] {
        &self.employees[self.pagination.item_range()]
    }

    #[must_use]
    pub const fn key_context(&self) -> KeyContext {
        if self.confirmation.is_open() {
            KeyContext::Confirm
        } else {
            KeyContext::List
        }
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        let total = self.employees.len();
        let noun = if total == 1 { "employee" } else { "employees" };
        match self.table_state.selected().len() {
            0 => format!("{total} {noun}"),
            selected => format!("{total} {noun} · {selected} selected"),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, commands: &CommandRegistry) -> ListAction {
        let context = self.key_context();
        let Some(action) = commands.find_action(context, key) else {
            return ListAction::None;
        };

        if context == KeyContext::Confirm {
            return self.handle_confirm(action);
        }

        match action {
            Action::Quit => ListAction::Quit,
            Action::CreateEmployee => ListAction::Navigate(Route::Create),
            Action::DeleteSelected => self.open_bulk_delete(),
            other => self.handle_table_action(other),
        }
    }

    fn handle_table_action(&mut self, action: Action) -> ListAction {
        let rows = &self.employees[self.pagination.item_range()];
        let table = DataTable::new(&COLUMNS, rows, &self.pagination)
            .actions(&ROW_ACTIONS)
            .selectable(true);

        match table.handle_action(&mut self.table_state, action) {
            DataTableAction::RowAction { action, key } if action == EDIT_ACTION => {
                ListAction::Navigate(Route::Edit(key))
            }
            DataTableAction::RowAction { action, key } if action == DELETE_ACTION => {
                if let Some(employee) = rows.iter().find(|e| e.id == key) {
                    self.confirmation.open(employee.full_name());
                    self.pending_delete = Some(PendingDelete::One(key));
                }
                ListAction::None
            }
            DataTableAction::PageChange(page) => {
                if self.pagination.go_to(page) {
                    self.table_state.reset_cursor();
                }
                ListAction::None
            }
            DataTableAction::SelectionChanged(selected) => {
                debug!(count = selected.len(), "Selection changed");
                ListAction::None
            }
            DataTableAction::RowAction { .. } | DataTableAction::None => ListAction::None,
        }
    }

    fn open_bulk_delete(&mut self) -> ListAction {
        let ids = self.table_state.selected().to_vec();
        match ids.as_slice() {
            [] => {
                return ListAction::Notify(Notification::info(
                    "Nothing selected",
                    "Select employees with Space before deleting",
                ));
            }
            [id] => {
                if let Some(employee) = self.employees.iter().find(|e| e.id == *id) {
                    self.confirmation.open(employee.full_name());
                    self.pending_delete = Some(PendingDelete::Many(ids));
                }
            }
            _ => {
                self.confirmation
                    .open(format!("{} selected employees", ids.len()));
                self.pending_delete = Some(PendingDelete::Many(ids));
            }
        }
        ListAction::None
    }

    fn handle_confirm(&mut self, action: Action) -> ListAction {
        match self.confirmation.handle_action(action) {
            ConfirmAction::None => ListAction::None,
            ConfirmAction::Cancel => {
                self.confirmation.close();
                self.pending_delete = None;
                ListAction::None
            }
            ConfirmAction::Proceed => {
                self.confirmation.close();
                match self.pending_delete.take() {
                    Some(pending) => self.delete(pending),
                    None => ListAction::None,
                }
            }
        }
    }

    fn delete(&mut self, pending: PendingDelete) -> ListAction {
        match pending {
            PendingDelete::One(id) => match self.delete_use_case.execute(id) {
                Ok(employee) => ListAction::Notify(Notification::success(
                    "Employee deleted",
                    format!("{} was removed", employee.full_name()),
                )),
                Err(e) => ListAction::Notify(Notification::error("Delete failed", e.to_string())),
            },
            PendingDelete::Many(ids) => {
                let removed = self.delete_use_case.execute_many(&ids);
                self.table_state.clear_selection();
                if removed.is_empty() {
                    ListAction::Notify(Notification::error(
                        "Delete failed",
                        "Selected employees no longer exist",
                    ))
                } else {
                    ListAction::Notify(Notification::success(
                        "Employees deleted",
                        format!("{} of {} selected removed", removed.len(), ids.len()),
                    ))
                }
            }
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.dimmed_style)
            .title(Span::styled(" Employee List ", theme.header_style));
        let inner = block.inner(area);
        block.render(area, buf);

        let [summary_area, table_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(self.status_line(), theme.dimmed_style),
            Span::styled(
                format!(
                    "   page {} of {}",
                    self.pagination.page(),
                    self.pagination.total_pages().max(1)
                ),
                theme.dimmed_style,
            ),
        ]))
        .render(summary_area, buf);

        let rows = &self.employees[self.pagination.item_range()];
        DataTable::new(&COLUMNS, rows, &self.pagination)
            .actions(&ROW_ACTIONS)
            .selectable(true)
            .theme(*theme)
            .render(table_area, buf, &mut self.table_state);

        DeleteConfirmationWidget::new(&self.confirmation, theme).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationLevel;
    use crate::domain::ports::StoreEvent;
    use crate::infrastructure::store::{InMemoryEmployeeStore, demo_employees};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(records: usize, page_size: usize) -> (ListScreen, Arc<InMemoryEmployeeStore>) {
        let store = Arc::new(InMemoryEmployeeStore::with_records(demo_employees(records)));
        let screen = ListScreen::new(store.clone(), page_size);
        (screen, store)
    }

    fn press(screen: &mut ListScreen, code: KeyCode) -> ListAction {
        screen.handle_key(key(code), &CommandRegistry::new())
    }

    #[test]
    fn test_initial_page() {
        let (screen, _) = screen(23, 10);
        assert_eq!(screen.pagination().total_pages(), 3);
        assert_eq!(screen.page_rows().len(), 10);
        assert_eq!(screen.status_line(), "23 employees");
    }

    #[test]
    fn test_paging_shows_remaining_rows() {
        let (mut screen, _) = screen(23, 10);
        press(&mut screen, KeyCode::End);
        assert_eq!(screen.pagination().page(), 3);
        assert_eq!(screen.page_rows().len(), 3);

        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.pagination().page(), 3);

        press(&mut screen, KeyCode::Left);
        assert_eq!(screen.pagination().page(), 2);
    }

    #[test]
    fn test_new_navigates_to_create() {
        let (mut screen, _) = screen(1, 10);
        assert!(matches!(
            press(&mut screen, KeyCode::Char('n')),
            ListAction::Navigate(Route::Create)
        ));
    }

    #[test]
    fn test_edit_navigates_to_cursor_row() {
        let (mut screen, _) = screen(3, 10);
        press(&mut screen, KeyCode::Down);
        let expected = screen.page_rows()[1].id;
        match press(&mut screen, KeyCode::Enter) {
            ListAction::Navigate(Route::Edit(id)) => assert_eq!(id, expected),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_cancel_keeps_record() {
        let (mut screen, store) = screen(2, 10);
        press(&mut screen, KeyCode::Char('d'));
        assert_eq!(screen.key_context(), KeyContext::Confirm);

        press(&mut screen, KeyCode::Esc);
        assert_eq!(screen.key_context(), KeyContext::List);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_proceed_deletes_and_notifies() {
        let (mut screen, store) = screen(2, 10);
        let mut events = store.subscribe();
        let target = screen.page_rows()[0].clone();

        press(&mut screen, KeyCode::Char('d'));
        let action = press(&mut screen, KeyCode::Char('y'));

        assert!(matches!(action, ListAction::Notify(n) if n.message.contains(&target.full_name())));
        assert_eq!(store.count(), 1);
        assert_eq!(events.try_recv(), Ok(StoreEvent::Deleted(target.id)));
        assert_eq!(screen.key_context(), KeyContext::List);
    }

    #[test]
    fn test_refresh_clamps_page_after_deletion() {
        let (mut screen, store) = screen(11, 10);
        press(&mut screen, KeyCode::Right);
        assert_eq!(screen.pagination().page(), 2);

        let last = screen.page_rows()[0].id;
        store.delete(last).expect("record exists");
        screen.refresh();

        assert_eq!(screen.pagination().page(), 1);
        assert_eq!(screen.page_rows().len(), 10);
    }

    #[test]
    fn test_bulk_delete_selected() {
        let (mut screen, store) = screen(5, 10);
        press(&mut screen, KeyCode::Char(' '));
        press(&mut screen, KeyCode::Down);
        press(&mut screen, KeyCode::Char(' '));
        assert_eq!(screen.selected().len(), 2);

        screen.handle_key(
            KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT),
            &CommandRegistry::new(),
        );
        assert_eq!(screen.confirmation.name(), Some("2 selected employees"));

        press(&mut screen, KeyCode::Char('y'));
        screen.refresh();

        assert_eq!(store.count(), 3);
        assert!(screen.selected().is_empty());
    }

    #[test]
    fn test_bulk_delete_without_selection_informs() {
        let (mut screen, store) = screen(2, 10);
        let action = screen.handle_key(
            KeyEvent::new(KeyCode::Char('D'), KeyModifiers::SHIFT),
            &CommandRegistry::new(),
        );
        assert!(matches!(
            action,
            ListAction::Notify(n) if n.level == NotificationLevel::Info
        ));
        assert_eq!(screen.key_context(), KeyContext::List);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_refresh_drops_vanished_selection() {
        let (mut screen, store) = screen(3, 10);
        press(&mut screen, KeyCode::Char('a'));
        assert_eq!(screen.selected().len(), 3);

        let gone = screen.page_rows()[0].id;
        store.delete(gone).expect("record exists");
        screen.refresh();

        assert_eq!(screen.selected().len(), 2);
        assert!(!screen.selected().contains(&gone));
    }

    #[test]
    fn test_empty_store() {
        let (mut screen, _) = screen(0, 10);
        assert!(screen.page_rows().is_empty());
        assert!(matches!(press(&mut screen, KeyCode::Char('d')), ListAction::None));
        assert_eq!(screen.key_context(), KeyContext::List);
    }

    #[test]
    fn test_render_lists_names_and_dialog() {
        let (mut screen, _) = screen(1, 10);
        let name = screen.page_rows()[0].first_name.clone();
        press(&mut screen, KeyCode::Char('d'));

        let area = Rect::new(0, 0, 140, 20);
        let mut buf = Buffer::empty(area);
        screen.render(area, &mut buf, &Theme::default());

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Employee List"));
        assert!(text.contains(&name));
        assert!(text.contains("Are you sure?"));
    }
}
