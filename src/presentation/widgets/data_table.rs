//! Generic paginated, selectable table.
//!
//! The table only reports what the user asked for through
//! [`DataTableAction`]; paging and row mutations are applied by the owner.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use crate::domain::keybinding::Action;
use crate::domain::pagination::{PageItem, Pagination};
use crate::presentation::theme::Theme;

/// Row type with a stable identity.
pub trait TableRow {
    type Key: Clone + PartialEq + std::fmt::Debug;

    fn key(&self) -> Self::Key;
}

/// Column definition.
pub struct Column<T> {
    pub header: &'static str,
    pub width: Constraint,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    #[must_use]
    pub const fn new(header: &'static str, width: Constraint, cell: fn(&T) -> String) -> Self {
        Self {
            header,
            width,
            cell,
        }
    }
}

/// Per-row action fired by `trigger`. The icon fills the actions column and
/// the label is listed in the legend next to the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub trigger: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataTableAction<K> {
    None,
    /// Row action `action` invoked on the row with `key`.
    RowAction { action: &'static str, key: K },
    /// Request to show `page`. Only emitted for existing pages.
    PageChange(usize),
    /// Selection after a toggle.
    SelectionChanged(Vec<K>),
}

/// Cursor and selection, kept by the owner across renders.
#[derive(Debug, Clone)]
pub struct DataTableState<K> {
    cursor: usize,
    selected: Vec<K>,
}

impl<K> Default for DataTableState<K> {
    fn default() -> Self {
        Self {
            cursor: 0,
            selected: Vec::new(),
        }
    }
}

impl<K: Clone + PartialEq> DataTableState<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn selected(&self) -> &[K] {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Keeps the cursor on an existing row after the row count changed.
    pub fn clamp_cursor(&mut self, row_count: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }

    /// Drops selected keys for which `keep` is false.
    pub fn retain_selected(&mut self, keep: impl Fn(&K) -> bool) {
        self.selected.retain(|k| keep(k));
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    fn toggle(&mut self, key: K) {
        if let Some(index) = self.selected.iter().position(|k| *k == key) {
            self.selected.remove(index);
        } else {
            self.selected.push(key);
        }
    }

    fn all_selected(&self, keys: &[K]) -> bool {
        !keys.is_empty() && keys.iter().all(|k| self.selected.contains(k))
    }
}

/// Table over the rows of the current page.
pub struct DataTable<'a, T: TableRow> {
    columns: &'a [Column<T>],
    rows: &'a [T],
    actions: &'a [RowAction],
    pagination: &'a Pagination,
    selectable: bool,
    theme: Theme,
}

impl<'a, T: TableRow> DataTable<'a, T> {
    #[must_use]
    pub fn new(columns: &'a [Column<T>], rows: &'a [T], pagination: &'a Pagination) -> Self {
        Self {
            columns,
            rows,
            actions: &[],
            pagination,
            selectable: false,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub const fn actions(mut self, actions: &'a [RowAction]) -> Self {
        self.actions = actions;
        self
    }

    #[must_use]
    pub const fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Applies a key action to `state` and reports the outcome.
    pub fn handle_action(
        &self,
        state: &mut DataTableState<T::Key>,
        action: Action,
    ) -> DataTableAction<T::Key> {
        let pagination = self.pagination;
        match action {
            Action::NavigateUp => {
                state.cursor = state.cursor.saturating_sub(1);
                DataTableAction::None
            }
            Action::NavigateDown => {
                if state.cursor + 1 < self.rows.len() {
                    state.cursor += 1;
                }
                DataTableAction::None
            }
            Action::PreviousPage if pagination.has_previous() => {
                DataTableAction::PageChange(pagination.page() - 1)
            }
            Action::NextPage if pagination.has_next() => {
                DataTableAction::PageChange(pagination.page() + 1)
            }
            Action::FirstPage if pagination.page() != 1 && pagination.contains_page(1) => {
                DataTableAction::PageChange(1)
            }
            Action::LastPage if pagination.page() < pagination.total_pages() => {
                DataTableAction::PageChange(pagination.total_pages())
            }
            Action::ToggleSelect if self.selectable => match self.rows.get(state.cursor) {
                Some(row) => {
                    state.toggle(row.key());
                    DataTableAction::SelectionChanged(state.selected.clone())
                }
                None => DataTableAction::None,
            },
            Action::ToggleSelectAll if self.selectable => {
                let keys: Vec<_> = self.rows.iter().map(|r| r.key()).collect();
                if state.all_selected(&keys) {
                    state.selected.clear();
                } else {
                    state.selected = keys;
                }
                DataTableAction::SelectionChanged(state.selected.clone())
            }
            other => {
                let row_action = self.actions.iter().find(|a| a.trigger == other);
                match (row_action, self.rows.get(state.cursor)) {
                    (Some(row_action), Some(row)) => DataTableAction::RowAction {
                        action: row_action.id,
                        key: row.key(),
                    },
                    _ => DataTableAction::None,
                }
            }
        }
    }

    fn header_row(&self, state: &DataTableState<T::Key>) -> Row<'static> {
        let mut cells = Vec::with_capacity(self.columns.len() + 2);
        if self.selectable {
            let keys: Vec<_> = self.rows.iter().map(|r| r.key()).collect();
            cells.push(Cell::from(checkbox(state.all_selected(&keys))));
        }
        cells.extend(self.columns.iter().map(|c| Cell::from(c.header)));
        if !self.actions.is_empty() {
            cells.push(Cell::from("Actions"));
        }
        Row::new(cells).style(self.theme.header_style)
    }

    fn body_row(&self, row: &T, state: &DataTableState<T::Key>) -> Row<'static> {
        let mut cells = Vec::with_capacity(self.columns.len() + 2);
        if self.selectable {
            cells.push(Cell::from(checkbox(state.is_selected(&row.key()))));
        }
        cells.extend(self.columns.iter().map(|c| Cell::from((c.cell)(row))));
        if !self.actions.is_empty() {
            let icons: Vec<_> = self.actions.iter().map(|a| a.icon).collect();
            cells.push(Cell::from(icons.join(" ")).style(self.theme.dimmed_style));
        }
        Row::new(cells)
    }

    fn widths(&self) -> Vec<Constraint> {
        let mut widths = Vec::with_capacity(self.columns.len() + 2);
        if self.selectable {
            widths.push(Constraint::Length(3));
        }
        widths.extend(self.columns.iter().map(|c| c.width));
        if !self.actions.is_empty() {
            let width: usize = self.actions.iter().map(|a| a.icon.chars().count() + 1).sum();
            widths.push(Constraint::Length(
                u16::try_from(width.max("Actions".len())).unwrap_or(u16::MAX),
            ));
        }
        widths
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// Pagination bar: arrows, page numbers and ellipses.
#[must_use]
pub fn pagination_line(pagination: &Pagination, theme: &Theme) -> Line<'static> {
    let arrow_style = |enabled: bool| {
        if enabled {
            Style::default().fg(theme.accent)
        } else {
            theme.dimmed_style
        }
    };

    let mut spans = vec![Span::styled(" ← ", arrow_style(pagination.has_previous()))];
    for item in pagination.page_items() {
        match item {
            PageItem::Page(page) if page == pagination.page() => {
                spans.push(Span::styled(format!(" {page} "), theme.accent_label()));
            }
            PageItem::Page(page) => spans.push(Span::raw(format!(" {page} "))),
            PageItem::Ellipsis => spans.push(Span::styled(" … ", theme.dimmed_style)),
        }
    }
    spans.push(Span::styled(" → ", arrow_style(pagination.has_next())));
    Line::from(spans)
}

/// Legend pairing each row action icon with its label.
#[must_use]
pub fn action_legend(actions: &[RowAction], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(actions.len() * 3);
    for (i, action) in actions.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(action.icon, Style::default().fg(theme.accent)));
        spans.push(Span::styled(format!(" {}", action.label), theme.dimmed_style));
    }
    Line::from(spans)
}

impl<T: TableRow> StatefulWidget for DataTable<'_, T> {
    type State = DataTableState<T::Key>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [table_area, pager_area] =
            Layout::vertical([Constraint::Min(2), Constraint::Length(1)]).areas(area);

        let rows: Vec<Row> = self.rows.iter().map(|r| self.body_row(r, state)).collect();
        let table = Table::new(rows, self.widths())
            .header(self.header_row(state))
            .column_spacing(2)
            .row_highlight_style(self.theme.selection_style.add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut table_state = TableState::default();
        if !self.rows.is_empty() {
            table_state.select(Some(state.cursor.min(self.rows.len() - 1)));
        }
        StatefulWidget::render(table, table_area, buf, &mut table_state);

        if self.rows.is_empty() && table_area.height > 1 {
            let empty_area = Rect::new(table_area.x, table_area.y + 1, table_area.width, 1);
            Paragraph::new("No records")
                .style(self.theme.dimmed_style)
                .alignment(Alignment::Center)
                .render(empty_area, buf);
        }

        let pager = pagination_line(self.pagination, &self.theme);
        let pager_width = u16::try_from(pager.width()).unwrap_or(u16::MAX);
        Paragraph::new(pager)
            .alignment(Alignment::Center)
            .render(pager_area, buf);

        if self.actions.is_empty() {
            return;
        }
        // Only drawn when it fits beside the centered pager.
        let legend = action_legend(self.actions, &self.theme);
        let legend_width = u16::try_from(legend.width()).unwrap_or(u16::MAX);
        let margin = pager_area.width.saturating_sub(pager_width) / 2;
        if legend_width < margin {
            let legend_area = Rect::new(
                pager_area.right() - legend_width,
                pager_area.y,
                legend_width,
                1,
            );
            Paragraph::new(legend).render(legend_area, buf);
        }
    }
}
