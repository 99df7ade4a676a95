mod data_table;
mod delete_confirmation;
mod footer_bar;
mod header_bar;
mod input;
mod notification_popup;
mod select;

pub use data_table::{
    Column, DataTable, DataTableAction, DataTableState, RowAction, TableRow, pagination_line,
};
pub use delete_confirmation::{ConfirmAction, DeleteConfirmation, DeleteConfirmationWidget};
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::TextInput;
pub use notification_popup::NotificationPopup;
pub use select::SelectInput;
