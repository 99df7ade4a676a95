//! UI screens.

mod app;
mod form_screen;
mod list_screen;

pub use app::App;
pub use form_screen::{FormAction, FormScreen};
pub use list_screen::{ListAction, ListScreen};
