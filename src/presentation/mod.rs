//! Presentation layer with UI components and event handling.

/// Key-to-action resolution.
pub mod commands;
/// Event handling.
pub mod events;
/// Screen routes.
pub mod router;
/// Accent-derived styles.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use router::{Route, RouteError};
pub use ui::App;
