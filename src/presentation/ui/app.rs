//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::application::dto::{FormMode, SaveEmployeeRequest};
use crate::application::use_cases::SaveEmployeeUseCase;
use crate::domain::errors::EmployeeError;
use crate::domain::ports::{EmployeeRepository, StoreEvent};
use crate::domain::validation::EmployeeDraft;
use crate::domain::Notification;
use crate::infrastructure::config::AppConfig;
use crate::presentation::commands::CommandRegistry;
use crate::presentation::events::{EventResult, is_force_quit, key_press};
use crate::presentation::router::Route;
use crate::presentation::theme::Theme;
use crate::presentation::ui::{FormAction, FormScreen, ListAction, ListScreen};
use crate::presentation::widgets::{
    FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, NotificationPopup,
};

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    route: Route,
    repository: Arc<dyn EmployeeRepository>,
    save_use_case: SaveEmployeeUseCase,
    store_events: mpsc::UnboundedReceiver<StoreEvent>,
    commands: CommandRegistry,
    theme: Theme,
    notification_duration: Duration,
    list: ListScreen,
    form: Option<FormScreen>,
    notification: Option<Notification>,
}

impl App {
    #[must_use]
    pub fn new(repository: Arc<dyn EmployeeRepository>, config: &AppConfig) -> Self {
        let store_events = repository.subscribe();

        Self {
            state: AppState::Running,
            route: Route::List,
            save_use_case: SaveEmployeeUseCase::new(Arc::clone(&repository)),
            list: ListScreen::new(Arc::clone(&repository), config.effective_page_size()),
            repository,
            store_events,
            commands: CommandRegistry::with_overrides(&config.keybindings),
            theme: Theme::new(&config.theme.accent_color),
            notification_duration: Duration::from_secs(config.ui.notification_duration),
            form: None,
            notification: None,
        }
    }

    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == AppState::Running
    }

    /// Switches screens. An edit route for a missing record falls back to the list.
    pub fn navigate(&mut self, route: Route) {
        match route {
            Route::List => self.form = None,
            Route::Create => {
                self.form = Some(FormScreen::new(
                    FormMode::Create,
                    &EmployeeDraft::default(),
                    &self.theme,
                ));
            }
            Route::Edit(id) => {
                let Some(employee) = self.repository.get(id) else {
                    warn!(id = %id, "Edit requested for unknown employee");
                    self.notify(Notification::error(
                        "Not found",
                        format!("No employee with id {id}"),
                    ));
                    self.navigate(Route::List);
                    return;
                };
                self.form = Some(FormScreen::new(
                    FormMode::Edit(id),
                    &EmployeeDraft::from_employee(&employee),
                    &self.theme,
                ));
            }
        }
        info!(route = %route, "Navigated");
        self.route = route;
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification.with_duration(self.notification_duration));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if is_force_quit(&key) {
            self.state = AppState::Exiting;
            return EventResult::Exit;
        }

        if let Some(form) = self.form.as_mut() {
            match form.handle_key(key, &self.commands) {
                FormAction::None => {}
                FormAction::Cancel => self.navigate(Route::List),
                FormAction::Submit(request) => self.submit(request),
            }
            return EventResult::Continue;
        }

        match self.list.handle_key(key, &self.commands) {
            ListAction::None => {}
            ListAction::Quit => {
                self.state = AppState::Exiting;
                return EventResult::Exit;
            }
            ListAction::Navigate(route) => self.navigate(route),
            ListAction::Notify(notification) => self.notify(notification),
        }
        EventResult::Continue
    }

    fn submit(&mut self, request: SaveEmployeeRequest) {
        match self.save_use_case.execute(request) {
            Ok(response) => {
                debug!(event = response.event_name(), id = %response.employee.id, "Form saved");
                let title = if response.created {
                    "Employee created"
                } else {
                    "Employee updated"
                };
                self.notify(Notification::success(
                    title,
                    format!("{} saved", response.employee.full_name()),
                ));
                self.navigate(Route::List);
            }
            Err(EmployeeError::Validation(errors)) => {
                if let Some(form) = self.form.as_mut() {
                    form.set_errors(errors);
                }
            }
            Err(e @ EmployeeError::NotFound { .. }) => {
                self.notify(Notification::error("Save failed", e.to_string()));
                self.navigate(Route::List);
            }
        }
    }

    pub fn handle_store_event(&mut self, event: StoreEvent) {
        debug!(event = ?event, "Store changed");
        self.list.refresh();
    }

    /// Applies every store notification already queued.
    pub fn drain_store_events(&mut self) {
        while let Ok(event) = self.store_events.try_recv() {
            self.handle_store_event(event);
        }
    }

    /// Drops an expired notification. Returns whether a redraw is needed.
    fn tick(&mut self) -> bool {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
            return true;
        }
        false
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut ticker = interval(TICK_RATE);

        terminal.draw(|frame| self.render(frame))?;

        while self.is_running() {
            let redraw = tokio::select! {
                Some(event) = self.store_events.recv() => {
                    self.handle_store_event(event);
                    true
                }

                _ = ticker.tick() => self.tick(),

                event = terminal_events.next() => match event {
                    Some(Ok(event)) => {
                        if let Some(key) = key_press(&event) {
                            self.handle_key(key);
                        }
                        true
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        self.state = AppState::Exiting;
                        false
                    }
                },
            };

            if redraw {
                terminal.draw(|frame| self.render(frame))?;
            }
        }

        info!("Application exiting normally");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let path = self.route.path();
        frame.render_widget(
            HeaderBar::new(crate::NAME, crate::VERSION)
                .title(self.route.title())
                .route(&path)
                .style(HeaderBarStyle::from_theme(&self.theme)),
            header_area,
        );

        let (context, status) = match &self.form {
            Some(form) => {
                form.render(body_area, frame.buffer_mut(), &self.theme);
                (form.key_context(), None)
            }
            None => {
                self.list.render(body_area, frame.buffer_mut(), &self.theme);
                (self.list.key_context(), Some(self.list.status_line()))
            }
        };

        let hints = self.commands.hints(context);
        frame.render_widget(
            FooterBar::new(&hints)
                .context(context)
                .right_info(status.as_deref())
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer_area,
        );

        if let Some(notification) = self.notification.as_mut() {
            notification.mark_displayed();
            frame.render_widget(NotificationPopup::new(notification, &self.theme), area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EmployeeId;
    use crate::domain::NotificationLevel;
    use crate::infrastructure::store::{InMemoryEmployeeStore, demo_employees};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(records: usize) -> (App, Arc<InMemoryEmployeeStore>) {
        let store = Arc::new(InMemoryEmployeeStore::with_records(demo_employees(records)));
        let app = App::new(store.clone(), &AppConfig::default());
        (app, store)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill_create_form(app: &mut App) {
        for value in [
            "Grace",
            "Hopper",
            "01/01/2021",
            "09/12/1986",
            "5306626742",
            "grace@example.com",
        ] {
            type_text(app, value);
            app.handle_key(key(KeyCode::Tab));
        }
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Right));
    }

    #[test]
    fn test_quit_from_list() {
        let (mut app, _) = app(1);
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), EventResult::Exit);
        assert!(!app.is_running());
    }

    #[test]
    fn test_ctrl_c_quits_from_form() {
        let (mut app, _) = app(0);
        app.navigate(Route::Create);
        let result = app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(result, EventResult::Exit);
    }

    #[test]
    fn test_create_flow_adds_record_and_returns_to_list() {
        let (mut app, store) = app(0);
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.route(), &Route::Create);

        fill_create_form(&mut app);
        app.handle_key(key(KeyCode::Enter));
        app.drain_store_events();

        assert_eq!(app.route(), &Route::List);
        assert_eq!(store.count(), 1);
        assert_eq!(app.list.page_rows().len(), 1);
        assert_eq!(app.list.page_rows()[0].full_name(), "Grace Hopper");
        assert_eq!(
            app.notification().map(|n| n.level),
            Some(NotificationLevel::Success)
        );
    }

    #[test]
    fn test_invalid_submit_stays_on_form() {
        let (mut app, store) = app(0);
        app.navigate(Route::Create);
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.route(), &Route::Create);
        assert_eq!(store.count(), 0);
        assert!(app.form.as_ref().is_some_and(|f| !f.errors().is_empty()));
    }

    #[test]
    fn test_edit_flow_updates_record() {
        let (mut app, store) = app(2);
        let target = app.list.page_rows()[0].clone();

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.route(), &Route::Edit(target.id));

        app.handle_key(key(KeyCode::End));
        type_text(&mut app, "son");
        app.handle_key(key(KeyCode::Enter));
        app.drain_store_events();

        let updated = store.get(target.id).expect("record still exists");
        assert_eq!(updated.first_name, format!("{}son", target.first_name));
        assert_eq!(app.list.page_rows()[0].first_name, updated.first_name);
        assert_eq!(app.route(), &Route::List);
    }

    #[test]
    fn test_cancel_returns_without_saving() {
        let (mut app, store) = app(1);
        app.navigate(Route::Create);
        type_text(&mut app, "Zed");
        app.handle_key(key(KeyCode::Esc));

        assert_eq!(app.route(), &Route::List);
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_unknown_edit_route_falls_back() {
        let (mut app, _) = app(1);
        app.navigate(Route::Edit(EmployeeId::generate()));

        assert_eq!(app.route(), &Route::List);
        assert_eq!(
            app.notification().map(|n| n.level),
            Some(NotificationLevel::Error)
        );
    }

    #[test]
    fn test_external_change_refreshes_list() {
        let (mut app, store) = app(3);
        let id = app.list.page_rows()[0].id;
        store.delete(id).expect("record exists");

        app.drain_store_events();

        assert_eq!(app.list.page_rows().len(), 2);
    }

    #[test]
    fn test_notification_expires_on_tick() {
        let (mut app, _) = app(0);
        app.notify(Notification::success("Saved", "ok"));
        if let Some(n) = app.notification.as_mut() {
            n.duration = Duration::ZERO;
            n.mark_displayed();
        }
        std::thread::sleep(Duration::from_millis(5));

        assert!(app.tick());
        assert!(app.notification().is_none());
    }

    #[test]
    fn test_render_frame() {
        let (mut app, _) = app(2);
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).expect("test backend");

        terminal.draw(|frame| app.render(frame)).expect("draw");

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("STAFFDECK"));
        assert!(text.contains("Employee List"));
        assert!(text.contains(" LIST "));
    }
}
