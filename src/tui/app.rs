use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

use crate::api::TokenApi;
use crate::controller::{FormController, SubmitOutcome};
use crate::model::Section;
use crate::storage::KeyValueStore;

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{
    ClearAdminState, HelpState, IssueTokenState, TransferAdminState, draw_clear_admin, draw_help,
    draw_issue_token, draw_transfer_admin,
};
use super::widgets::{draw_tabs, draw_toasts};

/// Number of notification lines kept on screen.
const TOAST_LINES: u16 = 4;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The form of the active section.
    Forms,
    /// Show keybinding help.
    Help,
}

/// Top-level application state.
///
/// Submits run to completion on `runtime` before the next key is read, so at
/// most one request is in flight.
pub struct App<A, S> {
    screen: Screen,
    controller: FormController<A, S>,
    runtime: Runtime,
    issue: IssueTokenState,
    transfer: TransferAdminState,
    clear: ClearAdminState,
    help: HelpState,
    should_quit: bool,
}

impl<A: TokenApi, S: KeyValueStore> App<A, S> {
    /// Creates an `App` on the issue form, with denoms prefilled from the
    /// last issuance if one was stored. An unreadable store only skips the
    /// prefill.
    pub fn new(mut controller: FormController<A, S>, runtime: Runtime) -> Self {
        if let Err(e) = controller.prefill_denoms() {
            warn!(error = %e, "could not read stored denom");
        }
        Self {
            screen: Screen::Forms,
            issue: IssueTokenState::new(controller.issue_request()),
            transfer: TransferAdminState::new(controller.transfer_request()),
            clear: ClearAdminState::new(controller.clear_request()),
            help: HelpState::new(),
            controller,
            runtime,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let [tabs_area, body_area, toast_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(TOAST_LINES),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        draw_tabs(self.controller.active_section(), frame, tabs_area);

        match self.screen {
            Screen::Help => draw_help(&self.help, frame, body_area),
            Screen::Forms => match self.controller.active_section() {
                Section::IssueToken => draw_issue_token(&self.issue, frame, body_area),
                Section::TransferAdmin => draw_transfer_admin(&self.transfer, frame, body_area),
                Section::ClearAdmin => draw_clear_admin(&self.clear, frame, body_area),
            },
        }

        draw_toasts(self.controller.notifications(), frame, toast_area);

        // A failed read is shown instead of the denom; it never stops the loop.
        let last = match self.controller.last_issued_denom() {
            Ok(Some(denom)) => format!("Last issued denom: {denom}"),
            Ok(None) => "No token issued yet".to_string(),
            Err(e) => format!("Store unavailable: {e}"),
        };
        frame.render_widget(
            Paragraph::new(Line::from(last)).style(Style::default().fg(Color::DarkGray)),
            status_area,
        );
    }

    /// Handles a key event: global keys first, then the current screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let action = match self.global_action(key) {
            Some(action) => action,
            None => self.screen_state_mut().handle_key(key),
        };
        self.apply(action);
    }

    fn global_action(&self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let section = self.controller.active_section();
        let action = match key.code {
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Char('d') if ctrl => Action::DismissNotifications,
            KeyCode::Right if ctrl => Action::SelectSection(section.next()),
            KeyCode::Left if ctrl => Action::SelectSection(section.prev()),
            KeyCode::F(1) => Action::SelectSection(Section::IssueToken),
            KeyCode::F(2) => Action::SelectSection(Section::TransferAdmin),
            KeyCode::F(3) => Action::SelectSection(Section::ClearAdmin),
            KeyCode::F(10) if self.screen == Screen::Forms => Action::Navigate(Screen::Help),
            KeyCode::Esc if self.screen == Screen::Forms => Action::Quit,
            _ => return None,
        };
        Some(action)
    }

    fn screen_state_mut(&mut self) -> &mut dyn ScreenState {
        match self.screen {
            Screen::Help => &mut self.help,
            Screen::Forms => match self.controller.active_section() {
                Section::IssueToken => &mut self.issue,
                Section::TransferAdmin => &mut self.transfer,
                Section::ClearAdmin => &mut self.clear,
            },
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => {
                if screen == Screen::Help {
                    self.help.reset();
                }
                self.screen = screen;
            }
            Action::SelectSection(section) => {
                self.controller.select_section(section);
                self.screen = Screen::Forms;
            }
            Action::UpdateField(key, value) => {
                if let Err(e) = self.controller.update_field(key, value) {
                    warn!(field = key.name(), error = %e, "field update rejected");
                }
            }
            Action::Submit(section) => {
                debug!(?section, "submitting");
                let result = self.runtime.block_on(self.controller.submit(section));
                if let Ok(SubmitOutcome::Issued { .. }) = result {
                    self.refresh_denoms();
                }
            }
            Action::DismissNotifications => self.controller.dismiss_notifications(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Pulls a freshly stored denom into empty transfer/clear fields.
    fn refresh_denoms(&mut self) {
        match self.controller.prefill_denoms() {
            Ok(true) => {
                self.transfer.sync(self.controller.transfer_request());
                self.clear.sync(self.controller.clear_request());
            }
            Ok(false) => {}
            Err(e) => warn!(error = %e, "could not read stored denom"),
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns a reference to the [`FormController`].
    pub fn controller(&self) -> &FormController<A, S> {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::api::ApiError;
    use crate::controller::testing::{FakeApi, network_error};
    use crate::model::{IssueTokenResponse, Level};
    use crate::storage::{LAST_ISSUED_DENOM, MemoryStore};
    use crate::tui::screens::test_util::{buffer_to_string, ctrl, press};

    fn runtime() -> Runtime {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
    }

    fn make_app_with(api: FakeApi, store: MemoryStore) -> App<FakeApi, MemoryStore> {
        App::new(FormController::new(api, store), runtime())
    }

    fn make_app() -> App<FakeApi, MemoryStore> {
        make_app_with(FakeApi::ok(), MemoryStore::new())
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    fn type_string<S: KeyValueStore>(app: &mut App<FakeApi, S>, s: &str) {
        for ch in s.chars() {
            app.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn render(app: &App<FakeApi, MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    mod navigation {
        use super::*;

        #[test]
        fn new_starts_on_issue_form() {
            let app = make_app();
            assert_eq!(app.screen(), Screen::Forms);
            assert_eq!(app.controller().active_section(), Section::IssueToken);
            assert!(!app.should_quit());
        }

        #[test]
        fn function_keys_select_sections() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::F(2)));
            assert_eq!(app.controller().active_section(), Section::TransferAdmin);
            app.handle_key(press(KeyCode::F(3)));
            assert_eq!(app.controller().active_section(), Section::ClearAdmin);
            app.handle_key(press(KeyCode::F(1)));
            assert_eq!(app.controller().active_section(), Section::IssueToken);
        }

        #[test]
        fn ctrl_arrows_cycle_sections() {
            let mut app = make_app();
            app.handle_key(ctrl(KeyCode::Right));
            assert_eq!(app.controller().active_section(), Section::TransferAdmin);
            app.handle_key(ctrl(KeyCode::Left));
            app.handle_key(ctrl(KeyCode::Left));
            assert_eq!(app.controller().active_section(), Section::ClearAdmin);
        }

        #[test]
        fn f10_opens_help_and_esc_returns() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::F(10)));
            assert_eq!(app.screen(), Screen::Help);
            app.handle_key(press(KeyCode::Esc));
            assert_eq!(app.screen(), Screen::Forms);
            assert!(!app.should_quit());
        }

        #[test]
        fn section_key_leaves_help() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::F(10)));
            app.handle_key(press(KeyCode::F(3)));
            assert_eq!(app.screen(), Screen::Forms);
            assert_eq!(app.controller().active_section(), Section::ClearAdmin);
        }

        #[test]
        fn esc_on_forms_quits() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::Esc));
            assert!(app.should_quit());
        }

        #[test]
        fn ctrl_c_quits_from_help() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::F(10)));
            app.handle_key(ctrl(KeyCode::Char('c')));
            assert!(app.should_quit());
        }

        #[test]
        fn release_events_are_ignored() {
            let mut app = make_app();
            app.handle_key(release(KeyCode::Esc));
            assert!(!app.should_quit());
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn typing_updates_active_record() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::F(2)));
            type_string(&mut app, "utkn-core1");
            assert_eq!(app.controller().transfer_request().denom, "utkn-core1");
            assert_eq!(app.controller().clear_request().denom, "");
        }

        #[test]
        fn switching_sections_keeps_field_state() {
            let mut app = make_app();
            type_string(&mut app, "TKN");
            app.handle_key(press(KeyCode::F(3)));
            type_string(&mut app, "utkn-x");
            app.handle_key(press(KeyCode::F(1)));

            assert_eq!(app.controller().issue_request().symbol, "TKN");
            assert_eq!(app.controller().clear_request().denom, "utkn-x");
            let output = render(&app);
            assert!(output.contains("TKN"), "issue form still shows typed text");
        }

        #[test]
        fn ctrl_d_does_not_type() {
            let mut app = make_app();
            app.handle_key(ctrl(KeyCode::Char('d')));
            assert_eq!(app.controller().issue_request().symbol, "");
        }
    }

    mod submitting {
        use super::*;

        #[test]
        fn transfer_success_shows_transaction_id() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::F(2)));
            app.handle_key(press(KeyCode::Enter));

            let notes = app.controller().notifications();
            assert_eq!(notes.len(), 1);
            assert!(notes[0].message.contains("TX-ADMIN"));
            assert!(render(&app).contains("Admin Transferred! TxHash: TX-ADMIN"));
        }

        #[test]
        fn clear_with_empty_denom_reports_without_calling_api() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::F(3)));
            app.handle_key(press(KeyCode::Enter));

            assert_eq!(app.controller().api().calls(), 0);
            let notes = app.controller().notifications();
            assert_eq!(notes.len(), 1);
            assert_eq!(notes[0].level, Level::Error);
        }

        #[test]
        fn issue_prefills_admin_forms() {
            let mut app = make_app_with(
                FakeApi::with_issue(IssueTokenResponse {
                    transaction_id: "T".into(),
                    issuer_address: Some("core1me".into()),
                    ..Default::default()
                }),
                MemoryStore::new(),
            );
            app.handle_key(press(KeyCode::Tab));
            type_string(&mut app, "utkn");
            app.handle_key(press(KeyCode::Enter));

            assert_eq!(app.controller().transfer_request().denom, "utkn-core1me");
            assert_eq!(app.clear.form().value(0), "utkn-core1me");
            assert!(render(&app).contains("Last issued denom: utkn-core1me"));
        }

        #[test]
        fn failed_issue_keeps_form_text() {
            let mut app = make_app_with(FakeApi::failing(network_error()), MemoryStore::new());
            type_string(&mut app, "TKN");
            app.handle_key(press(KeyCode::Enter));

            assert_eq!(app.issue.form().value(0), "TKN");
            assert_eq!(app.controller().issue_request().symbol, "TKN");
            assert_eq!(app.controller().notifications().len(), 1);
        }

        #[test]
        fn backend_payload_is_rendered() {
            let mut app = make_app_with(
                FakeApi::failing(ApiError::Status {
                    endpoint: "transfer-admin",
                    status: 403,
                    body: "not the admin".into(),
                }),
                MemoryStore::new(),
            );
            app.handle_key(press(KeyCode::F(2)));
            app.handle_key(press(KeyCode::Enter));
            assert!(render(&app).contains("Error transferring admin rights: not the admin"));
        }

        #[test]
        fn ctrl_d_dismisses_notifications() {
            let mut app = make_app();
            app.handle_key(press(KeyCode::F(2)));
            app.handle_key(press(KeyCode::Enter));
            app.handle_key(ctrl(KeyCode::Char('d')));
            assert!(app.controller().notifications().is_empty());
        }
    }

    mod startup {
        use std::fs;

        use super::*;
        use crate::storage::FileStore;

        #[test]
        fn stored_denom_prefills_forms() {
            let mut store = MemoryStore::new();
            store.set(LAST_ISSUED_DENOM, "utkn-core1old").unwrap();
            let app = make_app_with(FakeApi::ok(), store);

            assert_eq!(app.transfer.form().value(0), "utkn-core1old");
            assert_eq!(app.clear.form().value(0), "utkn-core1old");
        }

        #[test]
        fn corrupt_store_still_starts_and_issues() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("store.json");
            fs::write(&path, "{\"lastIssuedDenom\": ").unwrap();
            let store = FileStore::with_path(&path).unwrap();

            let mut app = App::new(FormController::new(FakeApi::ok(), store), runtime());
            assert_eq!(app.transfer.form().value(0), "");

            app.handle_key(press(KeyCode::Tab));
            type_string(&mut app, "utkn");
            app.handle_key(press(KeyCode::Enter));

            let levels: Vec<Level> = app
                .controller()
                .notifications()
                .iter()
                .map(|n| n.level)
                .collect();
            assert_eq!(levels, vec![Level::Success, Level::Info]);
            assert_eq!(app.controller().transfer_request().denom, "utkn-core1issuer");
        }

        #[test]
        fn renders_tabs_and_status() {
            let app = make_app();
            let output = render(&app);
            assert!(output.contains("F1 Issue Class"));
            assert!(output.contains("Issue Token Class"));
            assert!(output.contains("No token issued yet"));
        }
    }
}
