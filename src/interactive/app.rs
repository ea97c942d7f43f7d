use std::sync::Arc;

use crate::auth::AuthRoles;
use crate::client::ParametrizationsApi;
use crate::edit::{CloseSignal, EditController, EditPhase};
use crate::entities::EntityKind;
use crate::error::AdminError;
use crate::feedback::{Loader, Notifier, Toast, ToastCenter};
use crate::interactive::keys::Action;
use crate::logging::{log_debug, log_error, log_info};
use crate::table::{fetch_rows, toggle_status, ListRow, RowAction, RowActions, RowRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    Edit,
    ConfirmCancel,
    Help,
}

/// Network work queued by a key press; it runs after the next frame is drawn
/// so the loading state is visible while it is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOp {
    Refresh,
    FetchRecord,
    SubmitRecord,
    ToggleStatus(String),
}

pub struct InteractiveApp {
    pub api: Arc<dyn ParametrizationsApi>,
    pub auth: AuthRoles,
    pub tab: EntityKind,
    pub rows: Vec<ListRow>,
    pub selected_index: usize,
    pub editor: Option<EditController>,
    pub popup: Option<Popup>,
    pub toasts: ToastCenter,
    pub loader: Loader,
    pub pending: Option<PendingOp>,
    pub should_quit: bool,
    pub error_message: Option<String>,
}

impl InteractiveApp {
    pub fn new(api: Arc<dyn ParametrizationsApi>, auth: AuthRoles) -> Self {
        Self {
            api,
            auth,
            tab: EntityKind::Companies,
            rows: Vec::new(),
            selected_index: 0,
            editor: None,
            popup: None,
            toasts: ToastCenter::new(),
            loader: Loader::new(),
            pending: Some(PendingOp::Refresh),
            should_quit: false,
            error_message: None,
        }
    }

    pub fn selected_row(&self) -> Option<&ListRow> {
        self.rows.get(self.selected_index)
    }

    pub fn selected_actions(&self) -> Option<RowActions> {
        self.selected_row()
            .map(|row| RowActions::for_row(self.tab.descriptor(), row, &self.auth))
    }

    pub fn is_busy(&self) -> bool {
        self.loader.is_visible() || self.pending.is_some()
    }

    pub fn handle_action(&mut self, action: Action) {
        // Calls are not cancelable; input waits until the queued one ran.
        if self.pending.is_some() && action != Action::Quit {
            return;
        }

        match self.popup {
            Some(Popup::Edit) => self.handle_edit_action(action),
            Some(Popup::ConfirmCancel) => self.handle_confirm_action(action),
            Some(Popup::Help) => {
                if matches!(action, Action::Cancel | Action::Help | Action::Quit) {
                    self.popup = None;
                }
            }
            None => self.handle_list_action(action),
        }
    }

    fn handle_list_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveDown => self.move_selection_down(),
            Action::MoveUp => self.move_selection_up(),
            Action::NextTab => self.switch_tab(self.tab.next()),
            Action::PrevTab => self.switch_tab(self.tab.prev()),
            Action::Refresh => self.pending = Some(PendingOp::Refresh),
            Action::Help => self.popup = Some(Popup::Help),
            Action::DismissNotification => self.toasts.dismiss_latest(),
            Action::OpenDetail => self.request_row_action(RowAction::Detail),
            Action::ToggleStatus => self.request_row_action(RowAction::ToggleStatus),
            Action::AssignTeam => self.request_row_action(RowAction::AssignTeam),
            Action::AssignPermission => self.request_row_action(RowAction::AssignPermission),
            _ => {}
        }
    }

    fn request_row_action(&mut self, action: RowAction) {
        let Some(actions) = self.selected_actions() else { return };
        let Some(request) = actions.request(action) else {
            log_debug(&format!("{:?} is disabled for the selected row", action));
            return;
        };
        self.handle_row_request(request);
    }

    /// Parent side of the row buttons.
    pub fn handle_row_request(&mut self, request: RowRequest) {
        match request {
            RowRequest::Edit(uuid) => self.open_editor(&uuid),
            RowRequest::ToggleStatus(uuid) => self.pending = Some(PendingOp::ToggleStatus(uuid)),
            RowRequest::AssignTeam(uuid) => {
                let name = self.row_name(&uuid);
                log_info(&format!("Assign team requested for {}", uuid));
                self.toasts.add_toast(Toast::info("Atribuir Equipe", name));
            }
            RowRequest::AssignPermission(uuid) => {
                let name = self.row_name(&uuid);
                log_info(&format!("Assign permission requested for {}", uuid));
                self.toasts.add_toast(Toast::info("Atribuir Permissões", name));
            }
        }
    }

    fn row_name(&self, uuid: &str) -> String {
        self.rows
            .iter()
            .find(|r| r.uuid == uuid)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| uuid.to_string())
    }

    fn open_editor(&mut self, uuid: &str) {
        let mut controller = EditController::new(self.tab.descriptor());
        if controller.open(uuid) {
            self.editor = Some(controller);
            self.popup = Some(Popup::Edit);
            self.pending = Some(PendingOp::FetchRecord);
        }
    }

    fn handle_edit_action(&mut self, action: Action) {
        let Some(editor) = self.editor.as_mut() else {
            self.popup = None;
            return;
        };

        match action {
            Action::Unlock => {
                if !editor.toggle_read_only(&self.auth) {
                    log_debug("Unlock ignored: not allowed in the current state");
                }
            }
            Action::Save => {
                if editor.form().can_submit() {
                    self.pending = Some(PendingOp::SubmitRecord);
                }
            }
            Action::Cancel | Action::Quit => {
                if let Some(signal) = editor.request_cancel() {
                    self.on_editor_closed(signal);
                } else {
                    self.popup = Some(Popup::ConfirmCancel);
                }
            }
            Action::NextField | Action::MoveDown => editor.form_mut().focus_next(),
            Action::PrevField | Action::MoveUp => editor.form_mut().focus_prev(),
            Action::TypeChar(c) => {
                if editor.phase() == EditPhase::Editing {
                    if let Err(e) = editor.form_mut().input_char(c) {
                        log_debug(&format!("Input rejected: {}", e));
                    }
                }
            }
            Action::Backspace => {
                if editor.phase() == EditPhase::Editing {
                    if let Err(e) = editor.form_mut().backspace() {
                        log_debug(&format!("Backspace rejected: {}", e));
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_action(&mut self, action: Action) {
        match action {
            Action::ConfirmYes => {
                if let Some(editor) = self.editor.as_mut() {
                    let signal = editor.cancel();
                    self.on_editor_closed(signal);
                } else {
                    self.popup = None;
                }
            }
            Action::ConfirmNo | Action::Cancel => self.popup = Some(Popup::Edit),
            _ => {}
        }
    }

    fn on_editor_closed(&mut self, signal: CloseSignal) {
        self.editor = None;
        self.popup = None;
        if signal.has_changes {
            self.pending = Some(PendingOp::Refresh);
        }
    }

    fn switch_tab(&mut self, tab: EntityKind) {
        if self.tab != tab {
            self.tab = tab;
            self.rows.clear();
            self.selected_index = 0;
            self.pending = Some(PendingOp::Refresh);
        }
    }

    /// Runs the queued network call, if any.
    pub async fn run_pending(&mut self) {
        let Some(op) = self.pending.take() else { return };
        log_debug(&format!("Running {:?}", op));

        match op {
            PendingOp::Refresh => self.refresh_rows().await,
            PendingOp::FetchRecord => {
                let Some(editor) = self.editor.as_mut() else { return };
                if let Some(signal) = editor.fetch(self.api.as_ref(), &mut self.toasts).await {
                    self.on_editor_closed(signal);
                }
            }
            PendingOp::SubmitRecord => {
                let Some(editor) = self.editor.as_mut() else { return };
                match editor.submit(self.api.as_ref(), &mut self.toasts, &self.loader).await {
                    Ok(Some(signal)) => self.on_editor_closed(signal),
                    Ok(None) => {}
                    Err(e) => {
                        log_debug(&format!("Submit refused: {}", e));
                        self.toasts.add_toast(Toast::warning("Formulário", e.to_string()));
                    }
                }
            }
            PendingOp::ToggleStatus(uuid) => {
                let Some(row) = self.rows.iter().find(|r| r.uuid == uuid).cloned() else { return };
                let result = toggle_status(
                    self.api.as_ref(),
                    &mut self.toasts,
                    &self.loader,
                    &self.auth,
                    self.tab.descriptor(),
                    &row,
                )
                .await;
                match result {
                    Ok(true) => self.refresh_rows().await,
                    Ok(false) => {}
                    Err(e) => self.toasts.add_toast(Toast::warning("Ooops", e.to_string())),
                }
            }
        }
    }

    pub async fn refresh_rows(&mut self) {
        self.error_message = None;
        let result = {
            let _busy = self.loader.show();
            fetch_rows(self.api.as_ref(), self.tab.descriptor()).await
        };

        match result {
            Ok(rows) => {
                self.rows = rows;
                if self.selected_index >= self.rows.len() {
                    self.selected_index = self.rows.len().saturating_sub(1);
                }
            }
            Err(e) => {
                log_error(&format!("Failed to load {}: {}", self.tab, e));
                self.error_message = Some(format!("Failed to load {}: {}", self.tab.title(), e));
                self.report_rejection(&e);
            }
        }
    }

    fn report_rejection(&mut self, error: &AdminError) {
        self.toasts.handle_api_rejection(error);
    }

    pub fn tick(&mut self) {
        self.toasts.prune_expired();
    }

    fn move_selection_down(&mut self) {
        if !self.rows.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.rows.len();
        }
    }

    fn move_selection_up(&mut self) {
        if !self.rows.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.rows.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }
}
