use crate::auth::AuthRoles;
use crate::client::{record_path, ParametrizationsApi};
use crate::constants::{TITLE_SUCCESS, TITLE_WARNING};
use crate::entities::Entity;
use crate::error::{AdminError, AdminResult};
use crate::feedback::{Loader, Notifier, Toast};
use crate::logging::{log_debug, log_info, log_warn};

use super::register_form::{CancelRequest, FormMode, RegisterForm};

/// Lifecycle of one edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Closed,
    /// Modal visible, record being fetched.
    Loading,
    /// Record shown read-only.
    Viewing,
    Editing,
    Submitting,
}

/// Reported to the caller when the modal closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseSignal {
    /// The record changed and the caller's list should be refetched.
    pub has_changes: bool,
}

/// Drives fetch-on-open, the read-only toggle and submit-on-save for one record.
pub struct EditController {
    entity: &'static dyn Entity,
    phase: EditPhase,
    uuid: Option<String>,
    form: RegisterForm,
}

impl EditController {
    pub fn new(entity: &'static dyn Entity) -> Self {
        Self {
            entity,
            phase: EditPhase::Closed,
            uuid: None,
            form: RegisterForm::new(entity, FormMode::Edit, None),
        }
    }

    pub fn entity(&self) -> &'static dyn Entity {
        self.entity
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != EditPhase::Closed
    }

    pub fn is_read_only(&self) -> bool {
        self.form.is_read_only()
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn form(&self) -> &RegisterForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RegisterForm {
        &mut self.form
    }

    pub fn title(&self) -> &'static str {
        self.entity.edit_title()
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.form.is_read_only() {
            "Alterar"
        } else {
            "Alterando..."
        }
    }

    /// Shows the modal for `uuid`; the record still has to be fetched.
    pub fn open(&mut self, uuid: &str) -> bool {
        if uuid.trim().is_empty() || self.phase != EditPhase::Closed {
            return false;
        }
        log_debug(&format!("Opening {} {}", self.entity.resource(), uuid));
        self.uuid = Some(uuid.to_string());
        self.form.clear();
        self.form.set_read_only(true);
        self.phase = EditPhase::Loading;
        true
    }

    /// Loads the record behind the open modal.
    ///
    /// Any failure goes through the rejection handler and closes the modal with
    /// `has_changes: false`.
    pub async fn fetch(
        &mut self,
        api: &dyn ParametrizationsApi,
        notifier: &mut dyn Notifier,
    ) -> Option<CloseSignal> {
        if self.phase != EditPhase::Loading {
            return None;
        }
        let uuid = self.uuid.clone()?;

        match self.load_values(api, &uuid).await {
            Ok(values) => {
                log_debug(&format!("Loaded {} {}", self.entity.resource(), uuid));
                self.form.load(values);
                self.form.set_read_only(true);
                self.phase = EditPhase::Viewing;
                None
            }
            Err(e) => {
                log_warn(&format!("Fetch of {} {} failed: {}", self.entity.resource(), uuid, e));
                notifier.handle_api_rejection(&e);
                Some(self.close(false))
            }
        }
    }

    async fn load_values(
        &self,
        api: &dyn ParametrizationsApi,
        uuid: &str,
    ) -> AdminResult<crate::forms::FormValues> {
        let envelope = api.get(&record_path(self.entity.resource(), uuid)).await?;
        let data = match envelope.data {
            Some(data) if !data.is_null() => data,
            _ => {
                return Err(AdminError::UnexpectedResponse(
                    envelope
                        .message
                        .unwrap_or_else(|| format!("no data for {} {}", self.entity.resource(), uuid)),
                ))
            }
        };
        self.entity.initial_values(uuid, data)
    }

    pub fn can_toggle(&self, auth: &AuthRoles) -> bool {
        self.phase == EditPhase::Viewing
            && self.form.has_values()
            && self.form.is_read_only()
            && auth.has_parametrizations_writer()
    }

    /// Unlocks the form for editing. Returns whether anything changed.
    pub fn toggle_read_only(&mut self, auth: &AuthRoles) -> bool {
        if !self.can_toggle(auth) {
            return false;
        }
        self.form.set_read_only(false);
        self.phase = EditPhase::Editing;
        log_debug(&format!("Unlocked {} {:?}", self.entity.resource(), self.uuid));
        true
    }

    /// Closes without saving.
    pub fn cancel(&mut self) -> CloseSignal {
        self.close(false)
    }

    /// The form's cancel button. A dirty form returns `None`; the caller asks
    /// for confirmation and then calls [`EditController::cancel`].
    pub fn request_cancel(&mut self) -> Option<CloseSignal> {
        if self.phase == EditPhase::Submitting {
            return None;
        }
        if self.form.is_read_only() {
            return Some(self.cancel());
        }
        match self.form.request_cancel() {
            CancelRequest::Close => Some(self.cancel()),
            CancelRequest::NeedsConfirmation => None,
        }
    }

    /// Persists the edited record.
    ///
    /// `Err` only when the form cannot be submitted (not editing, pristine or
    /// invalid). Transport failures and business warnings are reported through
    /// `notifier` and leave the modal open (`Ok(None)`).
    pub async fn submit(
        &mut self,
        api: &dyn ParametrizationsApi,
        notifier: &mut dyn Notifier,
        loader: &Loader,
    ) -> AdminResult<Option<CloseSignal>> {
        if self.phase != EditPhase::Editing {
            return Err(AdminError::StateError(format!(
                "cannot submit while {:?}",
                self.phase
            )));
        }
        let uuid = self
            .uuid
            .clone()
            .ok_or_else(|| AdminError::StateError("no record open".to_string()))?;
        let values = self.form.submit()?;

        let path = self.entity.update_path(&uuid);
        let body = self.entity.payload(&uuid, &values);

        self.phase = EditPhase::Submitting;
        log_info(&format!("PUT {}", path));

        let result = {
            let _busy = loader.show();
            api.put(&path, body).await
        };

        match result {
            Ok(envelope) => {
                let mut closed = None;
                if envelope.has_data() {
                    log_info(&format!("Saved {} {}", self.entity.resource(), uuid));
                    notifier.add_toast(Toast::success(TITLE_SUCCESS, self.entity.edited_message()));
                    closed = Some(self.close(true));
                }
                if let Some(message) = envelope.warning() {
                    log_warn(&format!("PUT {} rejected: {}", path, message));
                    notifier.add_toast(Toast::warning(TITLE_WARNING, message));
                }
                if closed.is_none() {
                    if envelope.warning().is_none() {
                        log_warn(&format!("PUT {} answered without data or message", path));
                    }
                    self.phase = EditPhase::Editing;
                }
                Ok(closed)
            }
            Err(e) => {
                log_warn(&format!("PUT {} failed: {}", path, e));
                notifier.handle_api_rejection(&e);
                self.phase = EditPhase::Editing;
                Ok(None)
            }
        }
    }

    fn close(&mut self, has_changes: bool) -> CloseSignal {
        log_debug(&format!(
            "Closing {} {:?} (has_changes: {})",
            self.entity.resource(),
            self.uuid,
            has_changes
        ));
        self.phase = EditPhase::Closed;
        self.uuid = None;
        self.form.clear();
        self.form.set_read_only(true);
        CloseSignal { has_changes }
    }
}
