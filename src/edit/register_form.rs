use std::collections::BTreeMap;

use crate::entities::Entity;
use crate::error::{AdminError, AdminResult};
use crate::forms::{FieldKind, FieldSpec, FormState, FormValues};
use crate::models::Status;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// What the form renders right now.
#[derive(Debug)]
pub enum FormView<'a> {
    /// Initial values have not arrived yet.
    Skeleton,
    Fields(&'a FormState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelRequest {
    Close,
    /// Unsaved changes; the caller must ask before closing.
    NeedsConfirmation,
}

pub struct RegisterForm {
    entity: &'static dyn Entity,
    mode: FormMode,
    read_only: bool,
    state: Option<FormState>,
    focus: usize,
}

impl RegisterForm {
    pub fn new(entity: &'static dyn Entity, mode: FormMode, initial: Option<FormValues>) -> Self {
        let mut form = Self {
            entity,
            mode,
            read_only: mode == FormMode::Edit,
            state: None,
            focus: 0,
        };
        if let Some(values) = initial {
            form.load(values);
        }
        form
    }

    pub fn load(&mut self, initial: FormValues) {
        self.state = Some(FormState::new(self.entity.fields(), initial));
        self.focus = 0;
    }

    pub fn clear(&mut self) {
        self.state = None;
        self.focus = 0;
    }

    pub fn view(&self) -> FormView<'_> {
        match &self.state {
            Some(state) => FormView::Fields(state),
            None => FormView::Skeleton,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn has_values(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&FormState> {
        self.state.as_ref()
    }

    pub fn values(&self) -> Option<&FormValues> {
        self.state.as_ref().map(FormState::values)
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn is_dirty(&self) -> bool {
        self.state.as_ref().map_or(false, FormState::is_dirty)
    }

    pub fn is_valid(&self) -> bool {
        self.state.as_ref().map_or(false, FormState::is_valid)
    }

    /// Save and cancel are only offered while editable.
    pub fn shows_actions(&self) -> bool {
        self.state.is_some() && !self.read_only
    }

    pub fn can_submit(&self) -> bool {
        self.shows_actions() && self.is_dirty() && self.is_valid()
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Cadastrar",
            FormMode::Edit => "Salvar",
        }
    }

    pub fn request_cancel(&self) -> CancelRequest {
        if self.is_dirty() {
            CancelRequest::NeedsConfirmation
        } else {
            CancelRequest::Close
        }
    }

    fn editable_state(&mut self) -> AdminResult<&mut FormState> {
        if self.read_only {
            return Err(AdminError::StateError("form is read-only".to_string()));
        }
        self.state
            .as_mut()
            .ok_or_else(|| AdminError::StateError("form has no values yet".to_string()))
    }

    pub fn set_value(&mut self, name: &str, raw: &str) -> AdminResult<()> {
        let create_mode = self.mode == FormMode::Create;
        let state = self.editable_state()?;
        let kind = state
            .spec(name)
            .map(|s| s.kind)
            .ok_or_else(|| AdminError::InvalidInput(format!("Unknown field '{}'", name)))?;

        if kind == FieldKind::Switch {
            if create_mode {
                return Err(AdminError::StateError("status is fixed while creating".to_string()));
            }
            raw.parse::<Status>()?;
        }
        state.set_value(name, raw)
    }

    /// Flips the status switch.
    pub fn toggle_status(&mut self) -> AdminResult<Status> {
        let current: Status = self
            .state
            .as_ref()
            .map(|s| s.value("status"))
            .unwrap_or_default()
            .parse()
            .unwrap_or_default();
        let next = current.toggled();
        self.set_value("status", next.as_str())?;
        Ok(next)
    }

    pub fn touch(&mut self, name: &str) {
        if let Some(state) = self.state.as_mut() {
            state.touch(name);
        }
    }

    pub fn errors(&self) -> BTreeMap<&'static str, String> {
        self.state.as_ref().map(FormState::errors).unwrap_or_default()
    }

    pub fn visible_error(&self, name: &str) -> Option<String> {
        self.state.as_ref().and_then(|s| s.visible_error(name))
    }

    /// Hands the values upward when the form is dirty and valid; otherwise
    /// marks every field touched so the errors show.
    pub fn submit(&mut self) -> AdminResult<FormValues> {
        if self.can_submit() {
            if let Some(values) = self.values() {
                return Ok(values.clone());
            }
        }
        if let Some(state) = self.state.as_mut() {
            state.touch_all();
        }
        if !self.shows_actions() {
            return Err(AdminError::StateError("form is not editable".to_string()));
        }
        if !self.is_dirty() {
            return Err(AdminError::ValidationError("nothing changed".to_string()));
        }
        let summary = self
            .state
            .as_ref()
            .map(|s| {
                s.errors()
                    .into_iter()
                    .map(|(name, msg)| format!("{}: {}", name, msg))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default();
        Err(AdminError::ValidationError(summary))
    }

    pub fn focused_field(&self) -> Option<&'static FieldSpec> {
        self.entity.fields().get(self.focus)
    }

    pub fn focus_index(&self) -> usize {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let count = self.entity.fields().len();
        if count > 0 {
            if let Some(spec) = self.focused_field() {
                self.touch(spec.name);
            }
            self.focus = (self.focus + 1) % count;
        }
    }

    pub fn focus_prev(&mut self) {
        let count = self.entity.fields().len();
        if count > 0 {
            if let Some(spec) = self.focused_field() {
                self.touch(spec.name);
            }
            self.focus = if self.focus == 0 { count - 1 } else { self.focus - 1 };
        }
    }

    /// Types into the focused field. Space flips the status switch.
    pub fn input_char(&mut self, ch: char) -> AdminResult<()> {
        let Some(spec) = self.focused_field() else { return Ok(()) };
        if spec.kind == FieldKind::Switch {
            if ch == ' ' {
                self.toggle_status()?;
            }
            return Ok(());
        }
        let mut value = self
            .state
            .as_ref()
            .map(|s| s.value(spec.name).to_string())
            .unwrap_or_default();
        value.push(ch);
        self.set_value(spec.name, &value)
    }

    pub fn backspace(&mut self) -> AdminResult<()> {
        let Some(spec) = self.focused_field() else { return Ok(()) };
        if spec.kind == FieldKind::Switch {
            return Ok(());
        }
        let mut value = self
            .state
            .as_ref()
            .map(|s| s.value(spec.name).to_string())
            .unwrap_or_default();
        value.pop();
        self.set_value(spec.name, &value)
    }
}
