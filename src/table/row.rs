use serde::{Deserialize, Serialize};

use crate::auth::AuthRoles;
use crate::entities::Entity;
use crate::models::Status;

/// One record as shown in a list screen.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ListRow {
    pub uuid: String,
    pub name: String,
    pub status: Status,
    pub created_at: Option<String>,
    pub resignation_date: Option<String>,
}

impl ListRow {
    /// Any resignation date, even an empty one, marks the record resigned.
    pub fn is_terminal(&self) -> bool {
        self.resignation_date.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ToggleStatus,
    Detail,
    AssignTeam,
    AssignPermission,
}

/// What the row asks its parent list to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRequest {
    ToggleStatus(String),
    Edit(String),
    AssignTeam(String),
    AssignPermission(String),
}

/// Enabled/disabled state of every button on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowActions {
    uuid: String,
    pub status_toggle: bool,
    pub detail: bool,
    pub assign_team: bool,
    pub assign_permission: bool,
}

impl RowActions {
    pub fn for_row(entity: &dyn Entity, row: &ListRow, auth: &AuthRoles) -> Self {
        let terminal = row.is_terminal();
        let assignable = entity.supports_assignments() && !terminal;
        Self {
            uuid: row.uuid.clone(),
            status_toggle: auth.has_parametrizations_writer(),
            detail: !terminal,
            assign_team: assignable,
            assign_permission: assignable,
        }
    }

    pub fn is_enabled(&self, action: RowAction) -> bool {
        match action {
            RowAction::ToggleStatus => self.status_toggle,
            RowAction::Detail => self.detail,
            RowAction::AssignTeam => self.assign_team,
            RowAction::AssignPermission => self.assign_permission,
        }
    }

    /// `None` when the button is disabled.
    pub fn request(&self, action: RowAction) -> Option<RowRequest> {
        if !self.is_enabled(action) {
            return None;
        }
        let uuid = self.uuid.clone();
        Some(match action {
            RowAction::ToggleStatus => RowRequest::ToggleStatus(uuid),
            RowAction::Detail => RowRequest::Edit(uuid),
            RowAction::AssignTeam => RowRequest::AssignTeam(uuid),
            RowAction::AssignPermission => RowRequest::AssignPermission(uuid),
        })
    }
}
