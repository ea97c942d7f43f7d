//! Per-entity descriptors consumed by the generic edit controller and table.

pub mod company;
pub mod team;
pub mod user;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::client::record_path;
use crate::error::{AdminError, AdminResult};
use crate::forms::{payload_from_values, FieldSpec, FormValues};
use crate::models::Status;
use crate::table::ListRow;

pub use company::{Companies, COMPANIES};
pub use team::{Teams, TEAMS};
pub use user::{Users, USERS};

/// Everything a screen needs to know about one API resource.
pub trait Entity: Send + Sync {
    fn kind(&self) -> EntityKind;

    /// Path segment under `/parametrizations`.
    fn resource(&self) -> &'static str;

    /// Modal title, e.g. "Editar Empresa".
    fn edit_title(&self) -> &'static str;

    /// Success toast after an edit.
    fn edited_message(&self) -> &'static str;

    fn status_message(&self, status: Status) -> &'static str;

    fn fields(&self) -> &'static [FieldSpec];

    /// Masked form values from a fetched record.
    fn initial_values(&self, uuid: &str, data: Value) -> AdminResult<FormValues>;

    fn list_row(&self, data: Value) -> AdminResult<ListRow>;

    /// Users can be assigned teams and permissions from their row.
    fn supports_assignments(&self) -> bool {
        false
    }

    /// Unmasked request body for the update call.
    fn payload(&self, _uuid: &str, values: &FormValues) -> Value {
        Value::Object(payload_from_values(self.fields(), values))
    }

    fn update_path(&self, uuid: &str) -> String {
        record_path(self.resource(), uuid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Companies,
    Users,
    Teams,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Companies, EntityKind::Users, EntityKind::Teams];

    pub fn descriptor(&self) -> &'static dyn Entity {
        match self {
            EntityKind::Companies => &COMPANIES,
            EntityKind::Users => &USERS,
            EntityKind::Teams => &TEAMS,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Companies => "Empresas",
            EntityKind::Users => "Usuários",
            EntityKind::Teams => "Equipes",
        }
    }

    pub fn next(&self) -> EntityKind {
        match self {
            EntityKind::Companies => EntityKind::Users,
            EntityKind::Users => EntityKind::Teams,
            EntityKind::Teams => EntityKind::Companies,
        }
    }

    pub fn prev(&self) -> EntityKind {
        match self {
            EntityKind::Companies => EntityKind::Teams,
            EntityKind::Users => EntityKind::Companies,
            EntityKind::Teams => EntityKind::Users,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().resource())
    }
}

impl FromStr for EntityKind {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "companies" | "company" => Ok(EntityKind::Companies),
            "users" | "user" => Ok(EntityKind::Users),
            "teams" | "team" => Ok(EntityKind::Teams),
            other => Err(AdminError::InvalidInput(format!("Unknown entity '{}'", other))),
        }
    }
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(resource: &str, data: Value) -> AdminResult<T> {
    serde_json::from_value(data)
        .map_err(|e| AdminError::UnexpectedResponse(format!("{} record: {}", resource, e)))
}
