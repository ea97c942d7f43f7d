use serde_json::Value;

use super::{decode, Entity, EntityKind};
use crate::error::AdminResult;
use crate::forms::{field, FieldKind, FieldSpec, FormValues, Rule};
use crate::models::{Status, Team, TeamSummary};
use crate::table::ListRow;

const FIELDS: &[FieldSpec] = &[
    field("status", "Ativo", "", FieldKind::Switch, &[Rule::Required]),
    field("name", "Descrição", "Insira o nome da equipe", FieldKind::Text,
        &[Rule::Required, Rule::MaxLen(255)]),
];

pub struct Teams;

pub static TEAMS: Teams = Teams;

impl Entity for Teams {
    fn kind(&self) -> EntityKind {
        EntityKind::Teams
    }

    fn resource(&self) -> &'static str {
        "teams"
    }

    fn edit_title(&self) -> &'static str {
        "Editar Equipe"
    }

    fn edited_message(&self) -> &'static str {
        "O cadastro da Equipe foi editado."
    }

    fn status_message(&self, status: Status) -> &'static str {
        match status {
            Status::Active => "Equipe ativada com sucesso!",
            Status::Inactive => "Equipe inativada com sucesso!",
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn initial_values(&self, _uuid: &str, data: Value) -> AdminResult<FormValues> {
        let team: Team = decode(self.resource(), data)?;
        Ok(FormValues::new()
            .with("name", team.name)
            .with("status", team.status.as_str()))
    }

    fn list_row(&self, data: Value) -> AdminResult<ListRow> {
        let summary: TeamSummary = decode(self.resource(), data)?;
        Ok(ListRow {
            uuid: summary.uuid,
            name: summary.name,
            status: summary.status,
            created_at: summary.created_at,
            resignation_date: None,
        })
    }
}
