use serde_json::Value;

use super::{decode, Entity, EntityKind};
use crate::error::AdminResult;
use crate::forms::{field, payload_from_values, FieldKind, FieldSpec, FormValues, Rule};
use crate::masks::{cpf_mask, Mask};
use crate::models::{Status, User, UserSummary};
use crate::table::ListRow;

const FIELDS: &[FieldSpec] = &[
    field("status", "Ativo", "", FieldKind::Switch, &[Rule::Required]),
    field("cpf", "CPF", "000.000.000-00", FieldKind::Masked(Mask::Cpf),
        &[Rule::Required, Rule::Digits(11)]),
    field("name", "Nome", "Insira o nome completo", FieldKind::Text,
        &[Rule::Required, Rule::MaxLen(255)]),
    field("socialName", "Nome Social", "Insira o nome social", FieldKind::Text,
        &[Rule::MaxLen(255)]),
    field("companyUuid", "Empresa", "Identificador da empresa", FieldKind::Text,
        &[Rule::Required]),
    field("position", "Cargo", "Insira o cargo", FieldKind::Text,
        &[Rule::Required, Rule::MaxLen(255)]),
    field("email", "E-mail", "nome@empresa.com.br", FieldKind::Email,
        &[Rule::Required, Rule::Email]),
    field("payrollNumber", "Matrícula", "Insira a matrícula", FieldKind::Text,
        &[Rule::MaxLen(50)]),
    field("employeeCode", "Código do Colaborador", "Insira o código", FieldKind::Text,
        &[Rule::MaxLen(50)]),
    field("pis", "PIS", "Insira o PIS", FieldKind::Text, &[Rule::MaxLen(20)]),
    field("ctps", "CTPS", "Insira a CTPS", FieldKind::Text, &[Rule::MaxLen(20)]),
    field("admissionDate", "Data de Admissão", "AAAA-MM-DD", FieldKind::Date,
        &[Rule::Required, Rule::Date]),
    field("resignationDate", "Data de Desligamento", "AAAA-MM-DD", FieldKind::Date,
        &[Rule::Date]),
];

pub struct Users;

pub static USERS: Users = Users;

impl Entity for Users {
    fn kind(&self) -> EntityKind {
        EntityKind::Users
    }

    fn resource(&self) -> &'static str {
        "users"
    }

    fn edit_title(&self) -> &'static str {
        "Editar Usuário"
    }

    fn edited_message(&self) -> &'static str {
        "O cadastro do Usuário foi editado."
    }

    fn status_message(&self, status: Status) -> &'static str {
        match status {
            Status::Active => "Usuário ativado com sucesso!",
            Status::Inactive => "Usuário inativado com sucesso!",
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn initial_values(&self, uuid: &str, data: Value) -> AdminResult<FormValues> {
        let user: User = decode(self.resource(), data)?;
        let admission = user
            .admission_date
            .as_deref()
            .and_then(|d| d.split('T').next())
            .unwrap_or_default()
            .to_string();
        let resignation = user
            .resignation_date
            .as_deref()
            .and_then(|d| d.split('T').next())
            .unwrap_or_default()
            .to_string();

        Ok(FormValues::new()
            .with("cpf", cpf_mask(&user.cpf))
            .with("name", user.name)
            .with("socialName", user.social_name.unwrap_or_default())
            .with("companyUuid", user.company_uuid)
            .with("position", user.position)
            .with("email", user.email)
            .with("payrollNumber", user.payroll_number.unwrap_or_default())
            .with("employeeCode", user.employee_code.unwrap_or_default())
            .with("pis", user.pis.unwrap_or_default())
            .with("ctps", user.ctps.unwrap_or_default())
            .with("admissionDate", admission)
            .with("resignationDate", resignation)
            .with("status", user.status.as_str())
            .with("uuid", uuid))
    }

    fn list_row(&self, data: Value) -> AdminResult<ListRow> {
        let summary: UserSummary = decode(self.resource(), data)?;
        Ok(ListRow {
            uuid: summary.uuid,
            name: summary.name,
            status: summary.status,
            created_at: summary.created_at,
            resignation_date: summary.resignation_date,
        })
    }

    fn supports_assignments(&self) -> bool {
        true
    }

    // The user's own uuid travels in the body as well.
    fn payload(&self, uuid: &str, values: &FormValues) -> Value {
        let mut body = payload_from_values(FIELDS, values);
        body.insert("uuid".to_string(), Value::String(uuid.to_string()));
        Value::Object(body)
    }
}
