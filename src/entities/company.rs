use serde_json::Value;

use super::{decode, Entity, EntityKind};
use crate::error::AdminResult;
use crate::forms::{field, FieldKind, FieldSpec, FormValues, Rule};
use crate::masks::{cep_mask, cnpj_mask, Mask};
use crate::models::{Company, CompanySummary, Status};
use crate::table::ListRow;

const FIELDS: &[FieldSpec] = &[
    field("status", "Ativo", "", FieldKind::Switch, &[Rule::Required]),
    field("companyName", "Razão Social", "Insira o nome da empresa", FieldKind::Text,
        &[Rule::Required, Rule::MaxLen(255)]),
    field("companyCnpj", "CNPJ", "00.000.000/0000-00", FieldKind::Masked(Mask::Cnpj),
        &[Rule::Required, Rule::Digits(14)]),
    field("zipCode", "CEP", "00000-000", FieldKind::Masked(Mask::Cep),
        &[Rule::Required, Rule::Digits(8)]),
    field("streetName", "Logradouro", "Insira o logradouro", FieldKind::Text,
        &[Rule::Required, Rule::MaxLen(255)]),
    field("streetNumber", "Número", "Insira o número", FieldKind::Text,
        &[Rule::Required, Rule::MaxLen(10)]),
    field("complement", "Complemento", "Insira o complemento", FieldKind::Text,
        &[Rule::MaxLen(255)]),
    field("neighborhood", "Bairro", "Insira o bairro", FieldKind::Text,
        &[Rule::Required, Rule::MaxLen(255)]),
    field("city", "Cidade", "Insira a cidade", FieldKind::Text,
        &[Rule::Required, Rule::MaxLen(255)]),
    field("state", "UF", "UF", FieldKind::Text, &[Rule::Required, Rule::Uf]),
];

pub struct Companies;

pub static COMPANIES: Companies = Companies;

impl Entity for Companies {
    fn kind(&self) -> EntityKind {
        EntityKind::Companies
    }

    fn resource(&self) -> &'static str {
        "companies"
    }

    fn edit_title(&self) -> &'static str {
        "Editar Empresa"
    }

    fn edited_message(&self) -> &'static str {
        "O cadastro da Empresa foi editado."
    }

    fn status_message(&self, status: Status) -> &'static str {
        match status {
            Status::Active => "Empresa ativada com sucesso!",
            Status::Inactive => "Empresa inativada com sucesso!",
        }
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn initial_values(&self, _uuid: &str, data: Value) -> AdminResult<FormValues> {
        let company: Company = decode(self.resource(), data)?;

        Ok(FormValues::new()
            .with("companyName", company.company_name)
            .with("companyCnpj", cnpj_mask(&company.company_cnpj))
            .with("zipCode", cep_mask(&company.zip_code))
            .with("streetName", company.street_name)
            .with("streetNumber", company.street_number)
            .with("complement", company.complement.unwrap_or_default())
            .with("neighborhood", company.neighborhood)
            .with("city", company.city)
            .with("state", company.state)
            .with("status", company.status.as_str()))
    }

    fn list_row(&self, data: Value) -> AdminResult<ListRow> {
        let summary: CompanySummary = decode(self.resource(), data)?;
        Ok(ListRow {
            uuid: summary.uuid,
            name: summary.company_name,
            status: summary.status,
            created_at: summary.created_at,
            resignation_date: None,
        })
    }
}
