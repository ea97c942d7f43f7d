use serde::{Deserialize, Serialize};

use super::Status;

/// Full company record as returned by `GET /parametrizations/companies/{uuid}`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_name: String,
    pub company_cnpj: String,
    pub zip_code: String,
    pub street_name: String,
    pub street_number: String,
    #[serde(default)]
    pub complement: Option<String>,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub status: Status,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CompanySummary {
    pub uuid: String,
    #[serde(alias = "companyName")]
    pub company_name: String,
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
}
