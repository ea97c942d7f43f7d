use serde::{Deserialize, Serialize};

use super::Status;

/// Full user record as returned by `GET /parametrizations/users/{uuid}`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub cpf: String,
    pub name: String,
    #[serde(default)]
    pub social_name: Option<String>,
    pub company_uuid: String,
    pub position: String,
    pub email: String,
    #[serde(default)]
    pub payroll_number: Option<String>,
    #[serde(default)]
    pub employee_code: Option<String>,
    #[serde(default)]
    pub pis: Option<String>,
    #[serde(default)]
    pub ctps: Option<String>,
    #[serde(default)]
    pub admission_date: Option<String>,
    #[serde(default)]
    pub resignation_date: Option<String>,
    pub status: Status,
}

/// Row of the users list; the list endpoint answers in snake_case.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserSummary {
    pub uuid: String,
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub resignation_date: Option<String>,
}
