use serde::{Deserialize, Serialize};

use super::Status;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub name: String,
    pub status: Status,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TeamSummary {
    pub uuid: String,
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub created_at: Option<String>,
}
