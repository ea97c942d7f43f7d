use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::PARAMETRIZATIONS_PREFIX;
use crate::error::AdminResult;

/// Response body shared by every parametrizations endpoint.
///
/// `data` signals success, `message` carries a user-facing warning. Either may
/// be absent (or `null`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiEnvelope {
    pub fn with_data(data: Value) -> Self {
        Self { data: Some(data), message: None }
    }

    pub fn with_message(message: impl Into<String>) -> Self {
        Self { data: None, message: Some(message.into()) }
    }

    /// `data` is present and not JSON `null`.
    pub fn has_data(&self) -> bool {
        matches!(&self.data, Some(v) if !v.is_null())
    }

    pub fn warning(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// The REST collaborator behind every screen.
#[async_trait]
pub trait ParametrizationsApi: Send + Sync {
    async fn get(&self, path: &str) -> AdminResult<ApiEnvelope>;

    async fn put(&self, path: &str, body: Value) -> AdminResult<ApiEnvelope>;
}

pub fn collection_path(resource: &str) -> String {
    format!("{}/{}", PARAMETRIZATIONS_PREFIX, resource)
}

pub fn record_path(resource: &str, uuid: &str) -> String {
    format!("{}/{}/{}", PARAMETRIZATIONS_PREFIX, resource, uuid)
}
