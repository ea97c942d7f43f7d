use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use super::api::{ApiEnvelope, ParametrizationsApi};
use crate::error::{AdminError, AdminResult};
use crate::logging::{log_debug, log_warn};

pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: &str, api_token: Option<&str>) -> AdminResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = api_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| AdminError::ConfigError("Invalid API token format".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> AdminResult<ApiEnvelope> {
        let url = self.url_for(path);
        log_debug(&format!("{} {}", method, url));

        let mut request = self.client.request(method, &url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        envelope_from_response(status, &text)
    }
}

/// Turns a raw HTTP answer into an envelope or a transport-level error.
///
/// Non-2xx answers that still carry a `message` are business rejections and come
/// back as envelopes; anything else outside 2xx is an error.
pub fn envelope_from_response(status: StatusCode, body: &str) -> AdminResult<ApiEnvelope> {
    if status.is_success() {
        if body.trim().is_empty() {
            return Ok(ApiEnvelope::default());
        }
        return serde_json::from_str(body)
            .map_err(|e| AdminError::UnexpectedResponse(format!("Malformed body: {}", e)));
    }

    if let Ok(envelope) = serde_json::from_str::<ApiEnvelope>(body) {
        if envelope.warning().is_some() {
            log_warn(&format!("Business rejection ({}): {:?}", status, envelope.message));
            return Ok(ApiEnvelope { data: None, message: envelope.message });
        }
    }

    Err(AdminError::ApiError(format!(
        "API request failed with status {}: {}",
        status, body
    )))
}

#[async_trait]
impl ParametrizationsApi for HttpApiClient {
    async fn get(&self, path: &str) -> AdminResult<ApiEnvelope> {
        self.send(Method::GET, path, None).await
    }

    async fn put(&self, path: &str, body: Value) -> AdminResult<ApiEnvelope> {
        self.send(Method::PUT, path, Some(body)).await
    }
}
