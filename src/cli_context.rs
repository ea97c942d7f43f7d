use crate::auth::AuthRoles;
use crate::client::HttpApiClient;
use crate::config::{resolve_config, save_config, load_config, Config};
use crate::error::{AdminError, AdminResult};
use std::sync::Arc;

/// Central context for CLI operations, managing configuration and client instances
pub struct CliContext {
    config: Config,
    client: Option<Arc<HttpApiClient>>,
}

impl CliContext {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            client: None,
        }
    }

    /// Load context from the config file and environment
    pub fn load() -> Self {
        Self {
            config: resolve_config(),
            client: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Get or create a client (requires an API token)
    pub fn verified_client(&mut self) -> AdminResult<Arc<HttpApiClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let token = self.api_token()?.clone();
        let client = Arc::new(HttpApiClient::new(&self.config.api_url, Some(&token))?);
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn api_token(&self) -> AdminResult<&String> {
        self.config.api_token.as_ref().ok_or(AdminError::ApiTokenNotFound)
    }

    pub fn has_api_token(&self) -> bool {
        self.config.api_token.is_some()
    }

    pub fn roles(&self) -> AuthRoles {
        AuthRoles::from_config(&self.config)
    }

    /// Persist credentials; only the values given are replaced.
    pub fn save_credentials(
        &mut self,
        api_token: String,
        api_url: Option<String>,
        roles: Option<Vec<String>>,
    ) -> AdminResult<()> {
        let mut config = load_config();
        config.api_token = Some(api_token.clone());
        if let Some(url) = api_url {
            config.api_url = url;
        }
        if let Some(roles) = roles {
            config.roles = roles;
        }
        save_config(&config)?;

        self.config = config;
        self.client = None;
        Ok(())
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations
pub struct CliContextBuilder {
    api_token: Option<String>,
    api_url: Option<String>,
    roles: Option<Vec<String>>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self { api_token: None, api_url: None, roles: None }
    }

    pub fn with_api_token(mut self, api_token: String) -> Self {
        self.api_token = Some(api_token);
        self
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Starts from the resolved config unless a token is supplied.
    pub fn build(self) -> CliContext {
        let mut config = if self.api_token.is_some() {
            Config::default()
        } else {
            resolve_config()
        };

        if let Some(token) = self.api_token {
            config.api_token = Some(token);
        }
        if let Some(url) = self.api_url {
            config.api_url = url;
        }
        if let Some(roles) = self.roles {
            config.roles = roles;
        }

        CliContext { config, client: None }
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
