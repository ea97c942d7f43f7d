use crate::config::Config;
use crate::constants::ROLE_PARAMETRIZATIONS_WRITER;

/// Roles resolved for the current operator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthRoles {
    roles: Vec<String>,
}

impl AuthRoles {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.roles.iter().cloned())
    }

    /// Read-only operator.
    pub fn reader() -> Self {
        Self::default()
    }

    pub fn writer() -> Self {
        Self::new([ROLE_PARAMETRIZATIONS_WRITER])
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }

    /// Gates every write action on the parametrizations screens.
    pub fn has_parametrizations_writer(&self) -> bool {
        self.has_role(ROLE_PARAMETRIZATIONS_WRITER)
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}
