pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const CONFIG_FILE: &str = ".paradmin-config.json";

pub const ENV_API_URL: &str = "PARADMIN_API_URL";
pub const ENV_API_TOKEN: &str = "PARADMIN_API_TOKEN";
pub const ENV_ROLES: &str = "PARADMIN_ROLES";

pub const PARAMETRIZATIONS_PREFIX: &str = "/parametrizations";

// Role granting every write action on the parametrizations screens
pub const ROLE_PARAMETRIZATIONS_WRITER: &str = "parametrizations_writer";

// Toast texts
pub const TITLE_SUCCESS: &str = "Sucesso";
pub const TITLE_SUCCESS_STATUS: &str = "Sucesso!";
pub const TITLE_WARNING: &str = "Ooops";
pub const API_REJECTION_DESCRIPTION: &str =
    "Não foi possível concluir a solicitação. Tente novamente mais tarde.";

pub const TOAST_TTL_SECS: u64 = 5;
