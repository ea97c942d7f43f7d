use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("API token not found. Please run 'paradmin auth' to configure.")]
    ApiTokenNotFound,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not allowed: {0}")]
    Unauthorized(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("State error: {0}")]
    StateError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type AdminResult<T> = Result<T, AdminError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AdminResult<T>;
    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> AdminResult<T> {
        self.map_err(|e| AdminError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AdminError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> AdminResult<T> {
        self.ok_or_else(|| AdminError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> AdminResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| AdminError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! admin_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::AdminError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::AdminError::$error_type(format!($fmt, $($arg)*))
    };
}
