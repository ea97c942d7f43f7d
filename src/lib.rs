// Module declarations
pub mod auth;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod edit;
pub mod entities;
pub mod error;
pub mod feedback;
pub mod formatting;
pub mod forms;
pub mod interactive;
pub mod logging;
pub mod masks;
pub mod models;
pub mod table;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use auth::AuthRoles;
pub use client::{ApiEnvelope, HttpApiClient, ParametrizationsApi};
pub use config::{load_config, save_config, Config};
pub use edit::{CloseSignal, EditController, EditPhase, RegisterForm};
pub use entities::{Entity, EntityKind};
pub use error::{AdminError, AdminResult};
pub use models::*;
