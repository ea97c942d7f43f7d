pub mod company;
pub mod status;
pub mod team;
pub mod user;

// Re-export commonly used types
pub use company::{Company, CompanySummary};
pub use status::Status;
pub use team::{Team, TeamSummary};
pub use user::{User, UserSummary};
