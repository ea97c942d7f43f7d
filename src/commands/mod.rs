pub mod auth;
pub mod edit;
pub mod list;
pub mod show;
pub mod status;
pub mod whoami;

pub use auth::handle_auth;
pub use edit::{handle_edit, parse_assignments};
pub use list::handle_list;
pub use show::{handle_show, load_record};
pub use status::handle_status;
pub use whoami::handle_whoami;
