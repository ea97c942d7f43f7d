pub mod schema;
pub mod state;

pub use schema::{field, FieldKind, FieldSpec, Rule};
pub use state::{payload_from_values, FormState, FormValues};
