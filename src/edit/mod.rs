pub mod controller;
pub mod register_form;

pub use controller::{CloseSignal, EditController, EditPhase};
pub use register_form::{CancelRequest, FormMode, FormView, RegisterForm};
