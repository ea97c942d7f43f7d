pub mod loader;
pub mod toast;

pub use loader::{Loader, LoaderGuard};
pub use toast::{ConsoleNotifier, Notifier, Toast, ToastCenter, ToastKind};
