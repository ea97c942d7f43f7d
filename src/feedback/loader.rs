use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Global "busy" indicator. Every `show()` holds it up until the guard drops.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    depth: Arc<AtomicUsize>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) -> LoaderGuard {
        self.depth.fetch_add(1, Ordering::SeqCst);
        LoaderGuard { depth: self.depth.clone() }
    }

    pub fn is_visible(&self) -> bool {
        self.depth.load(Ordering::SeqCst) > 0
    }
}

#[must_use = "the loader hides as soon as the guard is dropped"]
pub struct LoaderGuard {
    depth: Arc<AtomicUsize>,
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        self.depth.fetch_sub(1, Ordering::SeqCst);
    }
}
