use std::time::{Duration, Instant};

use colored::*;

use crate::constants::{API_REJECTION_DESCRIPTION, TITLE_WARNING, TOAST_TTL_SECS};
use crate::error::AdminError;
use crate::formatting::theme::{color_for, toast_color};
use crate::logging::log_error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    pub created_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            created_at: Instant::now(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title, description)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= Duration::from_secs(TOAST_TTL_SECS)
    }

    pub fn remaining_secs(&self) -> u64 {
        TOAST_TTL_SECS.saturating_sub(self.created_at.elapsed().as_secs())
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    fn add_toast(&mut self, toast: Toast);

    /// Generic handler for transport failures and unexpected responses.
    fn handle_api_rejection(&mut self, error: &AdminError) {
        log_error(&format!("API rejection: {}", error));
        self.add_toast(Toast::error(TITLE_WARNING, API_REJECTION_DESCRIPTION));
    }
}

/// Toast queue shown by the interactive panel.
#[derive(Debug, Default)]
pub struct ToastCenter {
    toasts: Vec<Toast>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.toasts.iter().filter(|t| t.kind == kind).count()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Newest first, at most `limit`.
    pub fn latest(&self, limit: usize) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(limit)
    }

    pub fn dismiss_latest(&mut self) {
        self.toasts.pop();
    }

    pub fn prune_expired(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.is_expired(now));
    }
}

impl Notifier for ToastCenter {
    fn add_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }
}

/// Prints toasts straight to the terminal for one-shot commands.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    shown: Vec<ToastKind>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        self.shown.contains(&ToastKind::Error)
    }

    pub fn had_warning(&self) -> bool {
        self.shown.contains(&ToastKind::Warning)
    }
}

impl Notifier for ConsoleNotifier {
    fn add_toast(&mut self, toast: Toast) {
        let color = color_for(toast_color(toast.kind));
        let line = format!("{}: {}", toast.title, toast.description).color(color);
        match toast.kind {
            ToastKind::Success => println!("{} {}", "✓".color(color).bold(), line),
            ToastKind::Info => println!("{} {}", "ⓘ".color(color).bold(), line),
            ToastKind::Warning => eprintln!("{} {}", "!".color(color).bold(), line),
            ToastKind::Error => eprintln!("{} {}", "✗".color(color).bold(), line),
        }
        self.shown.push(toast.kind);
    }
}
