use colored::{Color, ColoredString, Colorize};

use crate::feedback::ToastKind;
use crate::models::Status;

/// Semantic color definitions for console output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    StatusActive,
    StatusInactive,
    Resigned,
    Header,
    Success,
    Warning,
    Error,
    Info,
    Muted,
}

pub fn color_for(semantic: SemanticColor) -> Color {
    match semantic {
        SemanticColor::StatusActive => Color::Green,
        SemanticColor::StatusInactive => Color::TrueColor { r: 124, g: 124, b: 124 },
        SemanticColor::Resigned => Color::Red,
        SemanticColor::Header => Color::TrueColor { r: 21, g: 76, b: 121 },
        SemanticColor::Success => Color::Green,
        SemanticColor::Warning => Color::Yellow,
        SemanticColor::Error => Color::Red,
        SemanticColor::Info => Color::Blue,
        SemanticColor::Muted => Color::TrueColor { r: 90, g: 90, b: 90 },
    }
}

pub fn status_color(status: Status) -> SemanticColor {
    match status {
        Status::Active => SemanticColor::StatusActive,
        Status::Inactive => SemanticColor::StatusInactive,
    }
}

pub fn toast_color(kind: ToastKind) -> SemanticColor {
    match kind {
        ToastKind::Success => SemanticColor::Success,
        ToastKind::Warning => SemanticColor::Warning,
        ToastKind::Error => SemanticColor::Error,
        ToastKind::Info => SemanticColor::Info,
    }
}

/// Toggle glyph plus label, colored by status.
pub fn format_status(status: Status) -> ColoredString {
    let glyph = if status.is_active() { "◉" } else { "○" };
    format!("{} {}", glyph, status.label()).color(color_for(status_color(status)))
}
