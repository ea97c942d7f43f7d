use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::edit::EditPhase;
use crate::interactive::app::Popup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    NextTab,
    PrevTab,

    // Row actions
    OpenDetail,
    ToggleStatus,
    AssignTeam,
    AssignPermission,
    Refresh,

    // Edit modal
    Unlock,
    NextField,
    PrevField,
    TypeChar(char),
    Backspace,
    Save,
    Cancel,

    // Confirmation
    ConfirmYes,
    ConfirmNo,

    // General
    Help,
    Quit,
    DismissNotification,

    None,
}

/// Maps a key press for the current popup. Typing only reaches the form while
/// the modal is unlocked.
pub fn map_key(key: KeyEvent, popup: Option<Popup>, phase: Option<EditPhase>) -> Action {
    match popup {
        Some(Popup::Edit) => map_edit_key(key, phase == Some(EditPhase::Editing)),
        Some(Popup::ConfirmCancel) => map_confirm_key(key),
        Some(Popup::Help) => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::Cancel,
            _ => Action::None,
        },
        None => map_list_key(key),
    }
}

fn map_list_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Action::NextTab,
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Action::PrevTab,
        KeyCode::Enter => Action::OpenDetail,
        KeyCode::Char('s') => Action::ToggleStatus,
        KeyCode::Char('t') => Action::AssignTeam,
        KeyCode::Char('p') => Action::AssignPermission,
        KeyCode::Char('r') => Action::Refresh,
        KeyCode::Char('?') => Action::Help,
        KeyCode::Char('x') | KeyCode::Esc => Action::DismissNotification,
        _ => Action::None,
    }
}

fn map_edit_key(key: KeyEvent, editing: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Action::Save,
            KeyCode::Char('c') => Action::Cancel,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Backspace if editing => Action::Backspace,
        KeyCode::Char(c) if editing => Action::TypeChar(c),
        KeyCode::Char('e') => Action::Unlock,
        KeyCode::Char('j') => Action::NextField,
        KeyCode::Char('k') => Action::PrevField,
        KeyCode::Char('q') => Action::Cancel,
        _ => Action::None,
    }
}

fn map_confirm_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmYes,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::ConfirmNo,
        _ => Action::None,
    }
}
