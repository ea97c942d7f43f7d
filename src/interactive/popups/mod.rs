pub mod confirm;
pub mod edit;
pub mod help;

use ratatui::{Frame, layout::Rect};
use crate::interactive::app::{InteractiveApp, Popup};

/// Draw the active popup, if any. Draws on top of everything.
pub fn draw_popup(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(popup) = app.popup else { return };

    match popup {
        Popup::Edit => edit::draw(frame, area, app),
        Popup::ConfirmCancel => {
            edit::draw(frame, area, app);
            confirm::draw(frame, area, app);
        }
        Popup::Help => help::draw(frame, area, app),
    }
}
