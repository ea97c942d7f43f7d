use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::app::{InteractiveApp, Popup};
use super::layout::app_layout;
use super::{notifications, panels, popups};

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let visible_toasts = app.toasts.len().min(3);
    let layout = app_layout(frame.size(), visible_toasts);

    panels::header::draw_header(frame, layout.header, app);
    panels::table::draw_table(frame, layout.main, app);
    notifications::draw(frame, layout.notifications, app);
    draw_footer(frame, layout.footer, app);

    popups::draw_popup(frame, frame.size(), app);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hints = match app.popup {
        Some(Popup::Edit) => match app.editor.as_ref().map(|e| e.form().is_read_only()) {
            Some(false) => "Tab: campo  Espaço: status  Ctrl+S: salvar  Esc: cancelar",
            _ => "e: alterar  Esc: fechar",
        },
        Some(Popup::ConfirmCancel) => "y: descartar  n: voltar",
        Some(Popup::Help) => "Esc: fechar",
        None => "j/k: mover  Tab: aba  Enter: detalhes  s: status  t: equipe  p: permissões  r: recarregar  ?: ajuda  q: sair",
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" {}", hints),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, area);
}
