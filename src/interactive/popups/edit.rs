use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::edit::{EditController, EditPhase, FormView};
use crate::forms::{FieldKind, FormState};
use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;
use crate::models::Status;

/// Draw the edit modal: title row with the unlock button, then the form.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(editor) = &app.editor else { return };

    let field_count = editor.entity().fields().len() as u16;
    let popup_area = centered_popup(72, field_count * 2 + 8, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" ✎ {} ", editor.title()))
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut lines = vec![toggle_line(editor, app), Line::from("")];

    match editor.form().view() {
        FormView::Skeleton => lines.extend(skeleton_lines(inner.width)),
        FormView::Fields(state) => lines.extend(field_lines(editor, state, inner.width)),
    }

    lines.push(Line::from(""));
    lines.push(actions_line(editor));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn toggle_line<'a>(editor: &EditController, app: &InteractiveApp) -> Line<'a> {
    let enabled = editor.can_toggle(&app.auth);
    let style = if enabled {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let phase = match editor.phase() {
        EditPhase::Loading => "carregando...",
        EditPhase::Submitting => "salvando...",
        _ => "",
    };
    Line::from(vec![
        Span::styled(format!("[e] {}", editor.toggle_label()), style),
        Span::styled(format!("  {}", phase), Style::default().fg(Color::DarkGray)),
    ])
}

fn skeleton_lines<'a>(width: u16) -> Vec<Line<'a>> {
    let bar = Style::default().fg(Color::Rgb(60, 60, 70));
    let short = "▒".repeat((width as usize / 6).max(4));
    let long = "▒".repeat((width as usize).saturating_sub(4));
    vec![
        Line::from(Span::styled(short, bar)),
        Line::from(""),
        Line::from(Span::styled(long.clone(), bar)),
        Line::from(Span::styled(long, bar)),
    ]
}

fn field_lines<'a>(editor: &EditController, state: &FormState, width: u16) -> Vec<Line<'a>> {
    let form = editor.form();
    let label_width = 24usize;
    let value_width = (width as usize).saturating_sub(label_width + 4);

    state
        .fields()
        .iter()
        .enumerate()
        .flat_map(|(i, spec)| {
            let focused = i == form.focus_index();
            let value = state.value(spec.name);

            let shown = match spec.kind {
                FieldKind::Switch => {
                    let status: Status = value.parse().unwrap_or_default();
                    if status.is_active() { "◉ Ativo".to_string() } else { "○ Inativo".to_string() }
                }
                _ if value.is_empty() => spec.placeholder.to_string(),
                _ => value.to_string(),
            };
            let value_style = if value.is_empty() && spec.kind != FieldKind::Switch {
                Style::default().fg(Color::DarkGray)
            } else if form.is_read_only() {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };
            let value_style = if focused && !form.is_read_only() {
                value_style.bg(Color::Rgb(30, 35, 50)).add_modifier(Modifier::BOLD)
            } else {
                value_style
            };

            let marker = if focused { "›" } else { " " };
            let required = if spec.is_required() { "*" } else { " " };
            let mut out = vec![Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:>width$}{} ", spec.label, required, width = label_width - 2),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(crate::formatting::truncate(&shown, value_width), value_style),
            ])];

            if let Some(err) = form.visible_error(spec.name) {
                out.push(Line::from(Span::styled(
                    format!("{:>width$}{}", "", err, width = label_width + 1),
                    Style::default().fg(Color::Red),
                )));
            }
            out
        })
        .collect()
}

fn actions_line<'a>(editor: &EditController) -> Line<'a> {
    let form = editor.form();
    if !form.shows_actions() {
        return Line::from(Span::styled("Esc: Fechar", Style::default().fg(Color::DarkGray)));
    }

    let save_style = if form.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled("[Esc] Cancelar", Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled(format!("[Ctrl+S] {}", form.submit_label()), save_style),
    ])
}
