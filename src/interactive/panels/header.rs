use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::entities::EntityKind;
use crate::interactive::app::InteractiveApp;

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

pub fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width = area.width as usize;

    // Left: tabs
    let mut left = vec![Span::styled(
        " Parametrizações ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    for kind in EntityKind::ALL {
        let style = if kind == app.tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        left.push(Span::raw(" "));
        left.push(Span::styled(format!(" {} ", kind.title()), style));
    }

    // Right: loader and role
    let mut right_parts = Vec::new();
    if app.is_busy() {
        let frame_idx = (chrono::Local::now().timestamp_subsec_millis() / 250) as usize % SPINNER.len();
        right_parts.push(Span::styled(
            format!("{} carregando ", SPINNER[frame_idx]),
            Style::default().fg(Color::Yellow),
        ));
    }
    let role = if app.auth.has_parametrizations_writer() {
        Span::styled("escrita", Style::default().fg(Color::Green))
    } else {
        Span::styled("somente leitura", Style::default().fg(Color::DarkGray))
    };
    right_parts.push(role);
    right_parts.push(Span::raw(" "));

    let right_text_len: usize = right_parts.iter().map(|s| s.content.chars().count()).sum();
    let left_text_len: usize = left.iter().map(|s| s.content.chars().count()).sum();
    let pad = width.saturating_sub(left_text_len + right_text_len);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right_parts);

    let mut lines = vec![Line::from(spans)];
    if let Some(err) = &app.error_message {
        lines.push(Line::from(Span::styled(
            format!(" {}", err),
            Style::default().fg(Color::Red),
        )));
    }

    let header = Paragraph::new(lines).style(Style::default().bg(Color::Rgb(20, 22, 30)));
    frame.render_widget(header, area);
}
