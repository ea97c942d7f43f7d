use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::feedback::ToastKind;
use crate::interactive::app::InteractiveApp;

pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    if app.toasts.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app.toasts.latest(3)
        .map(|t| {
            let (icon, color) = match t.kind {
                ToastKind::Success => ("✓", Color::Green),
                ToastKind::Warning => ("!", Color::Yellow),
                ToastKind::Error => ("✗", Color::Red),
                ToastKind::Info => ("ⓘ", Color::Blue),
            };
            Line::from(vec![
                Span::styled(format!(" {} ", icon), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(format!("{}: ", t.title), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(t.description.clone(), Style::default().fg(color)),
                Span::styled(format!("  [{}s]", t.remaining_secs()), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
