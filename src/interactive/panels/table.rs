use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::formatting::{convert_iso_date_to_pt_br, truncate};
use crate::interactive::app::InteractiveApp;
use crate::table::RowActions;

fn button(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    };
    Span::styled(format!("[{}]", label), style)
}

pub fn draw_table(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let entity = app.tab.descriptor();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", app.tab.title(), app.rows.len()))
        .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    if app.rows.is_empty() {
        let text = if app.is_busy() { "Carregando..." } else { "Nenhum registro" };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_height = area.height.saturating_sub(3) as usize;
    let scroll_offset = if app.selected_index >= inner_height {
        app.selected_index - inner_height + 1
    } else {
        0
    };
    let name_width = (area.width as usize).saturating_sub(50).max(10);

    let rows: Vec<Row> = app
        .rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(inner_height)
        .map(|(i, row)| {
            let actions = RowActions::for_row(entity, row, &app.auth);

            let toggle = if row.status.is_active() {
                Span::styled("◉ on ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ off", Style::default().fg(Color::DarkGray))
            };
            let toggle = if actions.status_toggle {
                toggle
            } else {
                Span::styled(toggle.content.clone(), Style::default().fg(Color::DarkGray))
            };

            let mut buttons = vec![button("detalhes", actions.detail)];
            if entity.supports_assignments() {
                buttons.push(Span::raw(" "));
                buttons.push(button("equipe", actions.assign_team));
                buttons.push(Span::raw(" "));
                buttons.push(button("permissões", actions.assign_permission));
            }

            let created = row
                .created_at
                .as_deref()
                .map(convert_iso_date_to_pt_br)
                .unwrap_or_else(|| "-".to_string());

            let style = if i == app.selected_index {
                Style::default()
                    .bg(Color::Rgb(30, 35, 50))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if row.is_terminal() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(Line::from(toggle)),
                Cell::from(truncate(&row.name, name_width)),
                Cell::from(created),
                Cell::from(Line::from(buttons)),
            ])
            .style(style)
        })
        .collect();

    let header = Row::new(vec!["Status", "Nome", "Criado em", "Ações"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(6),
        Constraint::Min(10),
        Constraint::Length(11),
        Constraint::Length(34),
    ];
    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}
