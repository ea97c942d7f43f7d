use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::interactive::app::InteractiveApp;
use crate::interactive::layout::centered_popup;

const LIST_KEYS: &[(&str, &str)] = &[
    ("j/k ↑/↓", "Mover seleção"),
    ("Tab/←/→", "Trocar aba"),
    ("Enter", "Detalhes / editar"),
    ("s", "Ativar / inativar"),
    ("t", "Atribuir equipe"),
    ("p", "Atribuir permissões"),
    ("r", "Recarregar"),
    ("x", "Fechar notificação"),
    ("q", "Sair"),
];

const MODAL_KEYS: &[(&str, &str)] = &[
    ("e", "Alterar (desbloquear)"),
    ("Tab/S-Tab", "Próximo / anterior campo"),
    ("Espaço", "Alternar status"),
    ("Ctrl+S", "Salvar"),
    ("Esc", "Cancelar"),
];

pub fn draw(frame: &mut Frame, area: Rect, _app: &InteractiveApp) {
    let popup_area = centered_popup(60, 20, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Atalhos ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let header_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let section = |title: &'static str, keys: &'static [(&'static str, &'static str)]| {
        let mut lines = vec![Line::from(Span::styled(title, header_style))];
        lines.extend(keys.iter().map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:<12}", key), key_style),
                Span::styled(*desc, desc_style),
            ])
        }));
        lines
    };

    let mut lines = section("Lista", LIST_KEYS);
    lines.push(Line::from(""));
    lines.extend(section("Edição", MODAL_KEYS));

    frame.render_widget(Paragraph::new(lines), inner);
}
