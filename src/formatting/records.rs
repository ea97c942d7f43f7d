use colored::*;

use crate::auth::AuthRoles;
use crate::entities::Entity;
use crate::forms::{FieldKind, FormValues};
use crate::models::Status;
use crate::table::{ListRow, RowActions};

use super::theme::{color_for, format_status, SemanticColor};
use super::utils::{convert_iso_date_to_pt_br, format_relative_time, truncate};

fn flag(enabled: bool, label: &str) -> ColoredString {
    if enabled {
        label.normal()
    } else {
        label.color(color_for(SemanticColor::Muted)).strikethrough()
    }
}

pub fn print_rows(entity: &dyn Entity, rows: &[ListRow], auth: &AuthRoles) {
    println!(
        "{:<12} {:<38} {:<36} {:<11} {:<10} {}",
        "Status".bold(),
        "Nome".bold(),
        "UUID".bold(),
        "Criado em".bold(),
        "",
        "Ações".bold()
    );
    println!("{}", "─".repeat(120).dimmed());

    for row in rows {
        let actions = RowActions::for_row(entity, row, auth);
        let created = row
            .created_at
            .as_deref()
            .map(convert_iso_date_to_pt_br)
            .unwrap_or_else(|| "-".to_string());
        let age = row
            .created_at
            .as_deref()
            .map(format_relative_time)
            .unwrap_or_default();

        let mut action_labels = vec![flag(actions.status_toggle, "status"), flag(actions.detail, "detalhes")];
        if entity.supports_assignments() {
            action_labels.push(flag(actions.assign_team, "equipe"));
            action_labels.push(flag(actions.assign_permission, "permissões"));
        }
        let action_text = action_labels
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        let name = if row.is_terminal() {
            truncate(&row.name, 38).color(color_for(SemanticColor::Resigned))
        } else {
            truncate(&row.name, 38).normal()
        };

        println!(
            "{:<12} {:<38} {:<36} {:<11} {:<10} {}",
            format_status(row.status),
            name,
            row.uuid.dimmed(),
            created,
            age.dimmed(),
            action_text
        );
    }
}

/// Read-only rendering of the edit modal.
pub fn print_record(entity: &dyn Entity, uuid: &str, values: &FormValues) {
    println!("\n{}", "═".repeat(80).blue());
    println!("{} {}", entity.edit_title().bold(), uuid.dimmed());
    println!("{}", "─".repeat(80).dimmed());

    for spec in entity.fields() {
        let value = values.get(spec.name);
        let shown = match spec.kind {
            FieldKind::Switch => match value.parse::<Status>() {
                Ok(status) => format_status(status).to_string(),
                Err(_) => value.to_string(),
            },
            FieldKind::Date if !value.is_empty() => convert_iso_date_to_pt_br(value),
            _ if value.is_empty() => "-".dimmed().to_string(),
            _ => value.to_string(),
        };
        println!("{:>24}: {}", spec.label.dimmed(), shown);
    }
}
