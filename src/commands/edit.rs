use clap::ArgMatches;
use colored::*;

use crate::admin_error;
use crate::cli_context::CliContext;
use crate::entities::{Entity, EntityKind};
use crate::error::{AdminError, AdminResult};
use crate::feedback::{ConsoleNotifier, Loader};

use super::show::load_record;

/// Splits `field=value` pairs given with `--set`.
pub fn parse_assignments<'a, I>(raw: I) -> AdminResult<Vec<(String, String)>>
where
    I: IntoIterator<Item = &'a String>,
{
    raw.into_iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.trim().to_string(), v.to_string()))
                .filter(|(k, _)| !k.is_empty())
                .ok_or_else(|| AdminError::InvalidInput(format!("Expected field=value, got '{}'", pair)))
        })
        .collect()
}

fn field_names(entity: &dyn Entity) -> String {
    entity.fields().iter().map(|f| f.name).collect::<Vec<_>>().join(", ")
}

/// Runs the whole edit modal lifecycle without a screen.
pub async fn handle_edit(kind: EntityKind, matches: &ArgMatches) -> AdminResult<()> {
    let uuid = matches
        .get_one::<String>("uuid")
        .ok_or_else(|| admin_error!(InvalidInput, "UUID is required"))?;
    let assignments = match matches.get_many::<String>("set") {
        Some(values) => parse_assignments(values)?,
        None => Vec::new(),
    };
    if assignments.is_empty() {
        return Err(AdminError::InvalidInput(
            "No fields to update. Provide at least one --set field=value.".to_string(),
        ));
    }

    let mut context = CliContext::load();
    let client = context.verified_client()?;
    let auth = context.roles();
    let entity = kind.descriptor();

    let mut notifier = ConsoleNotifier::new();
    let loader = Loader::new();
    let mut controller = load_record(client.as_ref(), &mut notifier, kind, uuid).await?;

    if !controller.toggle_read_only(&auth) {
        controller.cancel();
        return Err(AdminError::Unauthorized(
            "editing requires the parametrizations writer role".to_string(),
        ));
    }

    for (name, value) in &assignments {
        if let Err(e) = controller.form_mut().set_value(name, value) {
            controller.cancel();
            return Err(match e {
                AdminError::InvalidInput(msg) => AdminError::InvalidInput(format!(
                    "{} (fields: {})",
                    msg,
                    field_names(entity)
                )),
                other => other,
            });
        }
    }

    match controller.submit(client.as_ref(), &mut notifier, &loader).await {
        Ok(Some(signal)) if signal.has_changes => {
            println!("{}: {}", "UUID".bold(), uuid.bright_blue());
            Ok(())
        }
        Ok(_) => {
            controller.cancel();
            Err(AdminError::ApiError(format!("{} {} was not updated", kind, uuid)))
        }
        Err(e) => {
            controller.cancel();
            Err(e)
        }
    }
}
