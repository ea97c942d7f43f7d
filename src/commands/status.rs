use clap::ArgMatches;
use colored::*;

use crate::admin_error;
use crate::cli_context::CliContext;
use crate::entities::EntityKind;
use crate::error::{AdminError, AdminResult};
use crate::feedback::{ConsoleNotifier, Loader};
use crate::models::Status;
use crate::table::{fetch_rows, toggle_status};

pub async fn handle_status(kind: EntityKind, matches: &ArgMatches, target: Status) -> AdminResult<()> {
    let uuid = matches
        .get_one::<String>("uuid")
        .ok_or_else(|| admin_error!(InvalidInput, "UUID is required"))?;

    let mut context = CliContext::load();
    let client = context.verified_client()?;
    let auth = context.roles();
    let entity = kind.descriptor();

    let rows = fetch_rows(client.as_ref(), entity).await?;
    let row = rows
        .iter()
        .find(|r| r.uuid == *uuid)
        .ok_or_else(|| AdminError::InvalidInput(format!("No {} with uuid {}", kind, uuid)))?;

    if row.status == target {
        println!("{} is already {}", row.name.bold(), target.label().to_lowercase());
        return Ok(());
    }

    let mut notifier = ConsoleNotifier::new();
    let loader = Loader::new();
    let refetch = toggle_status(client.as_ref(), &mut notifier, &loader, &auth, entity, row).await?;

    if refetch {
        Ok(())
    } else {
        Err(AdminError::ApiError(format!("Status of {} was not changed", row.name)))
    }
}
