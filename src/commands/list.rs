use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::entities::EntityKind;
use crate::error::{AdminResult, ErrorContext};
use crate::formatting::print_rows;
use crate::table::fetch_rows;

pub async fn handle_list(kind: EntityKind, _matches: &ArgMatches) -> AdminResult<()> {
    let mut context = CliContext::load();
    let client = context.verified_client()?;
    let entity = kind.descriptor();

    let rows = fetch_rows(client.as_ref(), entity)
        .await
        .with_context(|| format!("Failed to list {}", kind))?;

    if rows.is_empty() {
        println!("No {} found.", kind);
    } else {
        println!("Found {} {}:", rows.len(), kind);
        print_rows(entity, &rows, &context.roles());
    }

    Ok(())
}
