use clap::ArgMatches;

use crate::admin_error;
use crate::cli_context::CliContext;
use crate::client::ParametrizationsApi;
use crate::edit::EditController;
use crate::entities::EntityKind;
use crate::error::AdminResult;
use crate::feedback::{ConsoleNotifier, Notifier};
use crate::formatting::print_record;

/// Opens the edit modal for `uuid` and fetches the record into it.
///
/// The returned controller is in the read-only viewing phase.
pub async fn load_record(
    api: &dyn ParametrizationsApi,
    notifier: &mut dyn Notifier,
    kind: EntityKind,
    uuid: &str,
) -> AdminResult<EditController> {
    let mut controller = EditController::new(kind.descriptor());
    if !controller.open(uuid) {
        return Err(admin_error!(InvalidInput, "UUID is required"));
    }
    if controller.fetch(api, notifier).await.is_some() {
        return Err(admin_error!(ApiError, "Could not load {} {}", kind, uuid));
    }
    Ok(controller)
}

pub async fn handle_show(kind: EntityKind, matches: &ArgMatches) -> AdminResult<()> {
    let uuid = matches
        .get_one::<String>("uuid")
        .ok_or_else(|| admin_error!(InvalidInput, "UUID is required"))?;

    let mut context = CliContext::load();
    let client = context.verified_client()?;
    let mut notifier = ConsoleNotifier::new();

    let mut controller = load_record(client.as_ref(), &mut notifier, kind, uuid).await?;
    if let Some(values) = controller.form().values() {
        print_record(kind.descriptor(), uuid, values);
    }
    controller.cancel();

    Ok(())
}
