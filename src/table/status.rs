use serde_json::{json, Value};

use crate::auth::AuthRoles;
use crate::client::{collection_path, ParametrizationsApi};
use crate::constants::{TITLE_SUCCESS_STATUS, TITLE_WARNING};
use crate::entities::Entity;
use crate::error::{AdminError, AdminResult};
use crate::feedback::{Loader, Notifier, Toast};
use crate::logging::{log_info, log_warn};

use super::ListRow;

/// Flips the row's status on the server.
///
/// Returns `Ok(true)` when the parent list must refetch. Transport failures are
/// handed to the notifier and yield `Ok(false)`; only a missing write role is an
/// error.
pub async fn toggle_status(
    api: &dyn ParametrizationsApi,
    notifier: &mut dyn Notifier,
    loader: &Loader,
    auth: &AuthRoles,
    entity: &dyn Entity,
    row: &ListRow,
) -> AdminResult<bool> {
    if !auth.has_parametrizations_writer() {
        return Err(AdminError::Unauthorized(
            "changing status requires the parametrizations writer role".to_string(),
        ));
    }

    let target = row.status.toggled();
    let path = entity.update_path(&row.uuid);
    log_info(&format!("PUT {} status={}", path, target));

    let _busy = loader.show();
    match api.put(&path, json!({ "status": target.as_str() })).await {
        Ok(envelope) => {
            if let Some(message) = envelope.warning() {
                notifier.add_toast(Toast::warning(TITLE_WARNING, message));
            }
            if envelope.has_data() {
                notifier.add_toast(Toast::success(
                    TITLE_SUCCESS_STATUS,
                    entity.status_message(target),
                ));
                return Ok(true);
            }
            Ok(false)
        }
        Err(e) => {
            notifier.handle_api_rejection(&e);
            Ok(false)
        }
    }
}

/// Loads the list screen for `entity`.
pub async fn fetch_rows(api: &dyn ParametrizationsApi, entity: &dyn Entity) -> AdminResult<Vec<ListRow>> {
    let envelope = api.get(&collection_path(entity.resource())).await?;

    let data = match envelope.data {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => {
            if let Some(message) = envelope.message {
                log_warn(&format!("List of {} rejected: {}", entity.resource(), message));
                return Err(AdminError::ApiError(message));
            }
            return Err(AdminError::UnexpectedResponse(format!(
                "no data for {}",
                entity.resource()
            )));
        }
        Some(other) => {
            return Err(AdminError::UnexpectedResponse(format!(
                "expected a list of {}, got {}",
                entity.resource(),
                other
            )))
        }
    };

    data.into_iter().map(|item| entity.list_row(item)).collect()
}
