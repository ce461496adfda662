use futures::future::join_all;
use tracing::{debug, warn};

use crate::connection::Connections;
use crate::core::{AppId, FormId, Result};
use crate::model::App;
use crate::store::{AppFilter, DocumentStore};

/// Removes `form_id` from the `forms` list of every app still referencing
/// it.
///
/// Apps are updated independently and concurrently. Every update is
/// attempted even when one fails; the first failure in query order is then
/// reported, leaving the remaining apps already cleaned. Returns the apps
/// that were actually rewritten.
pub async fn reconcile_form_deletion(
    connections: &Connections,
    form_id: FormId,
) -> Result<Vec<App>> {
    let store = connections.store();
    let referencing = store
        .find_apps(&AppFilter::references_form(form_id))
        .await?;
    if referencing.is_empty() {
        return Ok(Vec::new());
    }
    debug!(%form_id, app_count = referencing.len(), "clearing form references");

    let updates = referencing
        .iter()
        .map(|app| clear_form_reference(store, app.id, form_id));
    let outcomes = join_all(updates).await;

    let mut updated = Vec::new();
    for outcome in outcomes {
        if let Some(app) = outcome? {
            updated.push(app);
        }
    }
    Ok(updated)
}

/// Reloads one app and strips the form reference from its current state,
/// so edits made to the app since the membership query are not clobbered.
/// Returns the saved app, or `None` when no write happened.
async fn clear_form_reference(
    store: &dyn DocumentStore,
    app_id: AppId,
    form_id: FormId,
) -> Result<Option<App>> {
    let Some(mut app) = store.app_by_id(app_id).await? else {
        warn!(%app_id, "app vanished before reference cleanup, skipping");
        return Ok(None);
    };

    if !app.remove_form_ref(form_id) {
        // Another writer already cleared it. Nothing to do.
        return Ok(None);
    }

    let saved = store.save_app(app).await?;
    debug!(app_id = %saved.id, %form_id, "form reference removed");
    Ok(Some(saved))
}
