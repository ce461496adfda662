use serde::Deserialize;
use tracing::{debug, info};

use crate::connection::Connections;
use crate::core::Result;
use crate::core::types::require_id;
use crate::model::Form;
use crate::ops::reconcile::reconcile_form_deletion;

#[derive(Debug, Clone, Deserialize)]
pub struct DeleteFormOptions {
    pub form_id: Option<String>,
}

/// Deletes a form, then removes the dangling references from every app
/// that still lists it.
///
/// There is no transaction across the two phases. A failed reference
/// cleanup surfaces the store error after the form is already gone; the
/// whole call can simply be repeated, since deleting an absent form is a
/// soft no-op that still runs the cleanup.
///
/// Returns the removed form, or `None` when nothing matched.
pub async fn delete_form(
    connections: &Connections,
    options: DeleteFormOptions,
) -> Result<Option<Form>> {
    let form_id = require_id(options.form_id.as_deref(), "form_id")?;

    let removed = connections.store().remove_form(form_id).await?;
    match &removed {
        Some(form) => info!(%form_id, name = %form.name, "form deleted"),
        None => debug!(%form_id, "no form matched delete"),
    }

    reconcile_form_deletion(connections, form_id).await?;

    // TODO: submissions pointing at a deleted form keep working off their
    // own snapshot; decide whether they should also be flagged for review
    // and add that pass here.

    Ok(removed)
}
