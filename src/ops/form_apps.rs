use serde::Deserialize;

use crate::connection::Connections;
use crate::core::Result;
use crate::core::types::require_id;
use crate::model::App;
use crate::store::AppFilter;

#[derive(Debug, Clone, Deserialize)]
pub struct GetFormAppsOptions {
    pub form_id: Option<String>,
}

/// Lists the apps whose `forms` list contains the given form. A form id
/// nothing references is not an error; it simply matches no apps.
pub async fn get_form_apps(
    connections: &Connections,
    options: GetFormAppsOptions,
) -> Result<Vec<App>> {
    let form_id = require_id(options.form_id.as_deref(), "form_id")?;
    let apps = connections
        .store()
        .find_apps(&AppFilter::references_form(form_id))
        .await?;
    Ok(apps)
}
