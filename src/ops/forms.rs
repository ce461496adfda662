use chrono::Utc;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::connection::Connections;
use crate::core::types::require_id;
use crate::core::{FormsError, Result};
use crate::model::{Field, FieldType, Form, Page};

/// Replacement definition for a form. Identifiers are optional raw strings:
/// absent ones are assigned on save, present ones must parse.
#[derive(Debug, Clone, Deserialize)]
pub struct FormDefinition {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub pages: Vec<PageDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldDefinition {
    pub id: Option<String>,
    pub name: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub admin_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFormOptions {
    pub form: FormDefinition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetFormOptions {
    pub form_id: Option<String>,
}

fn parse_or_mint(raw: Option<&str>, name: &str) -> Result<Uuid> {
    match raw {
        Some(raw) => require_id(Some(raw), name),
        None => Ok(Uuid::new_v4()),
    }
}

/// Inserts or fully replaces a form definition.
///
/// Definitions are stored wholesale; there is no field-level patching.
/// Fields arriving without an id get one assigned, so a round-tripped
/// definition keeps stable field ids across edits. The creation timestamp
/// of an existing form survives replacement.
pub async fn update_form(connections: &Connections, options: UpdateFormOptions) -> Result<Form> {
    let definition = options.form;
    let form_id = parse_or_mint(definition.id.as_deref(), "form_id")?;

    let pages = definition
        .pages
        .into_iter()
        .map(|page| {
            let fields = page
                .fields
                .into_iter()
                .map(|field| {
                    Ok(Field {
                        id: parse_or_mint(field.id.as_deref(), "field_id")?,
                        name: field.name,
                        field_type: field.field_type,
                        admin_only: field.admin_only,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Page {
                name: page.name,
                fields,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let now = Utc::now();
    let existing = connections.store().form_by_id(form_id).await?;
    let created_at = existing.map(|form| form.created_at).unwrap_or(now);

    let form = Form {
        id: form_id,
        name: definition.name,
        pages,
        created_at,
        updated_at: now,
    };

    let saved = connections.store().save_form(form).await?;
    debug!(form_id = %saved.id, name = %saved.name, "form definition saved");
    Ok(saved)
}

pub async fn get_form(connections: &Connections, options: GetFormOptions) -> Result<Form> {
    let form_id = require_id(options.form_id.as_deref(), "form_id")?;
    connections
        .store()
        .form_by_id(form_id)
        .await?
        .ok_or_else(|| FormsError::not_found(format!("form {form_id}")))
}

pub async fn list_forms(connections: &Connections) -> Result<Vec<Form>> {
    Ok(connections.store().list_forms().await?)
}
