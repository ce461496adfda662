//! Merging of incoming submission values with stored ones.
//!
//! The merge always runs against the form snapshot a submission was
//! collected with, never the live definition. Output carries exactly one
//! entry per snapshot field, in definition order, so readers can walk it
//! alongside the snapshot without index juggling.

use std::collections::HashMap;

use crate::core::{FieldId, FormsError, Result};
use crate::model::{Form, FormFieldEntry};

/// Combines `incoming` values with the `prior` stored ones under `form`.
///
/// For each field of `form`, in definition order:
/// - admin-only fields ignore the caller entirely unless
///   `can_edit_admin_fields` is set; the stored value (or nothing) is kept
/// - otherwise an incoming entry wins, even an explicitly empty one
/// - a field with neither incoming nor stored values gets an empty entry
///   rather than being dropped
///
/// Incoming entries naming a field that is not part of `form` fail the
/// whole merge with `UnknownField`; nothing is partially applied.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use formstore::{merge_submission_fields, Field, FieldType, Form, FormFieldEntry, Page};
/// use uuid::Uuid;
///
/// # fn main() -> Result<(), formstore::FormsError> {
/// let comment = Field {
///     id: Uuid::new_v4(),
///     name: "comment".to_string(),
///     field_type: FieldType::Text,
///     admin_only: false,
/// };
/// let now = Utc::now();
/// let form = Form {
///     id: Uuid::new_v4(),
///     name: "feedback".to_string(),
///     pages: vec![Page { name: "main".to_string(), fields: vec![comment.clone()] }],
///     created_at: now,
///     updated_at: now,
/// };
///
/// let incoming = vec![FormFieldEntry {
///     field_id: comment.id,
///     field_values: vec![serde_json::json!("hello")],
/// }];
/// let merged = merge_submission_fields(&form, None, &incoming, false)?;
///
/// assert_eq!(merged.len(), 1);
/// assert_eq!(merged[0].field_values, vec![serde_json::json!("hello")]);
/// # Ok(())
/// # }
/// ```
pub fn merge_submission_fields(
    form: &Form,
    prior: Option<&[FormFieldEntry]>,
    incoming: &[FormFieldEntry],
    can_edit_admin_fields: bool,
) -> Result<Vec<FormFieldEntry>> {
    let mut supplied: HashMap<FieldId, &FormFieldEntry> = HashMap::with_capacity(incoming.len());
    for entry in incoming {
        if !form.contains_field(entry.field_id) {
            return Err(FormsError::UnknownField(entry.field_id));
        }
        // Duplicate entries for one field: the last occurrence wins.
        supplied.insert(entry.field_id, entry);
    }

    let stored: HashMap<FieldId, &FormFieldEntry> = prior
        .unwrap_or_default()
        .iter()
        .map(|entry| (entry.field_id, entry))
        .collect();

    let merged = form
        .fields()
        .map(|field| {
            let chosen = if field.admin_only && !can_edit_admin_fields {
                stored.get(&field.id)
            } else {
                supplied.get(&field.id).or_else(|| stored.get(&field.id))
            };
            FormFieldEntry {
                field_id: field.id,
                field_values: chosen.map(|entry| entry.field_values.clone()).unwrap_or_default(),
            }
        })
        .collect();

    Ok(merged)
}
