use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;

use crate::connection::Connections;
use crate::core::types::require_id;
use crate::core::{FormsError, Result, SubmissionId};
use crate::merge::merge_submission_fields;
use crate::model::{FormFieldEntry, FormSubmission, SubmissionStatus};

/// One field's values as supplied by a client.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingField {
    pub field_id: String,
    #[serde(default)]
    pub field_values: Vec<Value>,
}

/// Submission content as supplied by a client. With a `submission_id` this
/// updates an existing submission; without one it creates a new draft
/// against `form_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionPayload {
    pub submission_id: Option<String>,
    pub form_id: Option<String>,
    #[serde(default)]
    pub form_fields: Vec<IncomingField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitFormDataOptions {
    pub submission: SubmissionPayload,
    /// Set when the caller holds admin rights. Admin-only field values are
    /// accepted only with this flag; without it they are dropped and any
    /// stored values kept.
    #[serde(default)]
    pub skip_validation: bool,
}

/// Outcome of `submit_form_data`: the stored submission plus its id for
/// callers that only track the handle.
#[derive(Debug, Clone)]
pub struct SubmissionResult {
    pub submission_id: SubmissionId,
    pub form_submission: FormSubmission,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompleteSubmissionOptions {
    pub submission_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetSubmissionOptions {
    pub submission_id: Option<String>,
}

/// Creates or updates a submission from client-supplied field values.
///
/// Creation snapshots the current form definition into the submission;
/// updates merge against the snapshot taken back then, so a form edited or
/// deleted in the meantime does not disturb in-flight submissions. Either
/// way the stored `form_fields` come back normalized: one entry per
/// snapshot field, in definition order.
pub async fn submit_form_data(
    connections: &Connections,
    options: SubmitFormDataOptions,
) -> Result<SubmissionResult> {
    let payload = options.submission;
    let incoming = parse_incoming_fields(payload.form_fields)?;
    let now = Utc::now();

    let submission = if let Some(raw_id) = payload.submission_id.as_deref() {
        let submission_id = require_id(Some(raw_id), "submission_id")?;
        let mut existing = connections
            .store()
            .submission_by_id(submission_id)
            .await?
            .ok_or_else(|| FormsError::not_found(format!("submission {submission_id}")))?;

        let merged = merge_submission_fields(
            &existing.form_submitted_against,
            Some(existing.form_fields.as_slice()),
            &incoming,
            options.skip_validation,
        )?;
        existing.form_fields = merged;
        existing.updated_at = now;
        debug!(submission_id = %existing.id, "submission updated");
        existing
    } else {
        let form_id = require_id(payload.form_id.as_deref(), "form_id")?;
        let form = connections
            .store()
            .form_by_id(form_id)
            .await?
            .ok_or_else(|| FormsError::not_found(format!("form {form_id}")))?;

        let form_fields = merge_submission_fields(&form, None, &incoming, options.skip_validation)?;
        let submission = FormSubmission {
            id: Uuid::new_v4(),
            form_id,
            form_submitted_against: form,
            form_fields,
            status: SubmissionStatus::Draft,
            created_at: now,
            updated_at: now,
        };
        info!(submission_id = %submission.id, %form_id, "submission created");
        submission
    };

    let saved = connections.store().save_submission(submission).await?;
    Ok(SubmissionResult {
        submission_id: saved.id,
        form_submission: saved,
    })
}

/// Moves a draft submission to `complete`. The transition is one way and
/// happens at most once; a second attempt is a conflict.
pub async fn complete_submission(
    connections: &Connections,
    options: CompleteSubmissionOptions,
) -> Result<FormSubmission> {
    let submission_id = require_id(options.submission_id.as_deref(), "submission_id")?;
    let mut submission = connections
        .store()
        .submission_by_id(submission_id)
        .await?
        .ok_or_else(|| FormsError::not_found(format!("submission {submission_id}")))?;

    submission.complete(Utc::now())?;
    let saved = connections.store().save_submission(submission).await?;
    info!(%submission_id, "submission completed");
    Ok(saved)
}

pub async fn get_submission(
    connections: &Connections,
    options: GetSubmissionOptions,
) -> Result<FormSubmission> {
    let submission_id = require_id(options.submission_id.as_deref(), "submission_id")?;
    connections
        .store()
        .submission_by_id(submission_id)
        .await?
        .ok_or_else(|| FormsError::not_found(format!("submission {submission_id}")))
}

fn parse_incoming_fields(fields: Vec<IncomingField>) -> Result<Vec<FormFieldEntry>> {
    fields
        .into_iter()
        .map(|field| {
            let field_id = require_id(Some(&field.field_id), "field_id")?;
            Ok(FormFieldEntry {
                field_id,
                field_values: field.field_values,
            })
        })
        .collect()
}
