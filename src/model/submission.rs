use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{FieldId, FormId, FormsError, Result, SubmissionId};
use crate::model::form::Form;

/// Values captured for one field of a submission. `field_values` is a list
/// because several field kinds collect repeated entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormFieldEntry {
    pub field_id: FieldId,
    #[serde(default)]
    pub field_values: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Draft,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub id: SubmissionId,
    pub form_id: FormId,
    /// Snapshot of the form definition taken when the submission was first
    /// stored. Merging always runs against this copy, so later edits to the
    /// live form never reshape existing submissions.
    pub form_submitted_against: Form,
    pub form_fields: Vec<FormFieldEntry>,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FormSubmission {
    pub fn is_complete(&self) -> bool {
        self.status == SubmissionStatus::Complete
    }

    /// Marks a draft submission complete. The transition happens at most
    /// once per submission.
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<()> {
        if self.is_complete() {
            return Err(FormsError::conflict(format!(
                "submission {} is already complete",
                self.id
            )));
        }
        self.status = SubmissionStatus::Complete;
        self.updated_at = now;
        Ok(())
    }
}
