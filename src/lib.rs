// ============================================================================
// Formstore Library
// ============================================================================

pub mod connection;
pub mod core;
pub mod merge;
pub mod model;
pub mod ops;
pub mod store;

// Re-export main types for convenience
pub use crate::connection::Connections;
pub use crate::core::{
    AppId, FieldId, FormId, FormsError, Result, StoreError, StoreResult, SubmissionId,
};
pub use crate::merge::merge_submission_fields;
pub use crate::model::{
    App, Field, FieldType, Form, FormFieldEntry, FormSubmission, Page, SubmissionStatus,
};
pub use crate::store::{AppFilter, DocumentStore, MemoryStore};

// Re-export operation entry points
pub use crate::ops::{
    CompleteSubmissionOptions, DeleteFormOptions, FieldDefinition, FormDefinition,
    GetFormAppsOptions, GetFormOptions, GetSubmissionOptions, IncomingField, PageDefinition,
    SubmissionPayload, SubmissionResult, SubmitFormDataOptions, UpdateFormOptions,
    complete_submission, delete_form, get_form, get_form_apps, get_submission, list_forms,
    reconcile_form_deletion, submit_form_data, update_form,
};
