//! Operations callers drive the library with. Each submodule covers one
//! workflow: form definition upkeep, deletion with reference cleanup, app
//! lookups, and submission handling.

pub mod delete_form;
pub mod form_apps;
pub mod forms;
pub mod reconcile;
pub mod submission;

pub use delete_form::{DeleteFormOptions, delete_form};
pub use form_apps::{GetFormAppsOptions, get_form_apps};
pub use forms::{
    FieldDefinition, FormDefinition, GetFormOptions, PageDefinition, UpdateFormOptions, get_form,
    list_forms, update_form,
};
pub use reconcile::reconcile_form_deletion;
pub use submission::{
    CompleteSubmissionOptions, GetSubmissionOptions, IncomingField, SubmissionPayload,
    SubmissionResult, SubmitFormDataOptions, complete_submission, get_submission,
    submit_form_data,
};
