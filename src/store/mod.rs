use async_trait::async_trait;

use crate::core::{AppId, FormId, StoreResult, SubmissionId};
use crate::model::{App, Form, FormSubmission};

pub mod memory;

pub use memory::MemoryStore;

/// Criteria for selecting apps. Membership of a form reference is the one
/// query the reconciliation flow needs; other lookups go by id.
#[derive(Debug, Clone, Default)]
pub struct AppFilter {
    pub references_form: Option<FormId>,
}

impl AppFilter {
    pub fn references_form(form_id: FormId) -> Self {
        Self {
            references_form: Some(form_id),
        }
    }

    pub fn matches(&self, app: &App) -> bool {
        match self.references_form {
            Some(form_id) => app.references_form(form_id),
            None => true,
        }
    }
}

/// Persistence boundary for forms, apps, and submissions.
///
/// Each method maps to a single store round trip. Coordination across
/// documents lives above this trait, so implementors stay thin wrappers
/// around their backend's CRUD calls.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn form_by_id(&self, id: FormId) -> StoreResult<Option<Form>>;
    async fn list_forms(&self) -> StoreResult<Vec<Form>>;
    /// Inserts or fully replaces a form keyed by its id.
    async fn save_form(&self, form: Form) -> StoreResult<Form>;
    /// Removes a form, returning the stored document when one matched.
    async fn remove_form(&self, id: FormId) -> StoreResult<Option<Form>>;

    async fn app_by_id(&self, id: AppId) -> StoreResult<Option<App>>;
    async fn find_apps(&self, filter: &AppFilter) -> StoreResult<Vec<App>>;
    async fn save_app(&self, app: App) -> StoreResult<App>;

    async fn submission_by_id(&self, id: SubmissionId) -> StoreResult<Option<FormSubmission>>;
    async fn save_submission(&self, submission: FormSubmission) -> StoreResult<FormSubmission>;

    /// Releases adapter resources. The in-memory store has none to release;
    /// network-backed adapters override this.
    async fn close(&self) -> StoreResult<()> {
        Ok(())
    }
}
