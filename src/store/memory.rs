use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{AppId, FormId, StoreResult, SubmissionId};
use crate::model::{App, Form, FormSubmission};
use crate::store::{AppFilter, DocumentStore};

/// Process-local document store. Serves as the reference implementation of
/// `DocumentStore` semantics and as the backend for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    forms: RwLock<HashMap<FormId, Form>>,
    apps: RwLock<HashMap<AppId, App>>,
    submissions: RwLock<HashMap<SubmissionId, FormSubmission>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn form_count(&self) -> usize {
        self.forms.read().await.len()
    }

    pub async fn app_count(&self) -> usize {
        self.apps.read().await.len()
    }

    pub async fn submission_count(&self) -> usize {
        self.submissions.read().await.len()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn form_by_id(&self, id: FormId) -> StoreResult<Option<Form>> {
        Ok(self.forms.read().await.get(&id).cloned())
    }

    async fn list_forms(&self) -> StoreResult<Vec<Form>> {
        let mut forms: Vec<_> = self.forms.read().await.values().cloned().collect();
        forms.sort_by(|left, right| {
            left.created_at
                .cmp(&right.created_at)
                .then_with(|| left.id.cmp(&right.id))
        });
        Ok(forms)
    }

    async fn save_form(&self, form: Form) -> StoreResult<Form> {
        self.forms.write().await.insert(form.id, form.clone());
        Ok(form)
    }

    async fn remove_form(&self, id: FormId) -> StoreResult<Option<Form>> {
        Ok(self.forms.write().await.remove(&id))
    }

    async fn app_by_id(&self, id: AppId) -> StoreResult<Option<App>> {
        Ok(self.apps.read().await.get(&id).cloned())
    }

    async fn find_apps(&self, filter: &AppFilter) -> StoreResult<Vec<App>> {
        let mut apps: Vec<_> = self
            .apps
            .read()
            .await
            .values()
            .filter(|app| filter.matches(app))
            .cloned()
            .collect();
        apps.sort_by(|left, right| left.id.cmp(&right.id));
        Ok(apps)
    }

    async fn save_app(&self, app: App) -> StoreResult<App> {
        self.apps.write().await.insert(app.id, app.clone());
        Ok(app)
    }

    async fn submission_by_id(&self, id: SubmissionId) -> StoreResult<Option<FormSubmission>> {
        Ok(self.submissions.read().await.get(&id).cloned())
    }

    async fn save_submission(&self, submission: FormSubmission) -> StoreResult<FormSubmission> {
        self.submissions
            .write()
            .await
            .insert(submission.id, submission.clone());
        Ok(submission)
    }
}
