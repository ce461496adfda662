#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use formstore::{
    App, AppFilter, AppId, DocumentStore, FieldDefinition, FieldType, Form, FormDefinition,
    FormId, FormSubmission, MemoryStore, PageDefinition, StoreError, StoreResult, SubmissionId,
    UpdateFormOptions,
};
use uuid::Uuid;

pub fn field_def(name: &str, admin_only: bool) -> FieldDefinition {
    FieldDefinition {
        id: None,
        name: name.to_string(),
        field_type: FieldType::Text,
        admin_only,
    }
}

pub fn single_page_form(name: &str, fields: Vec<FieldDefinition>) -> UpdateFormOptions {
    UpdateFormOptions {
        form: FormDefinition {
            id: None,
            name: name.to_string(),
            pages: vec![PageDefinition {
                name: "page 1".to_string(),
                fields,
            }],
        },
    }
}

pub fn app_named(name: &str, forms: Vec<FormId>) -> App {
    App {
        id: Uuid::new_v4(),
        name: name.to_string(),
        forms,
    }
}

/// Store wrapper that rejects `save_app` for one designated app while armed.
/// Everything else passes straight through to the in-memory store, which
/// stays reachable via `inner` for seeding and inspection.
pub struct FlakyStore {
    inner: MemoryStore,
    fail_app: AppId,
    armed: AtomicBool,
}

impl FlakyStore {
    pub fn failing_app_save(fail_app: AppId) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_app,
            armed: AtomicBool::new(true),
        }
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn form_by_id(&self, id: FormId) -> StoreResult<Option<Form>> {
        self.inner.form_by_id(id).await
    }

    async fn list_forms(&self) -> StoreResult<Vec<Form>> {
        self.inner.list_forms().await
    }

    async fn save_form(&self, form: Form) -> StoreResult<Form> {
        self.inner.save_form(form).await
    }

    async fn remove_form(&self, id: FormId) -> StoreResult<Option<Form>> {
        self.inner.remove_form(id).await
    }

    async fn app_by_id(&self, id: AppId) -> StoreResult<Option<App>> {
        self.inner.app_by_id(id).await
    }

    async fn find_apps(&self, filter: &AppFilter) -> StoreResult<Vec<App>> {
        self.inner.find_apps(filter).await
    }

    async fn save_app(&self, app: App) -> StoreResult<App> {
        if self.armed.load(Ordering::SeqCst) && app.id == self.fail_app {
            return Err(StoreError::Operation("injected write failure".to_string()));
        }
        self.inner.save_app(app).await
    }

    async fn submission_by_id(&self, id: SubmissionId) -> StoreResult<Option<FormSubmission>> {
        self.inner.submission_by_id(id).await
    }

    async fn save_submission(&self, submission: FormSubmission) -> StoreResult<FormSubmission> {
        self.inner.save_submission(submission).await
    }
}
