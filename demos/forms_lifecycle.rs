//! Walkthrough of the forms lifecycle against the in-memory store.
//!
//! Covers the full loop:
//! - define a form and assign it to apps
//! - collect a submission, fill in an admin-only field, complete it
//! - delete the form and watch the app references get cleaned up
//!
//! Run with:
//!   cargo run --example forms_lifecycle

use std::sync::Arc;

use anyhow::Result;
use formstore::{
    App, CompleteSubmissionOptions, Connections, DeleteFormOptions, DocumentStore,
    FieldDefinition, FieldType, FormDefinition, GetFormAppsOptions, GetSubmissionOptions,
    IncomingField, MemoryStore, PageDefinition, SubmissionPayload, SubmitFormDataOptions,
    UpdateFormOptions, complete_submission, delete_form, get_form_apps, get_submission,
    submit_form_data, update_form,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formstore=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Formstore Lifecycle Demo ===\n");

    let store = Arc::new(MemoryStore::new());
    let connections = Connections::new(store.clone());

    println!("1) Define the 'site visit' form");
    let form = update_form(
        &connections,
        UpdateFormOptions {
            form: FormDefinition {
                id: None,
                name: "site visit".to_string(),
                pages: vec![PageDefinition {
                    name: "report".to_string(),
                    fields: vec![
                        FieldDefinition {
                            id: None,
                            name: "notes".to_string(),
                            field_type: FieldType::TextArea,
                            admin_only: false,
                        },
                        FieldDefinition {
                            id: None,
                            name: "reviewer verdict".to_string(),
                            field_type: FieldType::Text,
                            admin_only: true,
                        },
                    ],
                }],
            },
        },
    )
    .await?;
    let notes_field = form.pages[0].fields[0].id;
    let verdict_field = form.pages[0].fields[1].id;
    println!("   - form id: {}", form.id);

    println!("2) Assign the form to two apps");
    for name in ["inspections", "contractors"] {
        store
            .save_app(App {
                id: Uuid::new_v4(),
                name: name.to_string(),
                forms: vec![form.id],
            })
            .await?;
    }
    let apps = get_form_apps(
        &connections,
        GetFormAppsOptions {
            form_id: Some(form.id.to_string()),
        },
    )
    .await?;
    println!("   - {} apps now carry the form", apps.len());

    println!("3) Collect a submission from the field");
    let result = submit_form_data(
        &connections,
        SubmitFormDataOptions {
            submission: SubmissionPayload {
                submission_id: None,
                form_id: Some(form.id.to_string()),
                form_fields: vec![IncomingField {
                    field_id: notes_field.to_string(),
                    field_values: vec![serde_json::json!("roof access blocked, rescheduled")],
                }],
            },
            skip_validation: false,
        },
    )
    .await?;
    println!("   - submission id: {}", result.submission_id);

    println!("4) Reviewer fills the admin-only verdict and completes it");
    submit_form_data(
        &connections,
        SubmitFormDataOptions {
            submission: SubmissionPayload {
                submission_id: Some(result.submission_id.to_string()),
                form_id: None,
                form_fields: vec![IncomingField {
                    field_id: verdict_field.to_string(),
                    field_values: vec![serde_json::json!("approved")],
                }],
            },
            skip_validation: true,
        },
    )
    .await?;
    complete_submission(
        &connections,
        CompleteSubmissionOptions {
            submission_id: Some(result.submission_id.to_string()),
        },
    )
    .await?;
    let submission = get_submission(
        &connections,
        GetSubmissionOptions {
            submission_id: Some(result.submission_id.to_string()),
        },
    )
    .await?;
    println!("   - status: {:?}", submission.status);
    println!("   - verdict: {:?}", submission.form_fields[1].field_values);

    println!("5) Delete the form and reconcile app references");
    delete_form(
        &connections,
        DeleteFormOptions {
            form_id: Some(form.id.to_string()),
        },
    )
    .await?;
    let apps = get_form_apps(
        &connections,
        GetFormAppsOptions {
            form_id: Some(form.id.to_string()),
        },
    )
    .await?;
    println!("   - apps still referencing the form: {}", apps.len());

    println!("6) The submission still reads back against its snapshot");
    let submission = get_submission(
        &connections,
        GetSubmissionOptions {
            submission_id: Some(result.submission_id.to_string()),
        },
    )
    .await?;
    println!(
        "   - snapshot form name: {}",
        submission.form_submitted_against.name
    );

    connections.close().await?;
    println!("\nDone.");
    Ok(())
}
