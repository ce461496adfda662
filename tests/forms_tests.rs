use std::sync::Arc;

use formstore::{
    Connections, FieldDefinition, FieldType, FormDefinition, FormsError, GetFormOptions,
    MemoryStore, PageDefinition, UpdateFormOptions, get_form, list_forms, update_form,
};
use uuid::Uuid;

#[path = "support.rs"]
mod support;

use support::{field_def, single_page_form};

#[tokio::test]
async fn new_definition_gets_ids_assigned() {
    let connections = Connections::new(Arc::new(MemoryStore::new()));

    let form = update_form(
        &connections,
        single_page_form(
            "visit report",
            vec![field_def("comment", false), field_def("review note", true)],
        ),
    )
    .await
    .unwrap();

    let first = form.pages[0].fields[0].id;
    let second = form.pages[0].fields[1].id;
    assert_ne!(first, second);
    assert_eq!(form.created_at, form.updated_at);
}

#[tokio::test]
async fn replacing_a_definition_keeps_ids_and_creation_time() {
    let store = Arc::new(MemoryStore::new());
    let connections = Connections::new(store.clone());

    let form = update_form(
        &connections,
        single_page_form("visit report", vec![field_def("comment", false)]),
    )
    .await
    .unwrap();
    let comment_id = form.pages[0].fields[0].id;

    let replaced = update_form(
        &connections,
        UpdateFormOptions {
            form: FormDefinition {
                id: Some(form.id.to_string()),
                name: "visit report v2".to_string(),
                pages: vec![PageDefinition {
                    name: "page 1".to_string(),
                    fields: vec![
                        FieldDefinition {
                            id: Some(comment_id.to_string()),
                            name: "comment".to_string(),
                            field_type: FieldType::Text,
                            admin_only: false,
                        },
                        field_def("follow up", false),
                    ],
                }],
            },
        },
    )
    .await
    .unwrap();

    assert_eq!(replaced.id, form.id);
    assert_eq!(replaced.name, "visit report v2");
    assert_eq!(replaced.pages[0].fields[0].id, comment_id);
    assert_ne!(replaced.pages[0].fields[1].id, comment_id);
    assert_eq!(replaced.created_at, form.created_at);
    assert!(replaced.updated_at >= form.updated_at);
    assert_eq!(store.form_count().await, 1);
}

#[tokio::test]
async fn malformed_definition_ids_are_rejected() {
    let connections = Connections::new(Arc::new(MemoryStore::new()));

    let err = update_form(
        &connections,
        UpdateFormOptions {
            form: FormDefinition {
                id: Some("nope".to_string()),
                name: "broken".to_string(),
                pages: vec![],
            },
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, FormsError::InvalidArgument(_)));

    let mut options = single_page_form("broken", vec![field_def("comment", false)]);
    options.form.pages[0].fields[0].id = Some("also nope".to_string());
    let err = update_form(&connections, options).await.unwrap_err();
    assert!(matches!(err, FormsError::InvalidArgument(_)));
}

#[tokio::test]
async fn get_form_finds_stored_definitions() {
    let connections = Connections::new(Arc::new(MemoryStore::new()));

    let form = update_form(
        &connections,
        single_page_form("visit report", vec![field_def("comment", false)]),
    )
    .await
    .unwrap();

    let fetched = get_form(
        &connections,
        GetFormOptions {
            form_id: Some(form.id.to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(fetched, form);

    let err = get_form(
        &connections,
        GetFormOptions {
            form_id: Some(Uuid::new_v4().to_string()),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, FormsError::NotFound(_)));

    let err = get_form(&connections, GetFormOptions { form_id: None })
        .await
        .unwrap_err();
    assert!(matches!(err, FormsError::InvalidArgument(_)));
}

#[tokio::test]
async fn list_forms_orders_by_creation() {
    let connections = Connections::new(Arc::new(MemoryStore::new()));

    let first = update_form(
        &connections,
        single_page_form("first", vec![field_def("a", false)]),
    )
    .await
    .unwrap();
    let second = update_form(
        &connections,
        single_page_form("second", vec![field_def("b", false)]),
    )
    .await
    .unwrap();

    let forms = list_forms(&connections).await.unwrap();
    assert_eq!(forms.len(), 2);
    assert!(forms.windows(2).all(|pair| pair[0].created_at <= pair[1].created_at));
    let ids: Vec<_> = forms.iter().map(|form| form.id).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
}
