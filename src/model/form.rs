use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{FieldId, FormId};

/// Kinds of input a field can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    TextArea,
    Number,
    EmailAddress,
    Radio,
    Checkboxes,
    DateTime,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub field_type: FieldType,
    /// Admin-only fields are hidden from regular clients. Stored values for
    /// them survive submission updates made without admin rights.
    #[serde(default)]
    pub admin_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    pub fields: Vec<Field>,
}

/// A form definition: named pages, each holding an ordered list of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: FormId,
    pub name: String,
    pub pages: Vec<Page>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// All fields in definition order: page by page, top to bottom.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.pages.iter().flat_map(|page| page.fields.iter())
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields().find(|field| field.id == id)
    }

    pub fn contains_field(&self, id: FieldId) -> bool {
        self.field(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn field(name: &str) -> Field {
        Field {
            id: Uuid::new_v4(),
            name: name.to_string(),
            field_type: FieldType::Text,
            admin_only: false,
        }
    }

    fn two_page_form() -> Form {
        let now = Utc::now();
        Form {
            id: Uuid::new_v4(),
            name: "survey".to_string(),
            pages: vec![
                Page {
                    name: "page one".to_string(),
                    fields: vec![field("a"), field("b")],
                },
                Page {
                    name: "page two".to_string(),
                    fields: vec![field("c")],
                },
            ],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_fields_iterates_pages_in_definition_order() {
        let form = two_page_form();
        let names: Vec<_> = form.fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_field_lookup_spans_all_pages() {
        let form = two_page_form();
        let last = form.pages[1].fields[0].id;
        assert_eq!(form.field(last).unwrap().name, "c");
        assert!(!form.contains_field(Uuid::new_v4()));
    }
}
