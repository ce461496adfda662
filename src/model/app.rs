use serde::{Deserialize, Serialize};

use crate::core::{AppId, FormId};

/// A client app and the forms assigned to it. Apps are created and renamed
/// by a wider provisioning workflow; here they matter only as holders of
/// form references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub id: AppId,
    pub name: String,
    #[serde(default)]
    pub forms: Vec<FormId>,
}

impl App {
    pub fn references_form(&self, form_id: FormId) -> bool {
        self.forms.contains(&form_id)
    }

    /// Drops every occurrence of `form_id` from the assignment list, keeping
    /// the relative order of the rest. Returns whether anything was removed.
    pub fn remove_form_ref(&mut self, form_id: FormId) -> bool {
        let before = self.forms.len();
        self.forms.retain(|id| *id != form_id);
        self.forms.len() != before
    }
}
