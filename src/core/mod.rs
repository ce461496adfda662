pub mod error;
pub mod types;

pub use error::{FormsError, Result, StoreError, StoreResult};
pub use types::{AppId, FieldId, FormId, SubmissionId};
