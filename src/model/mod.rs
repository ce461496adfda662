pub mod app;
pub mod form;
pub mod submission;

pub use app::App;
pub use form::{Field, FieldType, Form, Page};
pub use submission::{FormFieldEntry, FormSubmission, SubmissionStatus};
