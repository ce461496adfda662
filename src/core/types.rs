use uuid::Uuid;

use crate::core::error::{FormsError, Result};

pub type FormId = Uuid;
pub type AppId = Uuid;
pub type FieldId = Uuid;
pub type SubmissionId = Uuid;

/// Parses a required identifier out of caller-supplied options.
///
/// Missing and malformed values are both reported as `InvalidArgument`,
/// naming the offending parameter.
pub(crate) fn require_id(raw: Option<&str>, name: &str) -> Result<Uuid> {
    let raw =
        raw.ok_or_else(|| FormsError::invalid_argument(format!("missing required {name}")))?;
    Uuid::parse_str(raw)
        .map_err(|_| FormsError::invalid_argument(format!("malformed {name}: '{raw}'")))
}
