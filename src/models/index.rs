use serde::{Deserialize, Serialize};

use super::SetEntry;

/// Schema version written into every index document
pub const SCHEMA_VERSION: u32 = 1;

/// Contents of a student's `index.json`
///
/// Field order here is the field order in the written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDocument {
    pub schema_version: u32,
    pub student_id: String,
    /// ISO-8601 UTC with milliseconds, see [`crate::utils::format_generated_at`]
    pub generated_at: String,
    pub sets: Vec<SetEntry>,
}

impl IndexDocument {
    pub fn new(student_id: impl Into<String>, generated_at: String, sets: Vec<SetEntry>) -> Self {
        Self { schema_version: SCHEMA_VERSION, student_id: student_id.into(), generated_at, sets }
    }
}
