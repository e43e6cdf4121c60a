use serde::{Deserialize, Serialize};

use crate::parsers::parse_set_date;

/// One set file as it appears in a student's index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Raw file stem, usually but not necessarily a `YYMMDD` date
    #[serde(rename = "yyMMdd")]
    pub yy_mm_dd: String,
    /// `YYYY-MM-DD` when the stem parses as a date
    pub date: Option<String>,
    /// The date if there is one, otherwise the raw stem
    pub label: String,
    /// Forward-slash path relative to the root
    pub path: String,
}

impl SetEntry {
    /// Builds an entry from a set file stem and its relative path
    pub fn from_stem(stem: &str, path: String) -> Self {
        let date = parse_set_date(stem).map(|d| d.to_string());
        let label = date.clone().unwrap_or_else(|| stem.to_string());
        Self { yy_mm_dd: stem.to_string(), date, label, path }
    }
}
