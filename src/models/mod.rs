//! Data models for student set indexes.
//!
//! - [`SetEntry`] - One dated (or undated) set file as listed in an index
//! - [`IndexDocument`] - The `index.json` written for each student
//! - [`StudentInfo`] - A discovered student directory with a `sets` subdirectory
//! - [`RunSummary`] / [`RunOutcome`] - What a full run did
//!
//! Serialized field names match the on-disk JSON exactly (`schemaVersion`, `yyMMdd`, ...).

pub mod entry;
pub mod index;
pub mod student;
pub mod summary;

pub use entry::SetEntry;
pub use index::{IndexDocument, SCHEMA_VERSION};
pub use student::StudentInfo;
pub use summary::{RunOutcome, RunSummary, StudentReport};
