//! Student Index - Rebuild per-student set indexes from a directory tree
//!
//! Scans `<root>/data/students/<prefix>/<studentId>/sets/*.json` and writes a summary
//! `index.json` into every student directory that has a `sets` subdirectory. It supports:
//!
//! - Deriving calendar dates from `YYMMDD` file stems
//! - Ranking set files newest first, with undated files after dated ones
//! - Writing a fixed-shape JSON index per student
//! - Running against the real filesystem or an in-memory one, with an injectable clock
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use student_index::indexer::{BuildOptions, run_index_build};
//! use student_index::utils::{OsFileSystem, SystemClock};
//!
//! let outcome = run_index_build(
//!     &OsFileSystem,
//!     &SystemClock,
//!     Path::new("."),
//!     BuildOptions::default(),
//!     |report| println!("{}: {} sets", report.student_id, report.set_count),
//! )?;
//! println!("{:?}", outcome);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use index_storage::{load_index, write_index};
pub use indexer::{BuildOptions, rank_entries, run_index_build};
pub use models::{IndexDocument, RunOutcome, RunSummary, SetEntry};
pub use parsers::parse_set_date;
