//! Student index building
//!
//! # Error Handling Strategy
//!
//! The run is all-or-nothing in the sense that the first filesystem failure stops it:
//!
//! - **Expected absences**: A missing `data/students` directory yields
//!   [`RunOutcome::NothingToDo`]. Students without a `sets` directory are skipped
//!   silently and not counted.
//!
//! - **Odd file names**: A set file whose stem is not a `YYMMDD` date is not an error;
//!   it is listed undated and labelled by its stem.
//!
//! - **Filesystem failures**: Any listing or write error is returned immediately with
//!   context naming the path. Students already written stay written; later students
//!   are not attempted.

pub mod builder;
pub mod student_discovery;

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

pub use builder::{build_student_index, collect_set_entries, compare_entries, rank_entries};
pub use student_discovery::{discover_prefix_students, discover_students, list_prefixes};

use crate::index_storage::write_index;
use crate::models::{RunOutcome, RunSummary, StudentReport};
use crate::utils::{Clock, FileSystem, index_path, students_dir};

/// Options for a full index build
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Build every document but write nothing
    pub dry_run: bool,
}

/// Rebuild `index.json` for every student under `<root>/data/students`
///
/// Walks prefix and student directories in filesystem order, writing each
/// student's index before moving on to the next. `on_student` is called once per
/// processed student right after its index is written, so progress is visible even
/// if a later student fails.
///
/// # Errors
///
/// Returns the first filesystem error encountered while listing or writing.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use student_index::indexer::{BuildOptions, run_index_build};
/// use student_index::models::RunOutcome;
/// use student_index::utils::{MemoryFileSystem, SystemClock};
///
/// let fs = MemoryFileSystem::new();
/// fs.add_file("/r/data/students/A/S1/sets/260114.json", "{}")?;
///
/// let outcome =
///     run_index_build(&fs, &SystemClock, Path::new("/r"), BuildOptions::default(), |_| {})?;
/// match outcome {
///     RunOutcome::Completed(summary) => assert_eq!(summary.students_processed(), 1),
///     RunOutcome::NothingToDo => unreachable!(),
/// }
/// assert!(fs.file("/r/data/students/A/S1/index.json").is_some());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn run_index_build<F>(
    fs: &dyn FileSystem,
    clock: &dyn Clock,
    root: &Path,
    options: BuildOptions,
    mut on_student: F,
) -> Result<RunOutcome>
where
    F: FnMut(&StudentReport),
{
    let students_dir = students_dir(root);
    if !fs.exists(&students_dir) {
        debug!("No students directory at {}", students_dir.display());
        return Ok(RunOutcome::NothingToDo);
    }

    let mut summary = RunSummary::default();

    for prefix in list_prefixes(fs, &students_dir)? {
        for student in discover_prefix_students(fs, &students_dir, &prefix)? {
            let document = build_student_index(fs, clock, &student)?;
            let out_path = index_path(&student.student_dir);

            if options.dry_run {
                debug!("Dry run: not writing {}", out_path.display());
            } else {
                write_index(fs, &out_path, &document).with_context(|| {
                    format!(
                        "Failed to write index for student {}/{}",
                        student.prefix, student.student_id
                    )
                })?;
            }

            let report = StudentReport {
                prefix: student.prefix,
                student_id: student.student_id,
                set_count: document.sets.len(),
                index_path: out_path,
            };
            on_student(&report);
            summary.students.push(report);
        }
    }

    Ok(RunOutcome::Completed(summary))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::index_storage::load_index;
    use crate::utils::{FixedClock, MemoryFileSystem};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap())
    }

    fn completed(outcome: RunOutcome) -> RunSummary {
        match outcome {
            RunOutcome::Completed(summary) => summary,
            RunOutcome::NothingToDo => panic!("expected a completed run"),
        }
    }

    #[test]
    fn test_missing_students_dir_is_nothing_to_do() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/r/data").unwrap();

        let outcome =
            run_index_build(&fs, &clock(), Path::new("/r"), BuildOptions::default(), |_| {})
                .unwrap();

        assert_eq!(outcome, RunOutcome::NothingToDo);
        assert_eq!(fs.file_count(), 0);
    }

    #[test]
    fn test_writes_one_index_per_student_with_sets() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/r/data/students/A/S1/sets/260114.json", "{}").unwrap();
        fs.add_file("/r/data/students/A/S1/sets/250101.json", "{}").unwrap();
        fs.add_file("/r/data/students/B/S2/sets/notadate.json", "{}").unwrap();
        fs.add_dir("/r/data/students/B/S3").unwrap();

        let mut seen = Vec::new();
        let summary = completed(
            run_index_build(&fs, &clock(), Path::new("/r"), BuildOptions::default(), |r| {
                seen.push((r.student_id.clone(), r.set_count))
            })
            .unwrap(),
        );

        assert_eq!(summary.students_processed(), 2);
        assert_eq!(summary.total_sets(), 3);
        assert_eq!(seen, vec![("S1".to_string(), 2), ("S2".to_string(), 1)]);

        let s1 = load_index(&fs, Path::new("/r/data/students/A/S1/index.json")).unwrap();
        assert_eq!(s1.student_id, "S1");
        assert_eq!(s1.generated_at, "2026-03-01T12:00:00.000Z");
        assert_eq!(s1.sets[0].yy_mm_dd, "260114");

        assert!(fs.file("/r/data/students/B/S3/index.json").is_none());
    }

    #[test]
    fn test_empty_sets_dir_still_gets_index() {
        let fs = MemoryFileSystem::new();
        fs.add_dir("/r/data/students/A/S1/sets").unwrap();

        let summary = completed(
            run_index_build(&fs, &clock(), Path::new("/r"), BuildOptions::default(), |_| {})
                .unwrap(),
        );

        assert_eq!(summary.students_processed(), 1);
        let doc = load_index(&fs, Path::new("/r/data/students/A/S1/index.json")).unwrap();
        assert!(doc.sets.is_empty());
    }

    #[test]
    fn test_stale_index_kept_when_sets_missing() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/r/data/students/A/S1/index.json", "stale").unwrap();

        let summary = completed(
            run_index_build(&fs, &clock(), Path::new("/r"), BuildOptions::default(), |_| {})
                .unwrap(),
        );

        assert_eq!(summary.students_processed(), 0);
        assert_eq!(fs.file("/r/data/students/A/S1/index.json").as_deref(), Some("stale"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/r/data/students/A/S1/sets/260114.json", "{}").unwrap();

        let summary = completed(
            run_index_build(&fs, &clock(), Path::new("/r"), BuildOptions { dry_run: true }, |_| {})
                .unwrap(),
        );

        assert_eq!(summary.students_processed(), 1);
        assert_eq!(summary.students[0].index_path, PathBuf::from("/r/data/students/A/S1/index.json"));
        assert!(fs.file("/r/data/students/A/S1/index.json").is_none());
    }

    #[test]
    fn test_failure_aborts_remaining_students() {
        let fs = MemoryFileSystem::new();
        // "sets" is a file, so listing it fails
        fs.add_file("/r/data/students/A/S1/sets", "").unwrap();

        let result =
            run_index_build(&fs, &clock(), Path::new("/r"), BuildOptions::default(), |_| {});

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("S1"));
    }

    #[test]
    fn test_rerun_produces_identical_sets() {
        let fs = MemoryFileSystem::new();
        for name in ["260114.json", "250101.json", "notadate.json", "x.JSON"] {
            fs.add_file(format!("/r/data/students/A/S1/sets/{}", name), "{}").unwrap();
        }
        let path = Path::new("/r/data/students/A/S1/index.json");

        run_index_build(&fs, &clock(), Path::new("/r"), BuildOptions::default(), |_| {}).unwrap();
        let first = load_index(&fs, path).unwrap();

        let later = FixedClock(Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap());
        run_index_build(&fs, &later, Path::new("/r"), BuildOptions::default(), |_| {}).unwrap();
        let second = load_index(&fs, path).unwrap();

        assert_eq!(first.sets, second.sets);
        assert_ne!(first.generated_at, second.generated_at);
    }
}
