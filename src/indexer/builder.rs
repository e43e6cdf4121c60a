//! Per-student index builder.
//!
//! Turns the `*.json` files directly under a student's `sets` directory into a
//! ranked list of [`SetEntry`] values and wraps them in an [`IndexDocument`].
//! File contents are never read; only names matter.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use log::trace;

use crate::models::{IndexDocument, SetEntry, StudentInfo};
use crate::parsers::set_stem;
use crate::utils::{Clock, FileSystem, format_generated_at, set_relative_path};

/// Collect one entry per set file for `student`, in directory order
///
/// Only regular files directly under `sets` whose name ends in `.json`
/// (any case) are included. Subdirectories and other files are ignored.
///
/// # Errors
///
/// Returns an error if the `sets` directory cannot be listed.
pub fn collect_set_entries(fs: &dyn FileSystem, student: &StudentInfo) -> Result<Vec<SetEntry>> {
    let file_names = fs
        .list_files(&student.sets_dir)
        .with_context(|| format!("Failed to list set files for student {}", student.student_id))?;

    let entries = file_names
        .iter()
        .filter_map(|file_name| {
            let stem = set_stem(file_name)?;
            trace!("{}/{}: set file {}", student.prefix, student.student_id, file_name);
            let path = set_relative_path(&student.prefix, &student.student_id, file_name);
            Some(SetEntry::from_stem(stem, path))
        })
        .collect();

    Ok(entries)
}

/// Ranking comparator: newest dated entries first, then undated entries by stem descending
pub fn compare_entries(a: &SetEntry, b: &SetEntry) -> Ordering {
    match (&a.date, &b.date) {
        (Some(a_date), Some(b_date)) => b_date.cmp(a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.yy_mm_dd.cmp(&a.yy_mm_dd),
    }
}

/// Sort entries for display (newest first)
///
/// Dated entries always precede undated ones. Entries with equal keys keep their
/// relative input order.
pub fn rank_entries(mut entries: Vec<SetEntry>) -> Vec<SetEntry> {
    entries.sort_by(compare_entries);
    entries
}

/// Build the full index document for one student
///
/// `generatedAt` is taken from `clock` at the time of the call.
///
/// # Errors
///
/// Returns an error if the student's `sets` directory cannot be listed.
pub fn build_student_index(
    fs: &dyn FileSystem,
    clock: &dyn Clock,
    student: &StudentInfo,
) -> Result<IndexDocument> {
    let entries = rank_entries(collect_set_entries(fs, student)?);
    let generated_at = format_generated_at(clock.now());
    Ok(IndexDocument::new(student.student_id.clone(), generated_at, entries))
}
