use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::models::StudentInfo;
use crate::utils::{FileSystem, SETS_DIR_NAME};

/// List the prefix directories directly under the students root
///
/// Order is whatever the filesystem yields; nothing is sorted.
///
/// # Errors
///
/// Returns an error if the students root cannot be listed.
pub fn list_prefixes(fs: &dyn FileSystem, students_dir: &Path) -> Result<Vec<String>> {
    fs.list_dirs(students_dir)
        .with_context(|| format!("Failed to list prefixes in {}", students_dir.display()))
}

/// Find the students under one prefix that have a `sets` directory
///
/// Student directories without `sets` are skipped silently; they are not counted
/// and any `index.json` they already hold is left untouched.
///
/// # Errors
///
/// Returns an error if the prefix directory cannot be listed.
pub fn discover_prefix_students(
    fs: &dyn FileSystem,
    students_dir: &Path,
    prefix: &str,
) -> Result<Vec<StudentInfo>> {
    let prefix_dir = students_dir.join(prefix);
    let student_ids = fs
        .list_dirs(&prefix_dir)
        .with_context(|| format!("Failed to list students in {}", prefix_dir.display()))?;

    let mut students = Vec::new();
    for student_id in student_ids {
        let student_dir = prefix_dir.join(&student_id);
        let sets_dir = student_dir.join(SETS_DIR_NAME);

        if !fs.exists(&sets_dir) {
            debug!("Skipping {}/{}: no {} directory", prefix, student_id, SETS_DIR_NAME);
            continue;
        }

        students.push(StudentInfo { prefix: prefix.to_string(), student_id, student_dir, sets_dir });
    }

    debug!("Prefix {}: {} student(s) with sets", prefix, students.len());
    Ok(students)
}

/// Discover every student with a `sets` directory under `students_dir`
///
/// Returns an empty Vec if the students root doesn't exist (not an error).
pub fn discover_students(fs: &dyn FileSystem, students_dir: &Path) -> Result<Vec<StudentInfo>> {
    if !fs.exists(students_dir) {
        return Ok(Vec::new());
    }

    let mut students = Vec::new();
    for prefix in list_prefixes(fs, students_dir)? {
        students.extend(discover_prefix_students(fs, students_dir, &prefix)?);
    }
    Ok(students)
}
