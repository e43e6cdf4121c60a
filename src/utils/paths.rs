use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Name of the per-student subdirectory holding dated set files
pub const SETS_DIR_NAME: &str = "sets";

/// Name of the generated per-student index file
pub const INDEX_FILENAME: &str = "index.json";

// Relative location of the students tree under the root, as literal segments
const STUDENTS_SEGMENTS: [&str; 2] = ["data", "students"];

/// Returns `<root>/data/students`
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use student_index::utils::students_dir;
///
/// assert_eq!(students_dir(Path::new("/srv")), PathBuf::from("/srv/data/students"));
/// ```
pub fn students_dir(root: &Path) -> PathBuf {
    STUDENTS_SEGMENTS.iter().fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// Returns `<student_dir>/index.json`
pub fn index_path(student_dir: &Path) -> PathBuf {
    student_dir.join(INDEX_FILENAME)
}

/// Builds the portable relative path stored in the index for one set file
///
/// Always uses `/` regardless of platform so the produced index is the same everywhere.
///
/// # Examples
///
/// ```
/// use student_index::utils::set_relative_path;
///
/// assert_eq!(
///     set_relative_path("A", "S1", "260114.json"),
///     "data/students/A/S1/sets/260114.json"
/// );
/// ```
pub fn set_relative_path(prefix: &str, student_id: &str, file_name: &str) -> String {
    let mut path = STUDENTS_SEGMENTS.join("/");
    for segment in [prefix, student_id, SETS_DIR_NAME, file_name] {
        path.push('/');
        path.push_str(segment);
    }
    path
}

/// Formats `path` relative to `root` for console output
///
/// Falls back to the full path when `path` is not under `root`.
pub fn display_relative(root: &Path, path: &Path) -> String {
    let shown = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    match shown {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
