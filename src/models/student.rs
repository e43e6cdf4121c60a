use std::path::PathBuf;

/// A student directory that contains a `sets` subdirectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentInfo {
    pub prefix: String,
    pub student_id: String,
    pub student_dir: PathBuf,
    pub sets_dir: PathBuf,
}
