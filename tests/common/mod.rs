//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Builder for creating test `data/students` trees on disk
pub struct StudentTreeBuilder {
    temp_dir: TempDir,
}

impl StudentTreeBuilder {
    /// Create a new builder with an empty root (no `data/students` yet)
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the root directory (the one containing `data/`)
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create an empty `data/students` directory
    pub fn with_students_dir(self) -> Self {
        fs::create_dir_all(students_dir(self.path())).expect("Failed to create students dir");
        self
    }

    /// Add a student with a `sets` directory holding the given file names
    pub fn with_student(self, prefix: &str, student_id: &str, set_files: &[&str]) -> Self {
        let sets_dir = student_dir(self.path(), prefix, student_id).join("sets");
        fs::create_dir_all(&sets_dir).expect("Failed to create sets dir");

        for name in set_files {
            fs::write(sets_dir.join(name), "{}").expect("Failed to write set file");
        }

        self
    }

    /// Add a student directory without a `sets` subdirectory
    pub fn with_student_without_sets(self, prefix: &str, student_id: &str) -> Self {
        fs::create_dir_all(student_dir(self.path(), prefix, student_id))
            .expect("Failed to create student dir");
        self
    }

    /// Write an arbitrary file relative to the root
    pub fn with_file(self, relative: &str, contents: &str) -> Self {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(path, contents).expect("Failed to write file");
        self
    }

    /// Create an arbitrary directory relative to the root
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path().join(relative)).expect("Failed to create dir");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for StudentTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn students_dir(root: &Path) -> PathBuf {
    root.join("data").join("students")
}

pub fn student_dir(root: &Path, prefix: &str, student_id: &str) -> PathBuf {
    students_dir(root).join(prefix).join(student_id)
}

pub fn index_file(root: &Path, prefix: &str, student_id: &str) -> PathBuf {
    student_dir(root, prefix, student_id).join("index.json")
}

/// Read and parse a written index as untyped JSON
pub fn read_index_json(root: &Path, prefix: &str, student_id: &str) -> Value {
    let text = fs::read_to_string(index_file(root, prefix, student_id))
        .expect("Failed to read index.json");
    serde_json::from_str(&text).expect("index.json is not valid JSON")
}

/// The `yyMMdd` stems of an index's `sets`, in order
pub fn set_stems(index: &Value) -> Vec<String> {
    index["sets"]
        .as_array()
        .expect("sets is not an array")
        .iter()
        .map(|entry| entry["yyMMdd"].as_str().expect("yyMMdd is not a string").to_string())
        .collect()
}

/// A tree with a few prefixes and students, some without `sets`
pub fn realistic_student_tree() -> TempDir {
    StudentTreeBuilder::new()
        .with_student("A", "S1", &["260114.json", "250101.json", "notadate.json"])
        .with_student("A", "S2", &["251105.json"])
        .with_student_without_sets("A", "S3")
        .with_student("B", "kim", &["240301.json", "240302.JSON", "draft.json", "readme.txt"])
        .with_student("B", "lee", &[])
        .build()
}
