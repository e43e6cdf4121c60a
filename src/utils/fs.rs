//! Narrow filesystem capability used by the index builder
//!
//! The builder only needs to list directories, check existence, and read or write
//! small text files. [`OsFileSystem`] performs those operations on disk;
//! [`MemoryFileSystem`] keeps an in-memory tree so the whole pipeline can run
//! without touching the real filesystem.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

/// Filesystem operations required to discover students and write their indexes
pub trait FileSystem {
    /// Returns true if anything (file or directory) exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`
    ///
    /// Symlinks are not followed. Order is whatever the backend yields.
    fn list_dirs(&self, path: &Path) -> Result<Vec<String>>;

    /// Names of the regular files directly inside `path`
    fn list_files(&self, path: &Path) -> Result<Vec<String>>;

    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Creates `path` and every missing ancestor
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Writes `contents` to `path`, replacing any existing file
    fn write_string(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Real filesystem backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    fn list_children(path: &Path, want_dirs: bool) -> Result<Vec<String>> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read directory: {}", path.display()))?;
        if !metadata.is_dir() {
            bail!("Failed to read directory: {} (not a directory)", path.display());
        }

        let mut names = Vec::new();

        // depth 1 only; WalkDir does not follow links unless asked to
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry =
                entry.with_context(|| format!("Failed to read directory: {}", path.display()))?;
            let file_type = entry.file_type();
            let matches = if want_dirs { file_type.is_dir() } else { file_type.is_file() };
            if matches {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }
}

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<String>> {
        Self::list_children(path, true)
    }

    fn list_files(&self, path: &Path) -> Result<Vec<String>> {
        Self::list_children(path, false)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

#[derive(Debug, Default)]
struct MemoryTree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl MemoryTree {
    fn insert_dir_all(&mut self, path: &Path) -> Result<()> {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            if self.files.contains_key(ancestor) {
                bail!("Not a directory: {}", ancestor.display());
            }
        }
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn require_dir(&self, path: &Path) -> Result<()> {
        if self.dirs.contains(path) {
            return Ok(());
        }
        if self.files.contains_key(path) {
            bail!("Failed to read directory: {} (not a directory)", path.display());
        }
        bail!("Failed to read directory: {} (no such directory)", path.display())
    }
}

/// In-memory filesystem for tests and benchmarks
///
/// Paths are compared literally, so callers should build them from the same root.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    tree: RefCell<MemoryTree>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory (and its ancestors)
    pub fn add_dir(&self, path: impl AsRef<Path>) -> Result<()> {
        self.tree.borrow_mut().insert_dir_all(path.as_ref())
    }

    /// Adds a file, creating its parent directories
    pub fn add_file(&self, path: impl AsRef<Path>, contents: &str) -> Result<()> {
        let path = path.as_ref();
        let mut tree = self.tree.borrow_mut();
        if let Some(parent) = path.parent() {
            tree.insert_dir_all(parent)?;
        }
        if tree.dirs.contains(path) {
            bail!("Is a directory: {}", path.display());
        }
        tree.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    /// Returns the contents of a file, if present
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.tree.borrow().files.get(path.as_ref()).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.tree.borrow().files.len()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        let tree = self.tree.borrow();
        tree.dirs.contains(path) || tree.files.contains_key(path)
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<String>> {
        let tree = self.tree.borrow();
        tree.require_dir(path)?;
        Ok(tree
            .dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn list_files(&self, path: &Path) -> Result<Vec<String>> {
        let tree = self.tree.borrow();
        tree.require_dir(path)?;
        Ok(tree
            .files
            .keys()
            .filter(|file| file.parent() == Some(path))
            .filter_map(|file| file.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.tree
            .borrow()
            .files
            .get(path)
            .cloned()
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.tree
            .borrow_mut()
            .insert_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    fn write_string(&self, path: &Path, contents: &str) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        if tree.dirs.contains(path) {
            bail!("Failed to write file: {} (is a directory)", path.display());
        }
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !tree.dirs.contains(parent)
        {
            bail!("Failed to write file: {} (parent directory missing)", path.display());
        }
        tree.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}
