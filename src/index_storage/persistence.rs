//! Index persistence: render and write `index.json`

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::IndexDocument;
use crate::utils::FileSystem;

/// Render a document as pretty-printed JSON (2-space indent) with one trailing newline
pub fn render_index(document: &IndexDocument) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(document).context("Failed to serialize index document")?;
    json.push('\n');
    Ok(json)
}

/// Write an index document to `path`, creating parent directories as needed
///
/// Any existing file is overwritten in place. There is no temp file or lock; the
/// tool is expected to be the only writer.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the file cannot be written.
pub fn write_index(fs: &dyn FileSystem, path: &Path, document: &IndexDocument) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs.create_dir_all(parent)?;
    }

    let json = render_index(document)?;
    fs.write_string(path, &json)
}

/// Load a previously written index document
pub fn load_index(fs: &dyn FileSystem, path: &Path) -> Result<IndexDocument> {
    let json = fs.read_to_string(path)?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse index file: {}", path.display()))
}
