//! Output file helpers shared by the image and stylesheet writers.
//!
//! Failures carry the sheet being written.

use std::fs;
use std::path::Path;

use crate::error::{Result, SpriteError};

/// Create the parent directory of `path`. A bare file name needs none.
pub fn ensure_parent(sheet: &str, path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| SpriteError::Write {
                sheet: sheet.to_string(),
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })
        }
        _ => Ok(()),
    }
}

/// Create the parent directory and write `contents`, replacing the file.
pub fn write_text(sheet: &str, path: &Path, contents: &str) -> Result<()> {
    ensure_parent(sheet, path)?;
    fs::write(path, contents).map_err(|e| SpriteError::Write {
        sheet: sheet.to_string(),
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
