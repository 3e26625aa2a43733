//! Writing the generated document.

use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Ensures the output file is safe to write to.
///
/// # Arguments
/// * `output_path` - Target file path for the generated document
/// * `force` - Whether to overwrite an existing file
///
/// # Errors
/// * `Error::OutputFileExistsError` if the file exists and force is false
pub fn get_output_file<P: AsRef<Path>>(output_path: P, force: bool) -> Result<PathBuf> {
    let output_path = output_path.as_ref();
    if output_path.exists() && !force {
        return Err(Error::OutputFileExistsError {
            output_path: output_path.display().to_string(),
        });
    }
    Ok(output_path.to_path_buf())
}

/// Writes `content` to `dest_path` as UTF-8, creating parent directories.
///
/// Relative paths are resolved against the current working directory.
pub fn write_document<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let abs_path = if dest_path.is_absolute() {
        dest_path.to_path_buf()
    } else {
        std::env::current_dir().map_err(Error::IoError)?.join(dest_path)
    };

    if let Some(parent) = abs_path.parent() {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    debug!("Writing {} bytes to '{}'.", content.len(), abs_path.display());
    std::fs::write(abs_path, content).map_err(Error::IoError)
}
