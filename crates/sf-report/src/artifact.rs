//! Writing the finished artifact to disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Write `bytes` to `dir/file_name`.
///
/// The bytes go to a temp file in `dir` first and are moved into place only
/// once fully written, so a failure never leaves a partial report behind.
/// An existing file with the same name is replaced.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the directory or temp file cannot be
/// created or written, and [`ReportError::Persist`] if the final rename
/// fails.
pub fn write_artifact(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ReportError> {
    let io_err = |source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(io_err)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    let target = dir.join(file_name);
    tmp.persist(&target).map_err(|e| ReportError::Persist {
        path: target.clone(),
        source: e.error,
    })?;
    tracing::info!(path = %target.display(), bytes = bytes.len(), "report written");
    Ok(target)
}
