use crate::utils::error::{MdNoteError, Result};
use std::path::{Path, PathBuf};

/// Resolves the path the way it should be reported to the user: as given, or
/// made absolute against the working directory when `absolute` is set.
///
/// The file does not need to exist and symlinks are not resolved.
pub fn display_path(path: &Path, absolute: bool) -> Result<PathBuf> {
    if !absolute {
        return Ok(path.to_path_buf());
    }
    std::path::absolute(path).map_err(|e| MdNoteError::io("resolving", path, e))
}
