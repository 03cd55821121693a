pub use crate::domain::bom::strip_bom;
use crate::domain::RawInput;
use crate::utils::error::{MdNoteError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where input bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

pub fn read_input(source: &InputSource) -> Result<RawInput> {
    match source {
        InputSource::Stdin => read_stdin(),
        InputSource::File(path) => read_file(path),
    }
}

pub fn read_stdin() -> Result<RawInput> {
    read_from(std::io::stdin().lock(), "stdin")
}

/// Reads `reader` to the end. `name` identifies the stream in errors.
pub fn read_from<R: Read>(mut reader: R, name: &str) -> Result<RawInput> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| MdNoteError::stream("reading from", name, e))?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), name);
    Ok(RawInput::new(bytes))
}

pub fn read_file(path: &Path) -> Result<RawInput> {
    let bytes = std::fs::read(path).map_err(|e| MdNoteError::io("reading from", path, e))?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(RawInput::new(bytes))
}
