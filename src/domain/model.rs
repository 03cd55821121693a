use crate::domain::bom::bom_prefix_len;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Where a note lives on disk: a directory and a file inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotePath {
    pub directory: PathBuf,
    pub file: PathBuf,
}

impl NotePath {
    /// Wraps an explicitly chosen file. The directory is the file's parent, or
    /// the working directory for a bare file name.
    pub fn from_file(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let directory = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self { directory, file }
    }
}

/// Input bytes with any leading byte-order mark already removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawInput(Vec<u8>);

impl RawInput {
    /// Normalizes `bytes`, dropping leading BOM sequences.
    pub fn new(bytes: Vec<u8>) -> Self {
        let skip = bom_prefix_len(&bytes);
        let mut bytes = bytes;
        bytes.drain(..skip);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Rendered HTML, opaque to everything but the output sink.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertedOutput(pub Vec<u8>);

impl ConvertedOutput {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Names the static responder is allowed to acknowledge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: HashSet<String>,
}

impl AllowList {
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}
