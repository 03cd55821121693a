use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdNoteError {
    // The OS error is reached through `source()`, so it stays out of the message.
    #[error("{operation} {path}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("TOML parsing error")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, MdNoteError>;

impl MdNoteError {
    /// Wraps an I/O failure with the operation that failed and the path involved.
    pub fn io(operation: &'static str, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    /// Same as [`MdNoteError::io`] for the standard streams.
    pub fn stream(operation: &'static str, stream: &str, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: stream.to_string(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io { .. } => 1,
            Self::TomlParse(_) | Self::InvalidConfigValue { .. } => 2,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
