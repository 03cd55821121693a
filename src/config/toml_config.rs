use crate::adapters::MarkdownOptions;
use crate::core::note::DEFAULT_NOTES_ROOT;
use crate::core::serve::DEFAULT_ADDRESS;
use crate::utils::error::{MdNoteError, Result};
use crate::utils::validation::{validate_path, validate_socket_addr, Validate};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Settings read from the optional `--config` file. Every key has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub notes: NotesConfig,
    pub serve: ServeConfig,
    pub markdown: MarkdownOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotesConfig {
    pub root: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_NOTES_ROOT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeConfig {
    pub address: String,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults when `path` is `None`, otherwise the parsed and validated file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| MdNoteError::io("reading config", path, e))?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parses the file contents as written; nothing is taken from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn notes_root(&self) -> &Path {
        Path::new(&self.notes.root)
    }

    pub fn serve_address(&self) -> Result<SocketAddr> {
        validate_socket_addr("serve.address", &self.serve.address)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("notes.root", &self.notes.root)?;
        self.serve_address()?;
        Ok(())
    }
}
