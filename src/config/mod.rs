pub mod cli;
pub mod toml_config;

pub use cli::{AddArgs, Cli, Command, ConvertArgs, NoteCommand, ServeArgs};
pub use toml_config::{AppConfig, NotesConfig, ServeConfig};
