pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{MarkdownOptions, PulldownRenderer};
pub use app::App;
pub use config::{AppConfig, Cli};
pub use core::convert::{output_path_for, Converter};
pub use core::input::{read_input, strip_bom, InputSource};
pub use core::note::{append_note, generate_note_path, note_path_under};
pub use domain::{AllowList, ConvertedOutput, MarkdownRenderer, NotePath, RawInput};
pub use utils::error::{MdNoteError, Result};
