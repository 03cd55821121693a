// Value types and ports. No I/O happens here.

pub mod bom;
pub mod model;
pub mod ports;

pub use model::{AllowList, ConvertedOutput, NotePath, RawInput};
pub use ports::MarkdownRenderer;
