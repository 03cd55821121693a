// Adapters: concrete implementations of the domain ports.

pub mod renderer;

pub use renderer::{MarkdownOptions, PulldownRenderer};
