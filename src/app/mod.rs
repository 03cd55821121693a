pub mod commands;

pub use commands::App;
