use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mdnote", version)]
#[command(about = "Convert Markdown to HTML and append to dated notes")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Print absolute file names")]
    pub absolute: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Work with dated notes
    Note {
        #[command(subcommand)]
        command: NoteCommand,
    },

    /// Convert Markdown files to sibling .html files, or stdin to stdout
    Convert(ConvertArgs),

    /// Answer HTTP requests for the listed file names
    Serve(ServeArgs),
}

#[derive(Debug, Clone, Subcommand)]
pub enum NoteCommand {
    /// Append stdin to today's note
    Add(AddArgs),
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Append to this file instead of the generated note path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Read Markdown from stdin and write HTML to stdout
    #[arg(short = 's', long = "stdin", conflicts_with = "files")]
    pub stdin: bool,

    /// Files to convert
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

impl ConvertArgs {
    /// With no files the command falls back to stdin.
    pub fn reads_stdin(&self) -> bool {
        self.stdin || self.files.is_empty()
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// File names to acknowledge
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
}
