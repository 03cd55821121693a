use crate::core::input::{read_file, read_from};
use crate::domain::{ConvertedOutput, MarkdownRenderer, RawInput};
use crate::utils::error::{MdNoteError, Result};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const OUTPUT_EXTENSION: &str = "html";

/// Sibling output path: the last extension becomes `.html`, or `.html` is
/// appended when there is none.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension(OUTPUT_EXTENSION)
}

pub struct Converter<R: MarkdownRenderer> {
    renderer: R,
}

impl<R: MarkdownRenderer> Converter<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn convert(&self, input: &RawInput) -> ConvertedOutput {
        self.renderer.convert(input)
    }

    /// Converts one file into its sibling `.html` and returns the output path.
    pub fn convert_file(&self, input: &Path) -> Result<PathBuf> {
        let output_path = output_path_for(input);
        let raw = read_file(input)?;
        let html = self.convert(&raw);

        std::fs::write(&output_path, html.as_bytes())
            .map_err(|e| MdNoteError::io("writing", &output_path, e))?;

        tracing::debug!("Converted {} -> {}", input.display(), output_path.display());
        Ok(output_path)
    }

    /// Converts every file in order and stops at the first failure. Outputs
    /// already written stay on disk and have been passed to `on_written`.
    pub fn convert_files<P, F>(&self, inputs: &[P], mut on_written: F) -> Result<Vec<PathBuf>>
    where
        P: AsRef<Path>,
        F: FnMut(&Path) -> Result<()>,
    {
        let mut outputs = Vec::with_capacity(inputs.len());
        for input in inputs {
            let output = self.convert_file(input.as_ref())?;
            on_written(&output)?;
            outputs.push(output);
        }
        tracing::info!("Converted {} file(s)", outputs.len());
        Ok(outputs)
    }

    /// Single-shot mode: the whole of `reader` rendered into `writer`.
    pub fn convert_stream<In: Read, Out: Write>(&self, reader: In, mut writer: Out) -> Result<()> {
        let raw = read_from(reader, "stdin")?;
        let html = self.convert(&raw);
        writer
            .write_all(html.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| MdNoteError::stream("writing to", "stdout", e))
    }
}
