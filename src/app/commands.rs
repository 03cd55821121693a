use crate::adapters::PulldownRenderer;
use crate::config::{AddArgs, AppConfig, ConvertArgs, ServeArgs};
use crate::core::convert::Converter;
use crate::core::input::read_from;
use crate::core::note::{append_note, note_path_under};
use crate::core::serve;
use crate::domain::{AllowList, NotePath};
use crate::utils::error::{MdNoteError, Result};
use crate::utils::paths::display_path;
use chrono::{DateTime, TimeZone};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Runs one command against the given streams. Resolved paths and HTML go to
/// `out`; nothing here terminates the process.
pub struct App<W: Write> {
    config: AppConfig,
    absolute: bool,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(config: AppConfig, absolute: bool, out: W) -> Self {
        Self {
            config,
            absolute,
            out,
        }
    }

    /// `note add`: appends everything read from `input` to the target note.
    pub fn note_add<R: Read, Tz: TimeZone>(
        &mut self,
        args: &AddArgs,
        input: R,
        now: &DateTime<Tz>,
    ) -> Result<PathBuf> {
        let target = match &args.output {
            Some(file) => NotePath::from_file(file),
            None => note_path_under(self.config.notes_root(), now),
        };

        let payload = read_from(input, "stdin")?;
        append_note(&target, payload.as_bytes())?;
        tracing::info!("Appended note to {}", target.file.display());

        report(&mut self.out, &target.file, self.absolute)?;
        Ok(target.file)
    }

    /// `convert`: stdin to `out`, or each file to its `.html` sibling.
    pub fn convert<R: Read>(&mut self, args: &ConvertArgs, input: R) -> Result<Vec<PathBuf>> {
        let converter = Converter::new(PulldownRenderer::new(self.config.markdown));

        if args.reads_stdin() {
            converter.convert_stream(input, &mut self.out)?;
            return Ok(Vec::new());
        }

        let out = &mut self.out;
        let absolute = self.absolute;
        converter.convert_files(&args.files, |path| report(out, path, absolute))
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

/// `serve`: blocks until the listener fails or the process is killed.
pub async fn serve(config: &AppConfig, args: &ServeArgs) -> Result<()> {
    let address = config.serve_address()?;
    let allow_list: AllowList = args.files.iter().cloned().collect();
    serve::serve(address, allow_list).await
}

fn report<W: Write>(out: &mut W, path: &Path, absolute: bool) -> Result<()> {
    let shown = display_path(path, absolute)?;
    writeln!(out, "{}", shown.display()).map_err(|e| MdNoteError::stream("writing to", "stdout", e))
}
