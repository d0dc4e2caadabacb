use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::counter::Totals;
use crate::error::{EngineError, Result};

/// Optional diagnostic log target.
///
/// With no path configured every write is a no-op that cannot fail. The
/// handle is dropped (and therefore closed) on every exit path of the run.
/// Labels and ordering below are part of the log format contract; existing
/// consumers parse them verbatim.
#[derive(Debug, Default)]
pub struct LogSink {
    file: Option<File>,
}

impl LogSink {
    /// Opens (creating or truncating) the log file when a path is configured.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                let file = File::create(path).map_err(|source| EngineError::LogCreate {
                    path: path.to_path_buf(),
                    source,
                })?;
                Some(file)
            }
            None => None,
        };
        Ok(Self { file })
    }

    fn write(&mut self, entry: std::fmt::Arguments<'_>) -> Result<()> {
        if let Some(file) = self.file.as_mut() {
            file.write_fmt(entry)
                .map_err(|source| EngineError::LogWrite { source })?;
        }
        Ok(())
    }

    /// Records which metrics were requested, one fixed-label line each.
    pub fn wanted(&mut self, config: &Config) -> Result<()> {
        self.write(format_args!("wanted lines:     {}\n", config.lines))?;
        self.write(format_args!("wanted bytes:     {}\n", config.bytes))?;
        self.write(format_args!("wanted chars:     {}\n", config.chars))?;
        // The space before the colon is a long-standing quirk of the format.
        self.write(format_args!("wanted words :    {}\n", config.words))?;
        self.write(format_args!("wanted spaces:    {}\n", config.spaces))?;
        self.write(format_args!("wanted lowercase: {}\n", config.lowercase))?;
        self.write(format_args!("wanted uppercase: {}\n", config.uppercase))?;
        Ok(())
    }

    /// Records one input line together with its 1-based number, right-aligned
    /// in a 3-wide field.
    pub fn line(&mut self, number: u64, text: &str) -> Result<()> {
        self.write(format_args!("processing line {number:3}: {text}\n"))
    }

    /// Records the final totals for all seven metrics, whether or not the
    /// terminal report will show them.
    pub fn totals(&mut self, totals: &Totals) -> Result<()> {
        self.write(format_args!("lines found: {}\n", totals.lines))?;
        self.write(format_args!("words found: {}\n", totals.words))?;
        self.write(format_args!("bytes found: {}\n", totals.bytes))?;
        self.write(format_args!("chars found: {}\n", totals.chars))?;
        self.write(format_args!("spaces found: {}\n", totals.spaces))?;
        self.write(format_args!("lowercase found: {}\n", totals.lowercase))?;
        self.write(format_args!("uppercase found: {}\n", totals.uppercase))?;
        Ok(())
    }
}
