use std::io::BufRead;

use log::debug;

use crate::config::Config;
use crate::error::Result;
use crate::logfile::LogSink;
use crate::report;

/// The seven accumulated metrics of one pass over the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub lines: u64,
    pub words: u64,
    pub bytes: u64,
    pub chars: u64,
    pub spaces: u64,
    pub lowercase: u64,
    pub uppercase: u64,
}

impl Totals {
    /// Folds one line (terminator already stripped) into the totals.
    ///
    /// Bytes are the UTF-8 encoded length, chars the code point count, words
    /// the maximal whitespace-delimited non-empty substrings. Lowercase,
    /// uppercase and whitespace classification happens independently per
    /// code point.
    pub fn observe(&mut self, line: &str) {
        self.lines += 1;
        self.bytes += line.len() as u64;
        self.words += line.split_whitespace().count() as u64;
        for ch in line.chars() {
            self.chars += 1;
            if ch.is_lowercase() {
                self.lowercase += 1;
            }
            if ch.is_uppercase() {
                self.uppercase += 1;
            }
            if ch.is_whitespace() {
                self.spaces += 1;
            }
        }
    }
}

/// Runs one full pass: opens the log sink, scans `input` line by line and
/// returns the rendered report (no trailing newline).
///
/// Line terminators are not counted. A final line missing its terminator at
/// end-of-input still counts as one complete line. Read errors end the scan
/// the same way end-of-input does.
pub fn run<R: BufRead>(config: &Config, input: R) -> Result<String> {
    let mut log = LogSink::open(config.log_file.as_deref())?;
    log.wanted(config)?;

    let mut totals = Totals::default();
    for line in input.lines().map_while(std::io::Result::ok) {
        totals.observe(&line);
        log.line(totals.lines, &line)?;
    }
    debug!("scanned {} lines ({} bytes)", totals.lines, totals.bytes);

    log.totals(&totals)?;
    Ok(report::render(config, &totals))
}
