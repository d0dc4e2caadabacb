use std::path::PathBuf;

use derive_builder::Builder;

/// Which metrics the caller asked for, plus the optional log destination.
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub lines: bool,
    #[builder(default)]
    pub words: bool,
    #[builder(default)]
    pub chars: bool,
    #[builder(default)]
    pub bytes: bool,
    #[builder(default)]
    pub spaces: bool,
    #[builder(default)]
    pub lowercase: bool,
    #[builder(default)]
    pub uppercase: bool,
    #[builder(default)]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// True when no metric flag was set at all.
    #[must_use]
    pub fn nothing_requested(&self) -> bool {
        !(self.lines
            || self.words
            || self.chars
            || self.bytes
            || self.spaces
            || self.lowercase
            || self.uppercase)
    }

    /// Applies the classic `wc` default: lines, words and bytes when the
    /// caller requested nothing.
    #[must_use]
    pub fn with_default_metrics(mut self) -> Self {
        if self.nothing_requested() {
            self.lines = true;
            self.words = true;
            self.bytes = true;
        }
        self
    }
}
