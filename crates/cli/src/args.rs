// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

/// Top-level CLI arguments parsed via clap.
///
/// The single-letter flags mirror the classic `wc` options; spaces, lowercase
/// and uppercase are the extra single-metric switches. The built-in clap
/// version flag is disabled because `--version` resolves at runtime (see
/// `version::resolve`).
#[derive(Parser, Debug)]
#[command(
    name = "wordcount",
    about = "Counts lines, words, bytes, characters, spaces and letter case from standard input",
    disable_version_flag = true
)]
pub struct Args {
    /// shows number of lines
    #[arg(short = 'l')]
    pub lines: bool,

    /// shows number of words
    #[arg(short = 'w')]
    pub words: bool,

    /// shows number of characters
    #[arg(short = 'm')]
    pub chars: bool,

    /// shows number of bytes
    #[arg(short = 'c')]
    pub bytes: bool,

    /// shows number of spaces
    #[arg(short = 's')]
    pub spaces: bool,

    /// shows number of lowercase characters
    #[arg(short = 'o')]
    pub lowercase: bool,

    /// shows number of uppercase characters
    #[arg(short = 'u')]
    pub uppercase: bool,

    /// writes log file
    #[arg(long = "log-file", value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// shows version
    #[arg(long)]
    pub version: bool,
}
