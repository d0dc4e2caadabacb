// crates/engine/src/lib.rs
//! Single-pass text statistics: lines, words, bytes, characters, spaces,
//! lowercase and uppercase letters, with an optional diagnostic log file.

pub mod config;
pub mod counter;
pub mod error;
pub mod logfile;
pub mod report;

pub use config::{Config, ConfigBuilder};
pub use counter::{Totals, run};
pub use error::{EngineError, Result};
