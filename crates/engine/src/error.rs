use std::path::PathBuf;

use thiserror::Error;

/// The two fatal conditions of a run. End-of-input is normal termination
/// and never surfaces here.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("error creating file '{}': {source}", path.display())]
    LogCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing to log file: {source}")]
    LogWrite {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
