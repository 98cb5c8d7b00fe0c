//! Top-level error for the volmode binary.

use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Everything that can end a `volmode` invocation unsuccessfully.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),

    /// A volume command failed.
    #[error(transparent)]
    Engine(#[from] volmode_engine::Error),

    /// Terminal I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON output could not be produced.
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for the binary.
pub type Result<T> = StdResult<T, Error>;
