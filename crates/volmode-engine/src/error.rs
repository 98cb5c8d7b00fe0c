//! Engine error type and result alias.

use std::{io, result::Result as StdResult};

use sinklist::NodeKind;
use thiserror::Error;

/// Convenient result type for the engine crate.
pub type Result<T> = StdResult<T, Error>;

/// Unified error type for the volmode engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The audio-control program could not be started (missing binary, permissions).
    #[error("failed to start {program}: {source}")]
    ExternalTool {
        /// Program that was run.
        program: String,
        /// Underlying spawn error.
        source: io::Error,
    },

    /// The audio-control program ran but exited unsuccessfully.
    #[error("{program} {subcommand} failed (exit code {code:?}): {stderr}")]
    ToolFailed {
        /// Program that was run.
        program: String,
        /// First argument passed to the program.
        subcommand: String,
        /// Exit code, `None` when killed by a signal.
        code: Option<i32>,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// The tool's output did not parse.
    #[error("Listing error: {0}")]
    Listing(#[from] sinklist::Error),

    /// The tool listed no sinks at all.
    #[error("no default sink: no sinks are available")]
    NoDefaultSink,

    /// A previously seen node is no longer listed.
    #[error("{kind} {index} is no longer available")]
    NodeGone {
        /// Node kind.
        kind: NodeKind,
        /// Stale server index.
        index: u32,
    },
}
