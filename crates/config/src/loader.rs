//! Parse and load user configuration.

use std::{fs, path::Path};

use tracing::debug;

use crate::{Config, Error, excerpt_at};

/// Load and validate a RON config file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config, Error> {
    let source = fs::read_to_string(path).map_err(|e| Error::Read {
        path: Some(path.to_path_buf()),
        message: e.to_string(),
    })?;
    debug!(path = %path.display(), "loading config");
    parse(&source, Some(path))
}

/// Parse and validate a config from RON text.
pub fn load_from_str(source: &str) -> Result<Config, Error> {
    parse(source, None)
}

/// Shared parse + validate path, attaching `path` to any error.
fn parse(source: &str, path: Option<&Path>) -> Result<Config, Error> {
    let cfg: Config = ron::from_str(source).map_err(|e| {
        let line = e.span.start.line;
        let col = e.span.start.col;
        Error::Parse {
            path: path.map(Path::to_path_buf),
            line,
            col,
            message: e.code.to_string(),
            excerpt: excerpt_at(source, line, col),
        }
    })?;
    cfg.validate().map_err(|message| Error::Validation {
        path: path.map(Path::to_path_buf),
        message,
    })?;
    Ok(cfg)
}
