#![warn(missing_docs)]

//! Shared logging helpers, CLI argument definitions, and tracing utilities for the
//! volmode workspace.

use std::{env, io};

use clap::Args;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logging controls for CLI apps.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    /// e.g. "volmode_engine=trace,sinklist=debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}

impl LogArgs {
    /// The filter spec these flags select, see [`compute_spec`].
    pub fn spec(&self) -> String {
        compute_spec(
            self.trace,
            self.debug,
            self.log_level.as_deref(),
            self.log_filter.as_deref(),
        )
    }
}

/// Level applied to our crates when no flag or `RUST_LOG` says otherwise.
pub const DEFAULT_LEVEL: &str = "warn";

/// List of crate targets that constitute "our" logs.
pub fn our_crates() -> &'static [&'static str] {
    &["volmode", "volmode_engine", "sinklist", "config", "logging"]
}

/// Build a filter directive string that sets the same `level` for all of our crates.
pub fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|t| format!("{}={}", t, lvl))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `RUST_LOG` env
/// - default to crate-scoped [`DEFAULT_LEVEL`], so one-shot commands stay quiet
pub fn compute_spec(
    trace: bool,
    debug: bool,
    log_level: Option<&str>,
    log_filter: Option<&str>,
) -> String {
    if let Some(spec) = log_filter {
        return spec.to_string();
    }
    if trace {
        return level_spec_for("trace");
    }
    if debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = log_level {
        return level_spec_for(lvl);
    }
    fallback_spec(env::var("RUST_LOG").ok())
}

/// The spec used when no flag is given: `RUST_LOG` if set, else [`DEFAULT_LEVEL`].
fn fallback_spec(rust_log: Option<String>) -> String {
    rust_log.unwrap_or_else(|| level_spec_for(DEFAULT_LEVEL))
}

/// Create an `EnvFilter` from a spec string.
pub fn env_filter_from_spec(spec: &str) -> EnvFilter {
    EnvFilter::new(spec)
}

/// Install the global subscriber: env filter plus compact fmt output on stderr.
///
/// Stdout is left for command output. Safe to call more than once; later calls are no-ops.
pub fn init(args: &LogArgs) {
    tracing_subscriber::registry()
        .with(env_filter_from_spec(&args.spec()))
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        assert_eq!(
            compute_spec(true, false, Some("info"), Some("sinklist=trace")),
            "sinklist=trace"
        );
    }

    #[test]
    fn flags_scope_to_our_crates() {
        let spec = compute_spec(false, true, None, None);
        assert!(spec.contains("volmode_engine=debug"));
        assert!(spec.contains("sinklist=debug"));
        assert_eq!(spec.split(',').count(), our_crates().len());
        assert_eq!(compute_spec(false, false, Some("INFO"), None), level_spec_for("info"));
    }

    #[test]
    fn fallback_is_rust_log_then_warn() {
        assert_eq!(fallback_spec(Some("sinklist=trace".into())), "sinklist=trace");
        let spec = fallback_spec(None);
        assert!(spec.contains("volmode=warn"));
        assert!(spec.contains("volmode_engine=warn"));
        assert!(!spec.contains("info"));
    }
}
