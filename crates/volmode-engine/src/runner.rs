//! Running the external audio-control program.

use std::{process::Command, sync::Arc};

use tracing::{debug, trace};

use crate::{Error, Result};

/// Executes the audio-control program and captures its output.
pub trait Runner {
    /// Run `program` with `args`, blocking until it exits, and return its stdout.
    fn run(&self, program: &str, args: &[String]) -> Result<String>;
}

impl<T: Runner + ?Sized> Runner for Arc<T> {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        (**self).run(program, args)
    }
}

/// Runs the program as a child process. There is no timeout: a hung tool hangs the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        debug!(program, ?args, "running audio tool");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| Error::ExternalTool {
                program: program.to_string(),
                source,
            })?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(Error::ToolFailed {
                program: program.to_string(),
                subcommand: args.first().cloned().unwrap_or_default(),
                code: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            debug!(program, stderr = %stderr, "audio tool wrote to stderr");
        }
        trace!(program, bytes = stdout.len(), "audio tool output captured");
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn captures_stdout() {
        let out = ProcessRunner
            .run("sh", &args(&["-c", "echo '>>> 0 sink(s) available.'"]))
            .unwrap();
        assert_eq!(out, ">>> 0 sink(s) available.\n");
    }

    #[test]
    fn missing_program_is_external_tool_error() {
        let err = ProcessRunner
            .run("volmode-no-such-program", &args(&["list-sinks"]))
            .unwrap_err();
        assert!(matches!(err, Error::ExternalTool { .. }), "{err:?}");
    }

    #[test]
    fn nonzero_exit_is_tool_failed() {
        let err = ProcessRunner
            .run("sh", &args(&["-c", "echo nope >&2; exit 3"]))
            .unwrap_err();
        match err {
            Error::ToolFailed {
                subcommand,
                code,
                stderr,
                ..
            } => {
                assert_eq!(subcommand, "-c");
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "nope");
            }
            other => panic!("{:?}", other),
        }
    }
}
