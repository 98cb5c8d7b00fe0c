//! Binary entrypoint for `volmode`, a keyboard-driven volume controller.
use std::{
    io::{self, StdinLock, Stdout},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use logging::LogArgs;
use tracing::{debug, error};
use volmode_engine::{AudioBackend, Mixer, NodeKind, PacmdBackend, Percent, ProcessRunner, Session};

/// Unified error type for the binary.
mod error;
/// Terminal host: messages, key help and menus.
mod host;
mod interactive;

use crate::{error::Result, host::TerminalHost};

/// Host bound to the process's stdin and stdout.
type StdHost = TerminalHost<StdinLock<'static>, Stdout>;

#[derive(Parser, Debug)]
#[command(
    name = "volmode",
    about = "Keyboard-driven volume control for PulseAudio",
    version
)]
/// Command-line interface for the `volmode` binary.
struct Cli {
    /// Command to run.
    #[command(subcommand)]
    command: Command,

    /// Logging controls
    #[command(flatten)]
    log: LogArgs,

    /// Optional path to the config file (defaults to ~/.volmode/config.ron)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Override the audio-control program
    #[arg(long, value_name = "PROGRAM", global = true)]
    program: Option<String>,

    /// Override the volume step in percent
    #[arg(
        long,
        value_name = "PERCENT",
        global = true,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    step: Option<u8>,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Raise the default sink by one step.
    Up,
    /// Lower the default sink by one step.
    Down,
    /// Toggle mute on the default sink.
    Mute,
    /// Set the default sink to an absolute volume.
    Set {
        /// Volume in percent (0-100)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        percent: u8,
    },
    /// Show the default sink's volume.
    Status,
    /// Pick a playing application and adjust it interactively.
    Apps {
        /// Print the playing applications as JSON instead of showing a menu
        #[arg(long)]
        json: bool,
    },
    /// Set every playing application to full volume.
    Normalize,
    /// Adjust the default sink interactively, one key per line.
    Interactive,
    /// Load and validate the configuration then exit.
    Check {
        /// Dump the resolved configuration as JSON to stdout
        #[arg(long)]
        dump: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(&cli.log);
    debug!(command = ?cli.command, "starting");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load config, build the mixer, and dispatch the selected command.
fn run(cli: &Cli) -> Result<()> {
    let mut cfg = config::load(cli.config.as_deref())?;
    if let Some(program) = &cli.program {
        cfg.program = program.clone();
    }
    if let Some(step) = cli.step {
        cfg.step = step;
    }

    let backend = PacmdBackend::from_config(ProcessRunner, &cfg);
    let mixer = Mixer::from_config(backend, &cfg);
    let mut host: StdHost = TerminalHost::new(io::stdin().lock(), io::stdout());
    let mut session = Session::new();

    match &cli.command {
        Command::Up => {
            mixer.increase_volume(&mut host)?;
        }
        Command::Down => {
            mixer.decrease_volume(&mut host)?;
        }
        Command::Mute => {
            mixer.toggle_mute(&mut host)?;
        }
        Command::Set { percent } => {
            mixer.set_volume(&mut host, Percent::clamped(i32::from(*percent)))?;
        }
        Command::Status => {
            mixer.status(&mut host)?;
        }
        Command::Apps { json: true } => {
            let streams = mixer.backend().list(NodeKind::SinkInput)?;
            println!("{}", serde_json::to_string_pretty(&streams)?);
        }
        Command::Apps { json: false } => {
            if mixer.list_applications(&mut session, &mut host)?.is_some() {
                interactive::run(&mixer, &mut host, &mut session)?;
            }
        }
        Command::Normalize => {
            mixer.normalize_application_volumes(&mut host)?;
        }
        Command::Interactive => {
            mixer.enter_interactive(&mut session, &mut host, None)?;
            interactive::run(&mixer, &mut host, &mut session)?;
        }
        Command::Check { dump: true } => println!("{}", serde_json::to_string_pretty(&cfg)?),
        Command::Check { dump: false } => println!("OK"),
    }
    Ok(())
}
