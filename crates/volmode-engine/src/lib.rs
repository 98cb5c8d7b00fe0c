//! volmode engine
//!
//! The engine turns keyboard-level commands into audio-tool invocations:
//! - runs the audio-control program and captures its output ([`Runner`])
//! - observes and mutates sinks and sink inputs behind [`AudioBackend`]
//! - implements the command surface and the interactive session ([`Mixer`], [`Session`])
//! - talks to the user only through the [`Host`] collaborator
//!
//! Everything is synchronous. Each command re-lists state from the tool; nothing is cached.

mod backend;
mod error;
mod host;
mod mixer;
mod runner;
mod session;
pub mod test_support;
mod volume;

pub use backend::{AudioBackend, PacmdBackend};
pub use error::{Error, Result};
pub use host::Host;
pub use mixer::{KeyOutcome, Mixer};
pub use runner::{ProcessRunner, Runner};
pub use session::{Session, SessionState};
pub use sinklist::{AudioNode, NodeKind};
pub use volume::{Percent, percent_to_native, volume_bar};
