//! The two kinds of audio node and the tool subcommands for each.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant for the two kinds of node the tool lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// An output device.
    Sink,
    /// One application's playback stream.
    SinkInput,
}

impl NodeKind {
    /// Subcommand that lists every node of this kind.
    pub fn list_command(self) -> &'static str {
        match self {
            Self::Sink => "list-sinks",
            Self::SinkInput => "list-sink-inputs",
        }
    }

    /// Subcommand that sets the volume of a node of this kind.
    pub fn volume_command(self) -> &'static str {
        match self {
            Self::Sink => "set-sink-volume",
            Self::SinkInput => "set-sink-input-volume",
        }
    }

    /// Subcommand that sets the mute flag of a node of this kind.
    pub fn mute_command(self) -> &'static str {
        match self {
            Self::Sink => "set-sink-mute",
            Self::SinkInput => "set-sink-input-mute",
        }
    }

    /// Whether an `index:` line of this kind may carry the default marker.
    pub fn allows_default_marker(self) -> bool {
        matches!(self, Self::Sink)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sink => "sink",
            Self::SinkInput => "sink input",
        })
    }
}
