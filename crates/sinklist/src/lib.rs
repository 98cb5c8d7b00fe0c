//! Parser for the text listings printed by the PulseAudio command-line tool.
//!
//! The tool's `list-sinks` and `list-sink-inputs` output is treated as a fragile wire
//! format. This crate knows how to:
//! - split a listing into per-record raw blocks ([`Listing`], [`Record`])
//! - check the header count against the records actually present
//! - pull volume, mute and application name out of a raw block
//! - pick the default sink (marked record, else the first one listed)
//!
//! Nothing here runs a process; callers hand in text they captured themselves.

mod error;
mod fields;
mod kind;
mod listing;
mod node;

pub use error::{Error, Result};
pub use fields::decode_quoted;
pub use kind::NodeKind;
pub use listing::{Listing, Record};
pub use node::AudioNode;

/// Parse a `list-sinks` listing into decoded nodes, in document order.
pub fn parse_sinks(text: &str) -> Result<Vec<AudioNode>> {
    Listing::new(NodeKind::Sink, text).nodes()
}

/// Parse a `list-sink-inputs` listing into decoded nodes, in document order.
pub fn parse_sink_inputs(text: &str) -> Result<Vec<AudioNode>> {
    Listing::new(NodeKind::SinkInput, text).nodes()
}
