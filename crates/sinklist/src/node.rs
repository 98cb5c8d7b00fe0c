//! Owned, decoded audio node.

use serde::Serialize;

use crate::NodeKind;

/// Decoded snapshot of one sink or sink input.
///
/// Values are copied out of the listing they were parsed from and go stale as soon as
/// the server changes; callers re-resolve by `(kind, index)` before each use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioNode {
    /// Which listing this node came from.
    pub kind: NodeKind,
    /// Server-assigned index.
    pub index: u32,
    /// Volume in percent, 0-100.
    pub volume: u8,
    /// Mute flag.
    pub muted: bool,
    /// Application name; only sink inputs carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AudioNode {
    /// Short human label: `Master` for devices, the application name for streams.
    pub fn label(&self) -> String {
        match (self.kind, &self.name) {
            (NodeKind::Sink, _) => "Master".to_string(),
            (NodeKind::SinkInput, Some(name)) => name.clone(),
            (NodeKind::SinkInput, None) => format!("Stream {}", self.index),
        }
    }

    /// True when `other` names the same server object (kind and index).
    pub fn same_target(&self, other: &Self) -> bool {
        self.kind == other.kind && self.index == other.index
    }
}
