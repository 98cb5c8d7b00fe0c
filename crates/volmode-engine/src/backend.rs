//! Audio backends. [`PacmdBackend`] drives the PulseAudio shell tool by scraping its text.

use sinklist::{AudioNode, Listing, NodeKind};
use tracing::debug;

use crate::{
    Error, Result,
    runner::Runner,
    volume::{Percent, percent_to_native},
};

/// Capability interface for observing and mutating audio nodes.
pub trait AudioBackend {
    /// Every node of `kind`, freshly listed.
    fn list(&self, kind: NodeKind) -> Result<Vec<AudioNode>>;

    /// Re-resolve one node by index from a fresh listing.
    fn node(&self, kind: NodeKind, index: u32) -> Result<AudioNode>;

    /// The default sink (marked, else first listed).
    fn default_sink(&self) -> Result<AudioNode>;

    /// Set a node's volume. Not read back.
    fn set_volume(&self, node: &AudioNode, volume: Percent) -> Result<()>;

    /// Set a node's mute flag. Not read back.
    fn set_mute(&self, node: &AudioNode, muted: bool) -> Result<()>;
}

/// Text-scraping backend over `pacmd`-style output.
#[derive(Debug, Clone)]
pub struct PacmdBackend<R> {
    /// Process runner.
    runner: R,
    /// Program name or path.
    program: String,
    /// Native value for 100%.
    native_max: u32,
}

impl<R: Runner> PacmdBackend<R> {
    /// Backend running `program`, whose native value for 100% is `native_max`.
    pub fn new(runner: R, program: impl Into<String>, native_max: u32) -> Self {
        Self {
            runner,
            program: program.into(),
            native_max,
        }
    }

    /// Backend configured from the user config.
    pub fn from_config(runner: R, cfg: &config::Config) -> Self {
        Self::new(runner, cfg.program.clone(), cfg.native_max)
    }

    /// The runner used for every invocation.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Fetch a fresh listing snapshot.
    fn fetch(&self, kind: NodeKind) -> Result<Listing> {
        let text = self
            .runner
            .run(&self.program, &[kind.list_command().to_string()])?;
        Ok(Listing::new(kind, text))
    }

    /// Issue a mutation subcommand.
    fn mutate(&self, args: [String; 3]) -> Result<()> {
        debug!(program = %self.program, ?args, "mutation issued without read-back");
        self.runner.run(&self.program, &args)?;
        Ok(())
    }
}

impl<R: Runner> AudioBackend for PacmdBackend<R> {
    fn list(&self, kind: NodeKind) -> Result<Vec<AudioNode>> {
        Ok(self.fetch(kind)?.nodes()?)
    }

    fn node(&self, kind: NodeKind, index: u32) -> Result<AudioNode> {
        let listing = self.fetch(kind)?;
        let record = listing
            .record(index)?
            .ok_or(Error::NodeGone { kind, index })?;
        Ok(record.to_node()?)
    }

    fn default_sink(&self) -> Result<AudioNode> {
        let listing = self.fetch(NodeKind::Sink)?;
        let record = listing.default_record()?.ok_or(Error::NoDefaultSink)?;
        debug!(
            index = record.index(),
            marked = record.is_default(),
            "resolved default sink"
        );
        Ok(record.to_node()?)
    }

    fn set_volume(&self, node: &AudioNode, volume: Percent) -> Result<()> {
        let native = percent_to_native(volume, self.native_max);
        self.mutate([
            node.kind.volume_command().to_string(),
            node.index.to_string(),
            native.to_string(),
        ])
    }

    fn set_mute(&self, node: &AudioNode, muted: bool) -> Result<()> {
        self.mutate([
            node.kind.mute_command().to_string(),
            node.index.to_string(),
            if muted { "1" } else { "0" }.to_string(),
        ])
    }
}
