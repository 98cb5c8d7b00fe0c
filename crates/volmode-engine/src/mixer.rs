//! The command surface: one-shot volume commands and the interactive session.

use config::{Action, Keys, Toggle};
use sinklist::{AudioNode, NodeKind};
use tracing::{debug, info, trace, warn};

use crate::{
    Error, Result,
    backend::AudioBackend,
    host::Host,
    session::Session,
    volume::{Percent, volume_bar},
};

/// Result of feeding one key to [`Mixer::handle_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// No session is active; the key was ignored.
    Inactive,
    /// The key is not bound in the interactive keymap.
    Unbound,
    /// The target was adjusted; carries the requested state.
    Adjusted(AudioNode),
    /// The session ended.
    Exited,
}

/// Volume commands over an [`AudioBackend`].
///
/// Every command lists fresh state before acting, and mutations are issued without a
/// read-back. Returned nodes therefore describe the state that was *requested*. A
/// read-modify-write such as a volume step races with any other controller changing
/// the same device.
pub struct Mixer<B> {
    /// Where state is read from and written to.
    backend: B,
    /// Percent per volume step.
    step: u8,
    /// Keymap installed while interactive.
    keys: Keys,
}

impl<B: AudioBackend> Mixer<B> {
    /// Build a mixer with an explicit step (percent) and interactive keymap.
    pub fn new(backend: B, step: u8, keys: Keys) -> Self {
        Self {
            backend,
            step,
            keys,
        }
    }

    /// Build a mixer from the user config.
    pub fn from_config(backend: B, cfg: &config::Config) -> Self {
        Self::new(backend, cfg.step, cfg.keys.clone())
    }

    /// The backend in use.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The interactive keymap.
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Show the default sink without changing it.
    pub fn status(&self, host: &mut dyn Host) -> Result<AudioNode> {
        let sink = self.backend.default_sink()?;
        host.display_message(&volume_bar(&sink));
        Ok(sink)
    }

    /// Raise the default sink by one step.
    pub fn increase_volume(&self, host: &mut dyn Host) -> Result<AudioNode> {
        self.on_default_sink(host, Action::VolumeUp)
    }

    /// Lower the default sink by one step.
    pub fn decrease_volume(&self, host: &mut dyn Host) -> Result<AudioNode> {
        self.on_default_sink(host, Action::VolumeDown)
    }

    /// Flip the default sink's mute flag.
    pub fn toggle_mute(&self, host: &mut dyn Host) -> Result<AudioNode> {
        self.on_default_sink(host, Action::Mute(Toggle::Toggle))
    }

    /// Set the default sink to an absolute volume.
    pub fn set_volume(&self, host: &mut dyn Host, volume: Percent) -> Result<AudioNode> {
        self.on_default_sink(host, Action::SetVolume(volume.get()))
    }

    /// Start an interactive session on `target`, or on the default sink when `None`.
    ///
    /// The interactive keymap is installed first. If resolving the target fails the
    /// keymap is restored and the session is left idle before the error is returned.
    pub fn enter_interactive(
        &self,
        session: &mut Session,
        host: &mut dyn Host,
        target: Option<&AudioNode>,
    ) -> Result<AudioNode> {
        let was_active = session.is_active();
        if !was_active {
            host.install_keymap(&self.keys);
        }
        let resolved = match target {
            Some(t) => self.backend.node(t.kind, t.index),
            None => self.backend.default_sink(),
        };
        match resolved {
            Ok(node) => {
                info!(kind = %node.kind, index = node.index, "interactive session started");
                host.display_persistent_message(&volume_bar(&node));
                session.activate(node.clone());
                Ok(node)
            }
            Err(e) => {
                warn!(error = %e, "could not start interactive session");
                session.deactivate();
                host.restore_keymap();
                Err(e)
            }
        }
    }

    /// End the interactive session. Returns `false` (after a warning) when none was active.
    pub fn exit_interactive(&self, session: &mut Session, host: &mut dyn Host) -> bool {
        match session.deactivate() {
            Some(node) => {
                info!(kind = %node.kind, index = node.index, "interactive session ended");
                host.restore_keymap();
                true
            }
            None => {
                warn!("exit requested but no interactive session is active");
                host.display_message("Not in interactive volume mode");
                false
            }
        }
    }

    /// Dispatch one key while a session is active.
    ///
    /// If the target has disappeared since the last key the session is ended and
    /// [`Error::NodeGone`] is returned. Other errors leave the session active.
    pub fn handle_key(
        &self,
        session: &mut Session,
        host: &mut dyn Host,
        key: &str,
    ) -> Result<KeyOutcome> {
        let Some(target) = session.target().cloned() else {
            debug!(key, "key ignored: no interactive session");
            return Ok(KeyOutcome::Inactive);
        };
        let Some(action) = self.keys.get(key).map(|b| b.action) else {
            trace!(key, "unbound key");
            return Ok(KeyOutcome::Unbound);
        };
        if action == Action::Exit {
            self.exit_interactive(session, host);
            return Ok(KeyOutcome::Exited);
        }
        let fresh = match self.backend.node(target.kind, target.index) {
            Ok(node) => node,
            Err(e @ Error::NodeGone { .. }) => {
                self.exit_interactive(session, host);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let updated = self.apply(&fresh, action)?;
        host.display_persistent_message(&volume_bar(&updated));
        session.activate(updated.clone());
        Ok(KeyOutcome::Adjusted(updated))
    }

    /// Let the user pick a playing application, then start a session on it.
    ///
    /// Returns the chosen stream, or `None` when nothing is playing or the menu was
    /// cancelled.
    pub fn list_applications(
        &self,
        session: &mut Session,
        host: &mut dyn Host,
    ) -> Result<Option<AudioNode>> {
        let streams = self.backend.list(NodeKind::SinkInput)?;
        if streams.is_empty() {
            host.display_message("No applications playing");
            return Ok(None);
        }
        let labels: Vec<String> = streams.iter().map(volume_bar).collect();
        let Some(chosen) = host
            .select("Application", &labels)
            .and_then(|i| streams.get(i))
        else {
            debug!("application menu cancelled");
            return Ok(None);
        };
        self.enter_interactive(session, host, Some(chosen)).map(Some)
    }

    /// Set every playing application to full volume. Returns how many were changed.
    pub fn normalize_application_volumes(&self, host: &mut dyn Host) -> Result<usize> {
        let streams = self.backend.list(NodeKind::SinkInput)?;
        for stream in &streams {
            self.backend.set_volume(stream, Percent::MAX)?;
        }
        info!(count = streams.len(), "normalized application volumes");
        host.display_message(&format!(
            "Normalized {} application(s) to {}",
            streams.len(),
            Percent::MAX
        ));
        Ok(streams.len())
    }

    /// Resolve the default sink, apply `action`, and report the result.
    fn on_default_sink(&self, host: &mut dyn Host, action: Action) -> Result<AudioNode> {
        let sink = self.backend.default_sink()?;
        let updated = self.apply(&sink, action)?;
        host.display_message(&volume_bar(&updated));
        Ok(updated)
    }

    /// Issue the mutation for `action` against a freshly read `node`.
    fn apply(&self, node: &AudioNode, action: Action) -> Result<AudioNode> {
        let current = Percent::clamped(i32::from(node.volume));
        let step = i32::from(self.step);
        let volume = match action {
            Action::VolumeUp => Some(current.step(step)),
            Action::VolumeDown => Some(current.step(-step)),
            Action::ChangeVolume(delta) => Some(current.step(i32::from(delta))),
            Action::SetVolume(v) => Some(Percent::clamped(i32::from(v))),
            Action::Mute(_) | Action::Exit => None,
        };
        let mut updated = node.clone();
        if let Some(volume) = volume {
            self.backend.set_volume(node, volume)?;
            updated.volume = volume.get();
        }
        if let Action::Mute(toggle) = action {
            let muted = toggle.apply(node.muted);
            self.backend.set_mute(node, muted)?;
            updated.muted = muted;
        }
        Ok(updated)
    }
}
