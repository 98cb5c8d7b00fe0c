//! Interactive session state: idle, or bound to one target node.

use std::mem;

use sinklist::AudioNode;

/// Interactive session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// No interactive session.
    #[default]
    Idle,
    /// Keys are routed to volume adjustment of `target`.
    Active(AudioNode),
}

/// The one interactive session, owned by the caller's dispatch loop and passed to
/// [`crate::Mixer`] commands explicitly.
///
/// The stored target is the snapshot from the most recent adjustment. Only its kind and
/// index are trusted; volume and mute are re-read before every change.
#[derive(Debug, Default)]
pub struct Session {
    /// Current state.
    state: SessionState,
}

impl Session {
    /// A new idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// True while a target is active.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active(_))
    }

    /// The active target, if any.
    pub fn target(&self) -> Option<&AudioNode> {
        match &self.state {
            SessionState::Active(node) => Some(node),
            SessionState::Idle => None,
        }
    }

    /// Enter (or retarget) the active state.
    pub(crate) fn activate(&mut self, target: AudioNode) {
        self.state = SessionState::Active(target);
    }

    /// Return to idle, yielding the previous target.
    pub(crate) fn deactivate(&mut self) -> Option<AudioNode> {
        match mem::take(&mut self.state) {
            SessionState::Active(node) => Some(node),
            SessionState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use sinklist::NodeKind;

    use super::*;

    fn sink() -> AudioNode {
        AudioNode {
            kind: NodeKind::Sink,
            index: 1,
            volume: 20,
            muted: false,
            name: None,
        }
    }

    #[test]
    fn transitions() {
        let mut s = Session::new();
        assert!(!s.is_active());
        assert_eq!(s.target(), None);
        s.activate(sink());
        assert!(s.is_active());
        assert_eq!(s.target().map(|n| n.index), Some(1));
        assert_eq!(s.deactivate(), Some(sink()));
        assert_eq!(s.state(), &SessionState::Idle);
        assert_eq!(s.deactivate(), None);
    }
}
