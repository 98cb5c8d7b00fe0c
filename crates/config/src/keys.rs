//! Interactive keymap: bindings from key names to volume actions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Tri-state switch used by mute actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    /// Force on.
    On,
    /// Force off.
    Off,
    /// Flip the current state.
    Toggle,
}

impl Toggle {
    /// Resolve against the current state.
    pub fn apply(self, current: bool) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Toggle => !current,
        }
    }
}

/// Actions available inside an interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Raise the target by the configured step
    VolumeUp,
    /// Lower the target by the configured step
    VolumeDown,
    /// Set the target to an absolute value (0-100)
    SetVolume(u8),
    /// Change the target by a relative amount (-100 to +100)
    ChangeVolume(i8),
    /// Control mute state: on/off/toggle
    Mute(Toggle),
    /// Leave the interactive session
    Exit,
}

/// On-disk shape of a binding: `("k", "Louder", volume_up)`.
#[derive(Serialize, Deserialize)]
struct RawBinding(String, String, Action);

/// One key binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBinding", into = "RawBinding")]
pub struct Binding {
    /// Key name as delivered by the host (e.g. `k`, `up`, `esc`).
    pub key: String,
    /// Short description shown in key help.
    pub description: String,
    /// Bound action.
    pub action: Action,
}

impl Binding {
    /// Construct a binding.
    pub fn new(key: impl Into<String>, description: impl Into<String>, action: Action) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            action,
        }
    }
}

impl From<RawBinding> for Binding {
    fn from(RawBinding(key, description, action): RawBinding) -> Self {
        Self::new(key, description, action)
    }
}

impl From<Binding> for RawBinding {
    fn from(b: Binding) -> Self {
        Self(b.key, b.description, b.action)
    }
}

/// Ordered list of bindings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keys(Vec<Binding>);

impl Keys {
    /// Build from bindings (order is preserved for key help).
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self(bindings)
    }

    /// Binding for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Binding> {
        self.0.iter().find(|b| b.key == key)
    }

    /// Iterate bindings in configured order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.0.iter()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no keys are bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject empty or duplicate keys, out-of-range values, and keymaps with no way out.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for b in &self.0 {
            if b.key.is_empty() {
                return Err(format!("binding '{}' has an empty key", b.description));
            }
            if !seen.insert(b.key.as_str()) {
                return Err(format!("key '{}' is bound more than once", b.key));
            }
            match b.action {
                Action::SetVolume(v) if v > 100 => {
                    return Err(format!("key '{}': set_volume({v}) exceeds 100", b.key));
                }
                Action::ChangeVolume(d) if !(-100..=100).contains(&d) => {
                    return Err(format!("key '{}': change_volume({d}) out of range", b.key));
                }
                _ => {}
            }
        }
        if !self.0.iter().any(|b| b.action == Action::Exit) {
            return Err("keymap has no exit binding".to_string());
        }
        Ok(())
    }
}
