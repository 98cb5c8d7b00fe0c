//! Built-in defaults and the serde default functions that return them.

use crate::{Action, Binding, Keys, Toggle};

/// PulseAudio's shell interface.
pub const DEFAULT_PROGRAM: &str = "pacmd";
/// `PA_VOLUME_NORM`: the native value for 100%.
pub const DEFAULT_NATIVE_MAX: u32 = 65536;
/// Percent per volume step.
pub const DEFAULT_STEP: u8 = 5;

/// Serde default for `program`.
pub(crate) fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}
/// Serde default for `native_max`.
pub(crate) const fn default_native_max() -> u32 {
    DEFAULT_NATIVE_MAX
}
/// Serde default for `step`.
pub(crate) const fn default_step() -> u8 {
    DEFAULT_STEP
}

/// Built-in interactive keymap.
pub(crate) fn default_keys() -> Keys {
    let b = |key: &str, desc: &str, action| Binding::new(key, desc, action);
    Keys::new(vec![
        b("k", "Louder", Action::VolumeUp),
        b("up", "Louder", Action::VolumeUp),
        b("j", "Quieter", Action::VolumeDown),
        b("down", "Quieter", Action::VolumeDown),
        b("m", "Toggle mute", Action::Mute(Toggle::Toggle)),
        b("0", "Silence", Action::SetVolume(0)),
        b("5", "Half volume", Action::SetVolume(50)),
        b("f", "Full volume", Action::SetVolume(100)),
        b("q", "Done", Action::Exit),
        b("ret", "Done", Action::Exit),
        b("esc", "Done", Action::Exit),
    ])
}
