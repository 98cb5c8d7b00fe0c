//! Percent arithmetic, native-scale conversion and the text volume bar.

use std::fmt;

use sinklist::AudioNode;

/// Number of cells in the rendered volume bar.
const BAR_CELLS: u32 = 20;

/// A volume in percent. Only values in `0..=100` are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    /// Silence.
    pub const MIN: Self = Self(0);
    /// Full scale.
    pub const MAX: Self = Self(100);

    /// `None` when `value` exceeds 100.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self(value))
    }

    /// Clamp any integer into range.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Raw percent value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Add a signed delta, saturating at both ends.
    pub fn step(self, delta: i32) -> Self {
        Self::clamped(i32::from(self.0) + delta)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Convert a percentage to the tool's native scale, truncating.
pub fn percent_to_native(p: Percent, native_max: u32) -> u64 {
    u64::from(native_max) * u64::from(p.get()) / 100
}

/// Render a node as a one-line volume bar, e.g. `Master [##########----------] 50%`.
pub fn volume_bar(node: &AudioNode) -> String {
    let filled = u32::from(node.volume.min(100)) * BAR_CELLS / 100;
    let mut out = format!(
        "{} [{}{}] {}%",
        node.label(),
        "#".repeat(filled as usize),
        "-".repeat((BAR_CELLS - filled) as usize),
        node.volume
    );
    if node.muted {
        out.push_str(" [muted]");
    }
    out
}
