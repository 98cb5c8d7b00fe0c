//! Collaborator interface toward whatever presents the mixer to the user.

use config::Keys;

/// The user-facing side of the program: message display, key routing and menus.
///
/// The engine calls these to present results and to ask the user for a choice; it keeps
/// no UI state of its own.
pub trait Host {
    /// Show a transient message.
    fn display_message(&mut self, text: &str);

    /// Show a message that stays up until replaced (used while interactive).
    fn display_persistent_message(&mut self, text: &str);

    /// Route keys through `keys` until [`Host::restore_keymap`] is called.
    fn install_keymap(&mut self, keys: &Keys);

    /// Return key routing to its state before [`Host::install_keymap`].
    fn restore_keymap(&mut self);

    /// Let the user pick one of `items`; `None` when cancelled.
    fn select(&mut self, prompt: &str, items: &[String]) -> Option<usize>;
}
