//! Test support utilities for volmode-engine unit and integration tests.
//! These helpers are public so the `tests/` suite can share them.

use std::collections::HashMap;

use config::Keys;
use parking_lot::Mutex;

use crate::{Error, Host, Result, Runner};

/// A [`Runner`] that serves canned output per subcommand and records every call.
#[derive(Default)]
pub struct ScriptedRunner {
    /// Output returned for a subcommand (first argument).
    outputs: Mutex<HashMap<String, String>>,
    /// Subcommands that fail with a non-zero exit.
    failing: Mutex<Vec<String>>,
    /// Every invocation, rendered as `program arg arg ...`.
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    /// An empty script: every subcommand succeeds with no output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `text` whenever `subcommand` is run.
    pub fn set_output(&self, subcommand: &str, text: &str) {
        self.outputs
            .lock()
            .insert(subcommand.to_string(), text.to_string());
    }

    /// Make `subcommand` exit with status 1.
    pub fn fail(&self, subcommand: &str) {
        self.failing.lock().push(subcommand.to_string());
    }

    /// All recorded invocations.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Recorded invocations that were not listings.
    pub fn mutations(&self) -> Vec<String> {
        self.calls
            .lock()
            .iter()
            .filter(|c| !c.split(' ').nth(1).is_some_and(|s| s.starts_with("list-")))
            .cloned()
            .collect()
    }

    /// True if an invocation exactly matching `call` was recorded.
    pub fn calls_contains(&self, call: &str) -> bool {
        self.calls.lock().iter().any(|c| c == call)
    }
}

impl Runner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<String> {
        let mut rendered = program.to_string();
        for a in args {
            rendered.push(' ');
            rendered.push_str(a);
        }
        self.calls.lock().push(rendered);
        let subcommand = args.first().cloned().unwrap_or_default();
        if self.failing.lock().contains(&subcommand) {
            return Err(Error::ToolFailed {
                program: program.to_string(),
                subcommand,
                code: Some(1),
                stderr: "scripted failure".to_string(),
            });
        }
        Ok(self
            .outputs
            .lock()
            .get(&subcommand)
            .cloned()
            .unwrap_or_default())
    }
}

/// Something a [`RecordingHost`] was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// `display_message`
    Message(String),
    /// `display_persistent_message`
    Persistent(String),
    /// `install_keymap`, with the number of bindings
    InstallKeymap(usize),
    /// `restore_keymap`
    RestoreKeymap,
    /// `select`, with the offered labels
    Select(Vec<String>),
}

/// A [`Host`] that records calls and answers menus with a preset choice.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Calls in order.
    pub events: Vec<HostEvent>,
    /// Answer to every `select`.
    pub selection: Option<usize>,
}

impl RecordingHost {
    /// A host that cancels every menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that picks item `index` from every menu.
    pub fn selecting(index: usize) -> Self {
        Self {
            events: Vec::new(),
            selection: Some(index),
        }
    }

    /// True when more keymaps were installed than restored.
    pub fn keymap_installed(&self) -> bool {
        let installs = self
            .events
            .iter()
            .filter(|e| matches!(e, HostEvent::InstallKeymap(_)))
            .count();
        let restores = self
            .events
            .iter()
            .filter(|e| matches!(e, HostEvent::RestoreKeymap))
            .count();
        installs > restores
    }

    /// The most recent message of either kind.
    pub fn last_message(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|e| match e {
            HostEvent::Message(m) | HostEvent::Persistent(m) => Some(m.as_str()),
            _ => None,
        })
    }
}

impl Host for RecordingHost {
    fn display_message(&mut self, text: &str) {
        self.events.push(HostEvent::Message(text.to_string()));
    }

    fn display_persistent_message(&mut self, text: &str) {
        self.events.push(HostEvent::Persistent(text.to_string()));
    }

    fn install_keymap(&mut self, keys: &Keys) {
        self.events.push(HostEvent::InstallKeymap(keys.len()));
    }

    fn restore_keymap(&mut self) {
        self.events.push(HostEvent::RestoreKeymap);
    }

    fn select(&mut self, _prompt: &str, items: &[String]) -> Option<usize> {
        self.events.push(HostEvent::Select(items.to_vec()));
        self.selection
    }
}
