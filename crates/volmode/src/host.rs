//! Terminal implementation of the engine's [`Host`].

use std::io::{self, BufRead, Write};

use config::Keys;
use tracing::debug;
use volmode_engine::Host;

/// Erase the current terminal line and return to column 0.
const CLEAR_LINE: &str = "\r\x1b[2K";

/// A [`Host`] over a line-oriented input and an output stream.
///
/// Persistent messages redraw the current line in place; key help is printed when the
/// interactive keymap is installed.
pub struct TerminalHost<R, W> {
    /// Key and menu input.
    input: R,
    /// Message output.
    output: W,
    /// True while the cursor sits on a persistent message line.
    on_persistent_line: bool,
}

impl<R: BufRead, W: Write> TerminalHost<R, W> {
    /// Host reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            on_persistent_line: false,
        }
    }

    /// Read one key token (one line). An empty line is `ret`; `None` at end of input.
    pub fn read_key(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let key = line.trim();
        Ok(Some(if key.is_empty() { "ret" } else { key }.to_string()))
    }

    /// Consume the host, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write `text`, logging rather than failing on I/O errors.
    fn emit(&mut self, text: &str) {
        let res = self
            .output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(e) = res {
            debug!(error = %e, "terminal write failed");
        }
    }

    /// Leave a persistent line so the next output starts on a fresh one.
    fn break_persistent_line(&mut self) {
        if self.on_persistent_line {
            self.on_persistent_line = false;
            self.emit("\n");
        }
    }
}

impl<R: BufRead, W: Write> Host for TerminalHost<R, W> {
    fn display_message(&mut self, text: &str) {
        self.break_persistent_line();
        self.emit(&format!("{text}\n"));
    }

    fn display_persistent_message(&mut self, text: &str) {
        self.emit(&format!("{CLEAR_LINE}{text}"));
        self.on_persistent_line = true;
    }

    fn install_keymap(&mut self, keys: &Keys) {
        self.break_persistent_line();
        let mut help = String::new();
        for b in keys.iter() {
            help.push_str(&format!("  {:<6} {}\n", b.key, b.description));
        }
        self.emit(&help);
    }

    fn restore_keymap(&mut self) {
        self.break_persistent_line();
    }

    fn select(&mut self, prompt: &str, items: &[String]) -> Option<usize> {
        self.break_persistent_line();
        let mut menu = String::new();
        for (i, item) in items.iter().enumerate() {
            menu.push_str(&format!("{:>3}) {}\n", i + 1, item));
        }
        menu.push_str(&format!("{prompt} [1-{}]: ", items.len()));
        self.emit(&menu);

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Err(e) => {
                debug!(error = %e, "terminal read failed, treating selection as cancelled");
                None
            }
            Ok(_) => line
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=items.len()).contains(n))
                .map(|n| n - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use config::{Action, Binding};

    use super::*;

    fn host(input: &str) -> TerminalHost<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalHost::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(h: TerminalHost<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(h.into_output()).unwrap()
    }

    #[test]
    fn select_parses_one_based_choice() {
        let items = vec!["Firefox".to_string(), "mpv".to_string()];
        let mut h = host("2\n");
        assert_eq!(h.select("Application", &items), Some(1));
        let out = output(h);
        assert!(out.contains("  1) Firefox\n  2) mpv\n"));
        assert!(out.ends_with("Application [1-2]: "));
    }

    #[test]
    fn select_rejects_bad_input() {
        let items = vec!["Firefox".to_string()];
        assert_eq!(host("0\n").select("App", &items), None);
        assert_eq!(host("2\n").select("App", &items), None);
        assert_eq!(host("x\n").select("App", &items), None);
        assert_eq!(host("").select("App", &items), None);
    }

    #[test]
    fn select_read_failure_is_cancel() {
        let items = vec!["Firefox".to_string()];
        // Invalid UTF-8 makes `read_line` fail.
        let mut h = TerminalHost::new(Cursor::new(vec![0xff, b'1', b'\n']), Vec::new());
        assert_eq!(h.select("App", &items), None);
        assert!(output(h).ends_with("App [1-1]: "));
    }

    #[test]
    fn read_key_maps_blank_line_to_ret() {
        let mut h = host("k\n\n  j \n");
        assert_eq!(h.read_key().unwrap().as_deref(), Some("k"));
        assert_eq!(h.read_key().unwrap().as_deref(), Some("ret"));
        assert_eq!(h.read_key().unwrap().as_deref(), Some("j"));
        assert_eq!(h.read_key().unwrap(), None);
    }

    #[test]
    fn persistent_line_is_redrawn_then_broken() {
        let mut h = host("");
        h.display_persistent_message("Master [-] 10%");
        h.display_persistent_message("Master [-] 15%");
        h.display_message("done");
        assert_eq!(
            output(h),
            "\r\x1b[2KMaster [-] 10%\r\x1b[2KMaster [-] 15%\ndone\n"
        );
    }

    #[test]
    fn keymap_help_lists_bindings() {
        let keys = Keys::new(vec![
            Binding::new("k", "Louder", Action::VolumeUp),
            Binding::new("q", "Done", Action::Exit),
        ]);
        let mut h = host("");
        h.install_keymap(&keys);
        assert_eq!(output(h), "  k      Louder\n  q      Done\n");
    }
}
