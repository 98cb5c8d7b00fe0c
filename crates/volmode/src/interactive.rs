//! The interactive key loop for a terminal session.

use std::io::{BufRead, Write};

use tracing::debug;
use volmode_engine::{AudioBackend, KeyOutcome, Mixer, Session};

use crate::{Result, host::TerminalHost};

/// Feed keys from the terminal to `session` until it returns to idle.
///
/// End of input exits the session. Any error exits the session before it is returned,
/// so the terminal is never left in interactive mode.
pub fn run<B, R, W>(
    mixer: &Mixer<B>,
    host: &mut TerminalHost<R, W>,
    session: &mut Session,
) -> Result<()>
where
    B: AudioBackend,
    R: BufRead,
    W: Write,
{
    while session.is_active() {
        let key = match host.read_key() {
            Ok(Some(key)) => key,
            Ok(None) => {
                debug!("input closed; leaving interactive mode");
                mixer.exit_interactive(session, host);
                break;
            }
            Err(e) => {
                mixer.exit_interactive(session, host);
                return Err(e.into());
            }
        };
        match mixer.handle_key(session, host, &key) {
            Ok(KeyOutcome::Unbound) => debug!(key, "unbound key"),
            Ok(_) => {}
            Err(e) => {
                if session.is_active() {
                    mixer.exit_interactive(session, host);
                }
                return Err(e.into());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Arc};

    use config::Config;
    use volmode_engine::{PacmdBackend, test_support::ScriptedRunner};

    use super::*;

    const SINKS: &str = ">>> 1 sink(s) available.
  * index: 2
\tvolume: front-left: 32768 /  50% / -18.06 dB,   front-right: 32768 /  50% / -18.06 dB
\tmuted: no
";

    fn mixer() -> (Mixer<PacmdBackend<Arc<ScriptedRunner>>>, Arc<ScriptedRunner>) {
        let runner = Arc::new(ScriptedRunner::new());
        runner.set_output("list-sinks", SINKS);
        let cfg = Config::default();
        let backend = PacmdBackend::from_config(runner.clone(), &cfg);
        (Mixer::from_config(backend, &cfg), runner)
    }

    fn host(input: &str) -> TerminalHost<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalHost::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn keys_until_exit() {
        let (mixer, runner) = mixer();
        let mut h = host("k\nwhat\nm\nq\nk\n");
        let mut session = Session::new();
        mixer.enter_interactive(&mut session, &mut h, None).unwrap();
        run(&mixer, &mut h, &mut session).unwrap();
        assert!(!session.is_active());
        // The trailing "k" after "q" is never read as an interactive key.
        assert_eq!(
            runner.mutations(),
            vec!["pacmd set-sink-volume 2 36044", "pacmd set-sink-mute 2 1"]
        );
    }

    #[test]
    fn end_of_input_exits() {
        let (mixer, runner) = mixer();
        let mut h = host("j\n");
        let mut session = Session::new();
        mixer.enter_interactive(&mut session, &mut h, None).unwrap();
        run(&mixer, &mut h, &mut session).unwrap();
        assert!(!session.is_active());
        assert_eq!(runner.mutations(), vec!["pacmd set-sink-volume 2 29491"]);
    }

    #[test]
    fn failure_exits_before_returning() {
        let (mixer, runner) = mixer();
        runner.fail("set-sink-volume");
        let mut h = host("k\nk\n");
        let mut session = Session::new();
        mixer.enter_interactive(&mut session, &mut h, None).unwrap();
        assert!(run(&mixer, &mut h, &mut session).is_err());
        assert!(!session.is_active());
        assert_eq!(runner.mutations().len(), 1);
    }
}
