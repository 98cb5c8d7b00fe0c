//! Field extractors that operate on one record's raw block.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, NodeKind, Result};

/// Device volume: the percentage of the `front-left` channel.
static SINK_VOLUME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*volume:[ \t]*front-left:[^%\n]*?(\d+)%").expect("sink volume regex")
});

/// Stream volume: the percentage after the first numeric channel id.
static SINK_INPUT_VOLUME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*volume:[ \t]*\d+:[ \t]*(\d+)%").expect("sink input volume regex")
});

/// Mute line; the captured word is compared against `no`.
static MUTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*muted:[ \t]*(\w+)").expect("muted regex"));

/// Quoted application name property, escapes included.
static APPLICATION_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"application\.name = "((?:[^"\\]|\\.)*)""#).expect("application name regex")
});

/// Volume percentage of a record block, capped at 100.
pub(crate) fn volume(kind: NodeKind, index: u32, block: &str) -> Result<u8> {
    let re = match kind {
        NodeKind::Sink => &*SINK_VOLUME,
        NodeKind::SinkInput => &*SINK_INPUT_VOLUME,
    };
    let digits = re
        .captures(block)
        .and_then(|c| c.get(1))
        .ok_or(Error::FieldNotFound {
            kind,
            index,
            field: "volume",
        })?
        .as_str();
    let pct: u32 = digits.parse().map_err(|source| Error::InvalidNumber {
        kind,
        text: digits.to_string(),
        source,
    })?;
    // Boosted volumes (above 100%) are reported at the top of the range.
    Ok(pct.min(100) as u8)
}

/// Mute flag of a record block: anything but `no` counts as muted.
pub(crate) fn muted(kind: NodeKind, index: u32, block: &str) -> Result<bool> {
    let token = MUTED
        .captures(block)
        .and_then(|c| c.get(1))
        .ok_or(Error::FieldNotFound {
            kind,
            index,
            field: "muted",
        })?;
    Ok(token.as_str() != "no")
}

/// Decoded `application.name` of a record block, if present.
pub(crate) fn application_name(block: &str) -> Option<String> {
    APPLICATION_NAME
        .captures(block)
        .and_then(|c| c.get(1))
        .map(|m| decode_quoted(m.as_str()))
}

/// Undo backslash escaping inside a quoted property value.
///
/// A backslash makes the following character literal; a trailing lone backslash is kept.
pub fn decode_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINK_BLOCK: &str = "  * index: 0\n\
        \tname: <alsa_output.pci-0000_00_1b.0.analog-stereo>\n\
        \tvolume: front-left: 32768 /  50% / -18.06 dB,   front-right: 32768 /  50% / -18.06 dB\n\
        \tbase volume: 65536 / 100% / 0.00 dB\n\
        \tvolume steps: 65537\n\
        \tmuted: no\n";

    #[test]
    fn sink_volume_uses_front_left_percent() {
        assert_eq!(volume(NodeKind::Sink, 0, SINK_BLOCK).unwrap(), 50);
    }

    #[test]
    fn sink_volume_ignores_base_volume() {
        let block = "    index: 1\n\tbase volume: 65536 / 100% / 0.00 dB\n\tmuted: no\n";
        assert_eq!(
            volume(NodeKind::Sink, 1, block),
            Err(Error::FieldNotFound {
                kind: NodeKind::Sink,
                index: 1,
                field: "volume"
            })
        );
    }

    #[test]
    fn sink_input_volume_after_channel_id() {
        let block = "    index: 4\n\tvolume: 0:  73% 1:  73%\n\tmuted: yes\n";
        assert_eq!(volume(NodeKind::SinkInput, 4, block).unwrap(), 73);
        // The device pattern does not apply to streams.
        assert!(volume(NodeKind::Sink, 4, block).is_err());
    }

    #[test]
    fn boosted_volume_is_capped() {
        let block = "    index: 4\n\tvolume: 0: 153% 1: 153%\n";
        assert_eq!(volume(NodeKind::SinkInput, 4, block).unwrap(), 100);
    }

    #[test]
    fn mute_is_true_unless_no() {
        assert!(!muted(NodeKind::Sink, 0, SINK_BLOCK).unwrap());
        assert!(muted(NodeKind::Sink, 0, "\tmuted: yes\n").unwrap());
        assert!(muted(NodeKind::Sink, 0, "\tmuted: 1\n").unwrap());
        assert!(muted(NodeKind::Sink, 0, "\tvolume: 0: 5%\n").is_err());
    }

    #[test]
    fn application_name_decodes_escapes() {
        let block = "\tproperties:\n\t\tapplication.name = \"The \\\"Best\\\" Player\"\n";
        assert_eq!(
            application_name(block).as_deref(),
            Some("The \"Best\" Player")
        );
        assert_eq!(application_name("\tmuted: no\n"), None);
    }

    #[test]
    fn decode_quoted_handles_backslashes() {
        assert_eq!(decode_quoted(r"plain"), "plain");
        assert_eq!(decode_quoted(r"a\\b"), r"a\b");
        assert_eq!(decode_quoted(r"trailing\"), r"trailing\");
    }
}
