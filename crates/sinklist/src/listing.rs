//! Record boundaries and header integrity for one listing snapshot.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::{AudioNode, Error, NodeKind, Result, fields};

/// The `>>> N` record-count header.
static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r">>>[ \t]*(\d+)").expect("header regex"));

/// Record start for sinks: an optional `*` default marker before `index:`.
static INDEX_MARKED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*(?P<marker>\*[ \t]*)?index:[ \t]*(?P<index>\d+)")
        .expect("marked index regex")
});

/// Record start for sink inputs: no marker is permitted.
static INDEX_PLAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*index:[ \t]*(?P<index>\d+)").expect("plain index regex")
});

/// One snapshot of `list-sinks` or `list-sink-inputs` output.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Which listing the text came from.
    kind: NodeKind,
    /// Captured tool output.
    text: String,
}

/// A record's raw block, borrowed from the [`Listing`] it was found in.
///
/// The block spans from its `index:` line up to (not including) the next record's
/// `index:` line, or to the end of the text for the last record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    /// Listing kind.
    kind: NodeKind,
    /// Server-assigned index.
    index: u32,
    /// Default marker present.
    default: bool,
    /// Raw block text.
    block: &'a str,
}

impl Listing {
    /// Wrap captured tool output.
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Listing kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Raw captured text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Record count announced by the `>>> N` header.
    ///
    /// A missing header counts as zero for both kinds; if records are present anyway the
    /// integrity check in [`Listing::records`] rejects the listing.
    pub fn declared_count(&self) -> Result<usize> {
        let Some(m) = HEADER.captures(&self.text).and_then(|c| c.get(1)) else {
            debug!(kind = %self.kind, "listing has no count header");
            return Ok(0);
        };
        m.as_str().parse().map_err(|source| Error::InvalidNumber {
            kind: self.kind,
            text: m.as_str().to_string(),
            source,
        })
    }

    /// All records in document order, checked against the header count.
    pub fn records(&self) -> Result<Vec<Record<'_>>> {
        let declared = self.declared_count()?;
        let records = self.scan()?;
        trace!(kind = %self.kind, declared, found = records.len(), "scanned listing");
        if records.len() != declared {
            return Err(Error::MalformedListing {
                kind: self.kind,
                declared,
                found: records.len(),
            });
        }
        Ok(records)
    }

    /// Decode every record into an owned [`AudioNode`].
    pub fn nodes(&self) -> Result<Vec<AudioNode>> {
        self.records()?.iter().map(Record::to_node).collect()
    }

    /// The record carrying server index `index`, if present.
    pub fn record(&self, index: u32) -> Result<Option<Record<'_>>> {
        Ok(self.records()?.into_iter().find(|r| r.index == index))
    }

    /// The default record: the first one carrying the marker, else the first one listed.
    ///
    /// This is a heuristic. The fallback is positional, so a listing whose first record
    /// has index 3 yields index 3. `None` only when the listing is empty.
    pub fn default_record(&self) -> Result<Option<Record<'_>>> {
        let records = self.records()?;
        let marked = records.iter().find(|r| r.default).copied();
        Ok(marked.or_else(|| records.first().copied()))
    }

    /// Find every record start and cut the text into blocks.
    fn scan(&self) -> Result<Vec<Record<'_>>> {
        let re = if self.kind.allows_default_marker() {
            &*INDEX_MARKED
        } else {
            &*INDEX_PLAIN
        };
        let starts: Vec<Captures<'_>> = re.captures_iter(&self.text).collect();
        let mut out = Vec::with_capacity(starts.len());
        for (i, caps) in starts.iter().enumerate() {
            let whole = caps.get_match();
            let end = starts
                .get(i + 1)
                .map_or(self.text.len(), |next| next.get_match().start());
            let digits = &caps["index"];
            let index = digits.parse().map_err(|source| Error::InvalidNumber {
                kind: self.kind,
                text: digits.to_string(),
                source,
            })?;
            out.push(Record {
                kind: self.kind,
                index,
                default: caps.name("marker").is_some(),
                block: &self.text[whole.start()..end],
            });
        }
        Ok(out)
    }
}

impl<'a> Record<'a> {
    /// Record kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Server-assigned index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Whether the `index:` line carried the default marker.
    pub fn is_default(&self) -> bool {
        self.default
    }

    /// The raw text block of this record.
    pub fn block(&self) -> &'a str {
        self.block
    }

    /// Volume in percent.
    pub fn volume(&self) -> Result<u8> {
        fields::volume(self.kind, self.index, self.block)
    }

    /// Mute flag.
    pub fn muted(&self) -> Result<bool> {
        fields::muted(self.kind, self.index, self.block)
    }

    /// Application name. Always `None` for sinks.
    pub fn name(&self) -> Option<String> {
        match self.kind {
            NodeKind::Sink => None,
            NodeKind::SinkInput => fields::application_name(self.block),
        }
    }

    /// Decode into an owned node.
    pub fn to_node(&self) -> Result<AudioNode> {
        Ok(AudioNode {
            kind: self.kind,
            index: self.index,
            volume: self.volume()?,
            muted: self.muted()?,
            name: self.name(),
        })
    }
}
