//! Errors raised while reading a listing.

use std::{num::ParseIntError, result::Result as StdResult};

use thiserror::Error;

use crate::NodeKind;

/// Convenient result type for listing parsing.
pub type Result<T> = StdResult<T, Error>;

/// Errors produced while decoding tool output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The header count disagrees with the number of records found.
    #[error("malformed {kind} listing: header declares {declared} record(s), found {found}")]
    MalformedListing {
        /// Listing kind.
        kind: NodeKind,
        /// Count from the `>>> N` header (0 when the header is absent).
        declared: usize,
        /// Number of `index:` lines actually present.
        found: usize,
    },

    /// An expected field was absent from a record block.
    #[error("{kind} {index} malformed: no {field} field")]
    FieldNotFound {
        /// Record kind.
        kind: NodeKind,
        /// Server index of the record.
        index: u32,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A numeric token in the listing did not fit the expected integer type.
    #[error("invalid number {text:?} in {kind} listing: {source}")]
    InvalidNumber {
        /// Listing kind.
        kind: NodeKind,
        /// The offending token.
        text: String,
        /// Underlying parse error.
        source: ParseIntError,
    },
}
