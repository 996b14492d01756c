//! Record type for the append-only people sequence.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable `{name, favorite_number}` pair.
///
/// A record is identified by its append-order position in the sequence. Once
/// appended it is never updated, deleted, or reordered. Empty names and
/// duplicate names are both legal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// The person's name.
    pub name: String,

    /// The person's favorite number.
    pub favorite_number: u64,
}

impl Record {
    /// Creates a new record.
    pub fn new(name: impl Into<String>, favorite_number: u64) -> Self {
        Self {
            name: name.into(),
            favorite_number,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.favorite_number)
    }
}
