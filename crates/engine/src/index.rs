//! Append-only record sequence with a derived last-write-wins name index.

use crate::error::{EngineError, EngineResult};
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered sequence of records plus a derived name-to-favorite-number index.
///
/// The index is maintained incrementally: each append writes the record and
/// its index entry together, so for every name present, `by_name[name]` equals
/// the favorite number of the most recent append for that name after every
/// mutation. The sequence only ever grows; there is no delete, update, or
/// reorder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordIndex {
    records: Vec<Record>,
    by_name: HashMap<String, u64>,
}

impl RecordIndex {
    /// Creates an empty record index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and updates the name index in one step.
    ///
    /// The record's permanent position is the previous sequence length.
    /// Duplicate names are legal; the index keeps the number of the most
    /// recent append (last-write-wins).
    pub fn append(&mut self, record: Record) {
        self.by_name
            .insert(record.name.clone(), record.favorite_number);
        self.records.push(record);
    }

    /// Returns the record at the given append-order position (0-based).
    pub fn record(&self, index: usize) -> EngineResult<&Record> {
        self.records
            .get(index)
            .ok_or_else(|| EngineError::index_out_of_range(index, self.records.len()))
    }

    /// Returns the favorite number most recently appended for `name`.
    ///
    /// Total: a name never appended reads as zero, mirroring the scalar
    /// cell's zero default.
    pub fn lookup(&self, name: &str) -> u64 {
        self.by_name.get(name).copied().unwrap_or(0)
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterates over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a RecordIndex {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
