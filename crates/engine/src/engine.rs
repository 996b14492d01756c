//! The storage engine tying the scalar cell and record index together.

use crate::error::{EngineError, EngineResult};
use crate::index::RecordIndex;
use crate::record::Record;
use crate::scalar::ScalarCell;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// In-process storage engine holding one scalar cell and one record index.
///
/// One engine instance corresponds to one deployment's storage. The engine is
/// explicitly constructed and passed by reference; exclusive access for
/// mutations is enforced by `&mut self`, matching the host's
/// one-call-at-a-time execution guarantee. A mutating call either commits its
/// full effect or leaves state untouched: arguments are validated before any
/// field is written.
///
/// The whole engine serializes with serde, so a host can snapshot state and
/// restore it later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageEngine {
    scalar: ScalarCell,
    index: RecordIndex,
}

impl StorageEngine {
    /// Creates an engine with a zeroed scalar cell and an empty record
    /// sequence. No deployment-time configuration exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored scalar value wholesale.
    ///
    /// The call interface carries words wider than the engine's 64-bit value
    /// width; a value that does not fit is rejected with
    /// [`EngineError::ValueOutOfRange`] before any state changes.
    pub fn store(&mut self, value: u128) -> EngineResult<()> {
        let value = narrow(value)?;
        self.scalar.set(value);
        debug!(value, "stored scalar value");
        Ok(())
    }

    /// Returns the current scalar value, zero if never stored.
    pub fn retrieve(&self) -> u64 {
        self.scalar.get()
    }

    /// Appends a `{name, favorite_number}` record and updates the name index
    /// as one atomic effect.
    ///
    /// The record's permanent position is the previous sequence length. Empty
    /// names and duplicate names are legal; for duplicates the index keeps
    /// the most recent number (last-write-wins). Width validation happens
    /// first: on rejection neither the sequence nor the index is touched.
    pub fn add_person(
        &mut self,
        name: impl Into<String>,
        favorite_number: u128,
    ) -> EngineResult<()> {
        let favorite_number = narrow(favorite_number)?;
        let record = Record::new(name, favorite_number);
        debug!(
            name = %record.name,
            favorite_number,
            position = self.index.len(),
            "appending person record"
        );
        self.index.append(record);
        Ok(())
    }

    /// Returns the record at the given append-order position (0-based).
    ///
    /// Fails with [`EngineError::IndexOutOfRange`] when `index >= len()`;
    /// never returns a default record.
    pub fn record(&self, index: usize) -> EngineResult<&Record> {
        self.index.record(index)
    }

    /// Returns the favorite number of the most recently appended record for
    /// `name`, or zero if no record with that name exists.
    pub fn lookup_favorite_number(&self, name: &str) -> u64 {
        self.index.lookup(name)
    }

    /// Number of records appended so far.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no record has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        self.index.records()
    }
}

/// Narrows a host word to the engine's 64-bit value width.
///
/// Overflow is rejected, never wrapped or truncated.
fn narrow(value: u128) -> EngineResult<u64> {
    u64::try_from(value).map_err(|_| {
        warn!(value, "rejected value exceeding 64-bit storage width");
        EngineError::value_out_of_range(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_STORAGE_VALUE;

    #[test]
    fn test_fresh_engine_retrieves_zero() {
        let engine = StorageEngine::new();
        assert_eq!(engine.retrieve(), 0);
    }

    #[test]
    fn test_store_then_retrieve() {
        let mut engine = StorageEngine::new();
        engine.store(7).unwrap();
        assert_eq!(engine.retrieve(), 7);
    }

    #[test]
    fn test_store_overwrites_wholesale() {
        let mut engine = StorageEngine::new();
        engine.store(7).unwrap();
        engine.store(42).unwrap();
        assert_eq!(engine.retrieve(), 42);
    }

    #[test]
    fn test_store_accepts_maximum_value() {
        let mut engine = StorageEngine::new();
        engine.store(MAX_STORAGE_VALUE).unwrap();
        assert_eq!(engine.retrieve(), u64::MAX);
    }

    #[test]
    fn test_store_rejects_wide_value() {
        let mut engine = StorageEngine::new();
        engine.store(7).unwrap();

        let err = engine.store(MAX_STORAGE_VALUE + 1).unwrap_err();
        assert!(matches!(err, EngineError::ValueOutOfRange { .. }));
        // The failed call must not have touched the cell.
        assert_eq!(engine.retrieve(), 7);
    }

    #[test]
    fn test_add_person_appends_and_indexes() {
        let mut engine = StorageEngine::new();
        engine.add_person("Bill", 2).unwrap();

        let person = engine.record(0).unwrap();
        assert_eq!(person.name, "Bill");
        assert_eq!(person.favorite_number, 2);
        assert_eq!(engine.lookup_favorite_number("Bill"), 2);
    }

    #[test]
    fn test_add_multiple_people() {
        let mut engine = StorageEngine::new();
        let people = [("Alice", 10u128), ("Bob", 20), ("Charlie", 30)];
        for (name, number) in people {
            engine.add_person(name, number).unwrap();
        }

        assert_eq!(engine.len(), 3);
        assert_eq!(engine.record(1).unwrap(), &Record::new("Bob", 20));
        for (name, number) in people {
            assert_eq!(engine.lookup_favorite_number(name), number as u64);
        }
        assert_eq!(engine.lookup_favorite_number("Charlie"), 30);
    }

    #[test]
    fn test_duplicate_name_keeps_both_records() {
        let mut engine = StorageEngine::new();
        engine.add_person("John", 5).unwrap();
        engine.add_person("John", 15).unwrap();

        assert_eq!(engine.len(), 2);
        assert_eq!(engine.record(0).unwrap(), &Record::new("John", 5));
        assert_eq!(engine.record(1).unwrap(), &Record::new("John", 15));
        // The index reflects only the latest append.
        assert_eq!(engine.lookup_favorite_number("John"), 15);
    }

    #[test]
    fn test_unknown_name_reads_zero() {
        let mut engine = StorageEngine::new();
        engine.add_person("Bill", 2).unwrap();
        assert_eq!(engine.lookup_favorite_number("NonExistent"), 0);
    }

    #[test]
    fn test_record_out_of_range() {
        let mut engine = StorageEngine::new();
        assert_eq!(
            engine.record(0).unwrap_err(),
            EngineError::index_out_of_range(0, 0)
        );

        engine.add_person("Bill", 2).unwrap();
        assert_eq!(
            engine.record(1).unwrap_err(),
            EngineError::index_out_of_range(1, 1)
        );
    }

    #[test]
    fn test_rejected_add_person_leaves_state_untouched() {
        let mut engine = StorageEngine::new();
        engine.add_person("John", 5).unwrap();

        let err = engine
            .add_person("John", MAX_STORAGE_VALUE + 1)
            .unwrap_err();
        assert!(matches!(err, EngineError::ValueOutOfRange { .. }));

        // No partial write: neither the sequence nor the index moved.
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.lookup_favorite_number("John"), 5);
    }

    #[test]
    fn test_engines_with_same_history_are_equal() {
        let mut a = StorageEngine::new();
        let mut b = StorageEngine::new();
        a.store(7).unwrap();
        a.add_person("Bill", 2).unwrap();
        b.store(7).unwrap();
        b.add_person("Bill", 2).unwrap();
        assert_eq!(a, b);
    }
}
