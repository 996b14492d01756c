//! Scalar cell holding the engine's single stored value.

use serde::{Deserialize, Serialize};

/// A single-value storage cell.
///
/// Holds the argument of the most recent write, or zero if never written.
/// Writes replace the value wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarCell {
    value: u64,
}

impl ScalarCell {
    /// Creates a cell holding the zero default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored value.
    pub fn set(&mut self, value: u64) {
        self.value = value;
    }

    /// Returns the current value.
    pub fn get(&self) -> u64 {
        self.value
    }
}
