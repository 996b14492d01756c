//! Error types for storage engine operations.

use thiserror::Error;

/// Errors that can occur during storage engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Positional record read past the end of the sequence.
    #[error("Record index out of range: {index} (sequence length {len})")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The sequence length at the time of the read.
        len: usize,
    },

    /// Numeric argument does not fit the engine's 64-bit value width.
    #[error("Value out of range: {value} does not fit the 64-bit storage width")]
    ValueOutOfRange {
        /// The rejected value.
        value: u128,
    },
}

impl EngineError {
    /// Create an index out of range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create a value out of range error.
    pub fn value_out_of_range(value: u128) -> Self {
        Self::ValueOutOfRange { value }
    }
}

/// Result type for storage engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
