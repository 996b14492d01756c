//! # Simple Storage Engine
//!
//! Minimal contract-style storage engine: durable state mutated only through
//! well-defined entry points, with reads that reflect the latest committed
//! writes.
//!
//! ## Core Components
//!
//! - [`ScalarCell`]: a single value, zero by default, overwritten wholesale
//! - [`Record`]: an immutable `{name, favorite_number}` pair identified by its
//!   append-order position
//! - [`RecordIndex`]: an append-only record sequence plus a derived
//!   last-write-wins name index, kept consistent on every mutation
//! - [`StorageEngine`]: the engine instance owning both, exposing the five
//!   public operations (`store`, `retrieve`, `add_person`, `record`,
//!   `lookup_favorite_number`)
//!
//! The engine is explicitly constructed and passed by reference; there is no
//! ambient global instance. Mutations take `&mut self`, so the borrow checker
//! enforces the one-call-at-a-time discipline the host environment guarantees.
//! A mutating call either commits its full effect or leaves state untouched.
//!
//! ## Example
//!
//! ```
//! use simple_storage_engine::StorageEngine;
//!
//! let mut engine = StorageEngine::new();
//! engine.store(7)?;
//! assert_eq!(engine.retrieve(), 7);
//!
//! engine.add_person("Bill", 2)?;
//! assert_eq!(engine.record(0)?.name, "Bill");
//! assert_eq!(engine.lookup_favorite_number("Bill"), 2);
//! # Ok::<(), simple_storage_engine::EngineError>(())
//! ```

pub mod engine;
pub mod error;
pub mod index;
pub mod record;
pub mod scalar;

// Re-exports
pub use engine::StorageEngine;
pub use error::{EngineError, EngineResult};
pub use index::RecordIndex;
pub use record::Record;
pub use scalar::ScalarCell;

/// Largest value the engine can persist.
///
/// The in-process call interface carries words wider than the engine's 64-bit
/// value width; anything above this limit is rejected with
/// [`EngineError::ValueOutOfRange`] rather than wrapped or truncated.
pub const MAX_STORAGE_VALUE: u128 = u64::MAX as u128;
