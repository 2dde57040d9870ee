//! # Result History
//!
//! Bounded list of recently generated numerals with the signal health of
//! each generation. Newest first, at most 100 entries by default.

pub mod entry;
pub mod errors;
pub mod store;

pub use entry::HistoryEntry;
pub use errors::{HistoryError, HistoryResult};
pub use store::{FileHistoryStore, HistoryStore, MemoryHistoryStore, DEFAULT_HISTORY_LIMIT};
