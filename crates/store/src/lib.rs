//! Transaction store boundary.
//!
//! The core treats storage as a document store queried in full on every
//! derivation: full-collection reads, upsert-by-id writes, no incremental
//! indexes. Implementations must guarantee read-after-your-own-write
//! consistency: a saved document is visible to the very next read.

pub mod in_memory;
pub mod store;

pub use in_memory::InMemoryStore;
pub use store::TransactionStore;
