//! Catalog domain module.
//!
//! Items that transactions are recorded against. Deleting an item does not
//! cascade into transaction history; derivations keep working off the
//! denormalized snapshots embedded in the documents.

pub mod item;

pub use item::{Item, next_item_code};
