//! Transaction documents.
//!
//! The four append-style collections (purchases, stock returns, sales, sale
//! returns) share one document shape; the collection a document lives in
//! carries its kind. [`TransactionKind`] is the single table for the stock
//! sign convention, document-number prefixes and display metadata, so every
//! consumer agrees by construction.

pub mod document;
pub mod kind;

pub use document::{LineItem, Transaction};
pub use kind::TransactionKind;
