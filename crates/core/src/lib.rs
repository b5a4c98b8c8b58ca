//! `tillbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage concerns):
//! typed identifiers, the domain error model, marker traits, and the
//! loose-number value object that carries the malformed-input policy.

pub mod entity;
pub mod error;
pub mod id;
pub mod numeric;

pub use entity::{Entity, ValueObject};
pub use error::{DomainError, DomainResult};
pub use id::{ItemId, TransactionId};
pub use numeric::Numeric;
