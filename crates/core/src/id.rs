//! Strongly-typed identifiers used across the domain.
//!
//! The transaction store is a document store, so identifiers are opaque
//! strings: records imported from an existing store keep whatever ids they
//! already carry, while freshly minted ids are UUIDv7 (time-ordered).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a catalog item.
///
/// Line items keep referencing an `ItemId` after the item is deleted from
/// the catalog; derivations over such dangling ids stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of a transaction document (any of the four kinds).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

macro_rules! impl_string_id {
    ($t:ty) => {
        impl $t {
            /// Mint a fresh identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer fixed ids in tests for
            /// determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Wrap an existing raw identifier without inspection.
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

impl_string_id!(ItemId);
impl_string_id!(TransactionId);
