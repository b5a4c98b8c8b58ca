//! Stock derivation and movement reconstruction.
//!
//! Nothing here is stored: every quantity is recomputed from the full
//! transaction history at call time, so a newly saved document is visible
//! to the very next derivation. Both derivations read the sign table on
//! [`tillbook_transactions::TransactionKind`], which keeps the aggregated
//! stock and the reconstructed movement ledger consistent by construction.

pub mod movement;
pub mod stock;

pub use movement::{MovementEntry, MovementFilter};
pub use stock::{StockFilter, StockLedger, StockLevel, StockSummary};
