use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use tillbook_core::ItemId;
use tillbook_store::TransactionStore;
use tillbook_transactions::TransactionKind;

use crate::stock::StockLedger;

/// One reconstructed historical event affecting an item's stock.
///
/// `signed_quantity` follows the kind sign table; `total_price` is
/// `|quantity| × price` and stays non-negative regardless of direction.
/// The kind carries its human label and icon for presentation pass-through.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementEntry {
    pub date: NaiveDate,
    pub document_number: String,
    pub signed_quantity: i64,
    pub kind: TransactionKind,
    pub total_price: f64,
}

/// Secondary filter over an already-reconstructed movement sequence.
///
/// Filtering only subsets: it never mutates entries and never re-sorts.
/// `None` fields match everything; the date range is inclusive and compared
/// at day granularity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovementFilter {
    pub kind: Option<TransactionKind>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl MovementFilter {
    pub fn matches(&self, entry: &MovementEntry) -> bool {
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        if let Some(from) = self.from {
            if entry.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if entry.date > to {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, entries: &[MovementEntry]) -> Vec<MovementEntry> {
        entries.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

impl<S: TransactionStore> StockLedger<S> {
    /// Chronological movement ledger for `item_id`, oldest first.
    ///
    /// Collections are scanned in the fixed kind order and stable-sorted by
    /// date only, so entries on the same day keep kind-scan order and then
    /// stored order as the deterministic tie-break. Recomputed fresh on
    /// every call; unknown ids yield an empty sequence.
    pub fn movement_history(&self, item_id: &ItemId) -> Vec<MovementEntry> {
        let mut movements: Vec<MovementEntry> = Vec::new();

        for kind in TransactionKind::ALL {
            let sign = kind.sign();
            for tx in self.store.transactions(kind) {
                for line in &tx.items {
                    if line.item_id != *item_id {
                        continue;
                    }
                    let quantity = line.quantity.quantity();
                    movements.push(MovementEntry {
                        date: tx.date,
                        document_number: tx.document_number.clone(),
                        signed_quantity: sign * quantity,
                        kind,
                        total_price: quantity.abs() as f64 * line.price.amount(),
                    });
                }
            }
        }

        movements.sort_by_key(|m| m.date);
        debug!(item_id = %item_id, entries = movements.len(), "reconstructed movement history");
        movements
    }
}
