use serde::Serialize;
use tracing::debug;

use tillbook_catalog::Item;
use tillbook_core::{DomainError, DomainResult, ItemId};
use tillbook_store::TransactionStore;
use tillbook_transactions::TransactionKind;

/// Stock derivation service over a transaction store.
///
/// Holds nothing but the store handle; every answer is a fresh full scan of
/// the four collections.
#[derive(Debug)]
pub struct StockLedger<S: TransactionStore> {
    pub(crate) store: S,
}

/// Current stock of one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLevel {
    pub item: Item,
    pub current_stock: i64,
}

/// Stock-status filter over derived stock levels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockFilter {
    InStock,
    OutOfStock,
    Negative,
}

impl StockFilter {
    pub fn matches(self, level: &StockLevel) -> bool {
        match self {
            StockFilter::InStock => level.current_stock > 0,
            StockFilter::OutOfStock => level.current_stock == 0,
            StockFilter::Negative => level.current_stock < 0,
        }
    }
}

/// Catalog-wide stock statistics. Pure reductions over per-item stock;
/// negative stock contributes to quantity and value like any other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub available_quantity: i64,
    pub stock_value: f64,
}

impl StockSummary {
    pub fn of(levels: &[StockLevel]) -> Self {
        Self {
            in_stock: levels.iter().filter(|l| l.current_stock > 0).count(),
            out_of_stock: levels.iter().filter(|l| l.current_stock == 0).count(),
            available_quantity: levels.iter().map(|l| l.current_stock).sum(),
            stock_value: levels
                .iter()
                .map(|l| l.current_stock as f64 * l.item.purchase_price.amount())
                .sum(),
        }
    }
}

impl<S: TransactionStore> StockLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current quantity on hand for `item_id`.
    ///
    /// Scans every line item of every document in all four collections and
    /// sums `sign × quantity`. Unknown ids yield 0; negative results are
    /// valid (oversell is a reportable state, not an error). Malformed
    /// quantities contribute zero.
    pub fn current_stock(&self, item_id: &ItemId) -> i64 {
        let stock = TransactionKind::ALL
            .iter()
            .map(|kind| {
                let sign = kind.sign();
                self.store
                    .transactions(*kind)
                    .iter()
                    .flat_map(|tx| tx.items.iter())
                    .filter(|line| line.item_id == *item_id)
                    .map(|line| sign * line.quantity.quantity())
                    .sum::<i64>()
            })
            .sum();
        debug!(item_id = %item_id, stock, "derived current stock");
        stock
    }

    /// Current stock for every item in the catalog, in catalog order.
    pub fn stock_levels(&self) -> Vec<StockLevel> {
        self.store
            .items()
            .into_iter()
            .map(|item| {
                let current_stock = self.current_stock(&item.id);
                StockLevel { item, current_stock }
            })
            .collect()
    }

    /// Catalog-wide statistics, derived from [`Self::stock_levels`].
    pub fn summary(&self) -> StockSummary {
        StockSummary::of(&self.stock_levels())
    }

    /// Call-site sale policy: reject a draw that exceeds current stock.
    ///
    /// The aggregator itself never enforces this: negative stock can still
    /// arise from edits and direct data manipulation, and is reported, not
    /// forbidden. Callers opt in before recording a sale.
    pub fn ensure_available(&self, item_id: &ItemId, requested: i64) -> DomainResult<()> {
        let available = self.current_stock(item_id);
        if requested > available {
            return Err(DomainError::invariant(format!(
                "insufficient stock: requested {requested}, available {available}"
            )));
        }
        Ok(())
    }
}
