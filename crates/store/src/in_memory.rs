use std::sync::RwLock;

use tracing::debug;

use tillbook_catalog::Item;
use tillbook_core::{Entity, ItemId, TransactionId};
use tillbook_transactions::{Transaction, TransactionKind};

use crate::store::TransactionStore;

/// In-memory document store.
///
/// Intended for tests/dev and as the reference implementation of the store
/// contract. Collections are insertion-ordered vectors; upserts replace in
/// place so stored order stays stable across edits.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<Vec<Item>>,
    purchases: RwLock<Vec<Transaction>>,
    stock_returns: RwLock<Vec<Transaction>>,
    sales: RwLock<Vec<Transaction>>,
    sale_returns: RwLock<Vec<Transaction>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collection(&self, kind: TransactionKind) -> &RwLock<Vec<Transaction>> {
        match kind {
            TransactionKind::Purchase => &self.purchases,
            TransactionKind::StockReturn => &self.stock_returns,
            TransactionKind::Sale => &self.sales,
            TransactionKind::SaleReturn => &self.sale_returns,
        }
    }
}

impl TransactionStore for InMemoryStore {
    fn items(&self) -> Vec<Item> {
        match self.items.read() {
            Ok(items) => items.clone(),
            Err(_) => vec![],
        }
    }

    fn transactions(&self, kind: TransactionKind) -> Vec<Transaction> {
        match self.collection(kind).read() {
            Ok(txs) => txs.clone(),
            Err(_) => vec![],
        }
    }

    fn save_item(&self, item: Item) {
        if let Ok(mut items) = self.items.write() {
            match items.iter().position(|i| i.id() == item.id()) {
                Some(pos) => items[pos] = item,
                None => items.push(item),
            }
        }
    }

    fn delete_item(&self, id: &ItemId) -> bool {
        if let Ok(mut items) = self.items.write() {
            let before = items.len();
            items.retain(|i| i.id() != id);
            return items.len() < before;
        }
        false
    }

    fn save_transaction(&self, kind: TransactionKind, transaction: Transaction) {
        if let Ok(mut txs) = self.collection(kind).write() {
            debug!(kind = ?kind, id = %transaction.id, number = %transaction.document_number, "saving transaction");
            match txs.iter().position(|t| t.id() == transaction.id()) {
                Some(pos) => txs[pos] = transaction,
                None => txs.push(transaction),
            }
        }
    }

    fn delete_transaction(&self, kind: TransactionKind, id: &TransactionId) -> bool {
        if let Ok(mut txs) = self.collection(kind).write() {
            let before = txs.len();
            txs.retain(|t| t.id() != id);
            return txs.len() < before;
        }
        false
    }
}
