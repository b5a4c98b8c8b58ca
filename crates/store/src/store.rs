use std::sync::Arc;

use tillbook_catalog::Item;
use tillbook_core::{ItemId, TransactionId};
use tillbook_transactions::{Transaction, TransactionKind};

/// Synchronous data-access contract between the core and its storage
/// collaborator.
///
/// Reads return whole collections in stored order; stored order is the
/// movement tie-break, so implementations must keep it stable across
/// upserts. Single-writer-at-a-time per process is assumed; under multiple
/// concurrent writers the document-number generator degrades to
/// collision-resistant (see `tillbook-numbering`).
pub trait TransactionStore: Send + Sync {
    /// All catalog items, in stored order.
    fn items(&self) -> Vec<Item>;

    /// One kind's full collection, in stored order.
    fn transactions(&self, kind: TransactionKind) -> Vec<Transaction>;

    /// Upsert an item by id.
    fn save_item(&self, item: Item);

    /// Delete an item. Historical transactions referencing it survive.
    fn delete_item(&self, id: &ItemId) -> bool;

    /// Upsert a transaction by id into its kind's collection.
    fn save_transaction(&self, kind: TransactionKind, transaction: Transaction);

    /// Delete a transaction from its kind's collection.
    fn delete_transaction(&self, kind: TransactionKind, id: &TransactionId) -> bool;

    fn purchases(&self) -> Vec<Transaction> {
        self.transactions(TransactionKind::Purchase)
    }

    fn stock_returns(&self) -> Vec<Transaction> {
        self.transactions(TransactionKind::StockReturn)
    }

    fn sales(&self) -> Vec<Transaction> {
        self.transactions(TransactionKind::Sale)
    }

    fn sale_returns(&self) -> Vec<Transaction> {
        self.transactions(TransactionKind::SaleReturn)
    }
}

impl<S> TransactionStore for Arc<S>
where
    S: TransactionStore + ?Sized,
{
    fn items(&self) -> Vec<Item> {
        (**self).items()
    }

    fn transactions(&self, kind: TransactionKind) -> Vec<Transaction> {
        (**self).transactions(kind)
    }

    fn save_item(&self, item: Item) {
        (**self).save_item(item)
    }

    fn delete_item(&self, id: &ItemId) -> bool {
        (**self).delete_item(id)
    }

    fn save_transaction(&self, kind: TransactionKind, transaction: Transaction) {
        (**self).save_transaction(kind, transaction)
    }

    fn delete_transaction(&self, kind: TransactionKind, id: &TransactionId) -> bool {
        (**self).delete_transaction(kind, id)
    }
}
