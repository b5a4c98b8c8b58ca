//! End-to-end flow over the in-memory store: catalog items, documents of
//! all four kinds with generated numbers, then every derivation the ledger
//! offers.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use tillbook_catalog::{Item, next_item_code};
use tillbook_ledger::{MovementFilter, StockLedger};
use tillbook_numbering::next_document_number;
use tillbook_store::{InMemoryStore, TransactionStore};
use tillbook_transactions::{LineItem, Transaction, TransactionKind};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

fn record(
    store: &Arc<InMemoryStore>,
    kind: TransactionKind,
    counterparty: &str,
    date: NaiveDate,
    lines: Vec<LineItem>,
) -> Transaction {
    let number = next_document_number(store, kind);
    let tx = Transaction::new(number, counterparty, date, lines).unwrap();
    store.save_transaction(kind, tx.clone());
    tx
}

#[test]
fn full_ledger_flow() {
    let store = Arc::new(InMemoryStore::new());

    // Catalog, with codes assigned the sequential way.
    let code = next_item_code(&store.items());
    assert_eq!(code, "10001");
    let tea = Item::new(code, "Green Tea", "Beverages", 100, 150).unwrap();
    store.save_item(tea.clone());
    let sugar = Item::new(next_item_code(&store.items()), "Sugar", "Grocery", 50, 70).unwrap();
    assert_eq!(sugar.code, "10002");
    store.save_item(sugar.clone());

    // A purchase, a partial return to the supplier, a sale, and a customer
    // return, across four days.
    let purchase = record(
        &store,
        TransactionKind::Purchase,
        "Acme Traders",
        day(1),
        vec![
            LineItem::snapshot(&tea, 10, 100),
            LineItem::snapshot(&sugar, 20, 50),
        ],
    );
    record(
        &store,
        TransactionKind::StockReturn,
        "Acme Traders",
        day(2),
        vec![LineItem::snapshot(&tea, 2, 100)],
    );
    record(
        &store,
        TransactionKind::Sale,
        "Walk-in Customer",
        day(3),
        vec![
            LineItem::snapshot(&tea, 5, 150),
            LineItem::snapshot(&sugar, 8, 70),
        ],
    );
    record(
        &store,
        TransactionKind::SaleReturn,
        "Walk-in Customer",
        day(4),
        vec![LineItem::snapshot(&tea, 1, 150)],
    );

    // Generated numbers are namespaced per kind and carry the right prefix.
    assert!(purchase.document_number.starts_with("PRC-"));
    let numbers: HashSet<String> = TransactionKind::ALL
        .iter()
        .flat_map(|kind| store.transactions(*kind))
        .map(|tx| tx.document_number)
        .collect();
    assert_eq!(numbers.len(), 4);

    // Document totals are recomputed from the lines.
    assert_eq!(purchase.total_amount(), 10.0 * 100.0 + 20.0 * 50.0);

    // Stock derivation.
    let ledger = StockLedger::new(store.clone());
    assert_eq!(ledger.current_stock(&tea.id), 10 - 2 - 5 + 1);
    assert_eq!(ledger.current_stock(&sugar.id), 20 - 8);

    let summary = ledger.summary();
    assert_eq!(summary.in_stock, 2);
    assert_eq!(summary.out_of_stock, 0);
    assert_eq!(summary.available_quantity, 4 + 12);
    assert_eq!(summary.stock_value, 4.0 * 100.0 + 12.0 * 50.0);

    // Movement reconstruction agrees with the aggregate, in date order.
    let history = ledger.movement_history(&tea.id);
    let signed: Vec<i64> = history.iter().map(|m| m.signed_quantity).collect();
    assert_eq!(signed, [10, -2, -5, 1]);
    assert_eq!(signed.iter().sum::<i64>(), ledger.current_stock(&tea.id));
    assert!(history.windows(2).all(|w| w[0].date <= w[1].date));

    // Filters subset the reconstructed sequence.
    let returns_only = MovementFilter {
        kind: Some(TransactionKind::SaleReturn),
        ..Default::default()
    }
    .apply(&history);
    assert_eq!(returns_only.len(), 1);
    assert_eq!(returns_only[0].signed_quantity, 1);

    let mid_range = MovementFilter {
        from: Some(day(2)),
        to: Some(day(3)),
        ..Default::default()
    }
    .apply(&history);
    assert_eq!(mid_range.len(), 2);

    // Deleting the item does not invalidate its history.
    assert!(store.delete_item(&tea.id));
    assert_eq!(ledger.current_stock(&tea.id), 4);
    assert_eq!(ledger.movement_history(&tea.id).len(), 4);
    // But the catalog-wide summary now only covers surviving items.
    assert_eq!(ledger.summary().available_quantity, 12);
}
