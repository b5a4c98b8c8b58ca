use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;

use tillbook_catalog::Item;
use tillbook_core::ItemId;
use tillbook_ledger::StockLedger;
use tillbook_store::{InMemoryStore, TransactionStore};
use tillbook_transactions::{LineItem, Transaction, TransactionKind};

/// Seed a store with `documents` transactions per kind, each carrying one
/// line per catalog item.
fn seeded_store(items: usize, documents: usize) -> (InMemoryStore, Vec<ItemId>) {
    let store = InMemoryStore::new();
    let catalog: Vec<Item> = (0..items)
        .map(|i| Item::new((10_001 + i).to_string(), format!("Item {i}"), "General", 100, 150).unwrap())
        .collect();
    for item in &catalog {
        store.save_item(item.clone());
    }

    for kind in TransactionKind::ALL {
        for doc in 0..documents {
            let date = NaiveDate::from_ymd_opt(2024, 1 + (doc % 12) as u32, 1 + (doc % 28) as u32)
                .expect("valid calendar date");
            let lines = catalog
                .iter()
                .map(|item| LineItem::snapshot(item, 3, 100))
                .collect();
            let number = format!("{}-{:05}", kind.document_prefix(), 10_001 + doc);
            let tx = Transaction::new(number, "Counterparty", date, lines).unwrap();
            store.save_transaction(kind, tx);
        }
    }

    let ids = catalog.into_iter().map(|item| item.id).collect();
    (store, ids)
}

fn bench_current_stock(c: &mut Criterion) {
    let (store, ids) = seeded_store(20, 250);
    let ledger = StockLedger::new(store);
    let id = ids[0].clone();

    let mut group = c.benchmark_group("current_stock");
    group.throughput(Throughput::Elements(1));
    group.bench_function("full_scan_1000_docs", |b| {
        b.iter(|| black_box(ledger.current_stock(black_box(&id))))
    });
    group.finish();
}

fn bench_movement_history(c: &mut Criterion) {
    let (store, ids) = seeded_store(20, 250);
    let ledger = StockLedger::new(store);
    let id = ids[0].clone();

    let mut group = c.benchmark_group("movement_history");
    group.throughput(Throughput::Elements(1));
    group.bench_function("reconstruct_1000_entries", |b| {
        b.iter(|| black_box(ledger.movement_history(black_box(&id))))
    });
    group.finish();
}

fn bench_stock_levels(c: &mut Criterion) {
    let (store, _ids) = seeded_store(20, 250);
    let ledger = StockLedger::new(store);

    c.bench_function("stock_levels_catalog_of_20", |b| {
        b.iter(|| black_box(ledger.stock_levels()))
    });
}

criterion_group!(
    benches,
    bench_current_stock,
    bench_movement_history,
    bench_stock_levels
);
criterion_main!(benches);
