use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use tillbook_store::TransactionStore;
use tillbook_transactions::{Transaction, TransactionKind};

/// Inclusive lower bound of the random draw range.
pub const MIN_DOCUMENT_NUMBER: u32 = 10_001;
/// Inclusive upper bound of the random draw range.
pub const MAX_DOCUMENT_NUMBER: u32 = 99_999;
/// Random draws before falling back to a timestamp-derived number.
pub const MAX_RANDOM_ATTEMPTS: u32 = 1_000;

/// Numeric suffixes already taken within `kind`'s namespace.
///
/// Only documents matching the kind's own `<PREFIX>-<digits>` pattern
/// count; numbers from other kinds live in disjoint namespaces and may
/// collide in value freely.
pub fn taken_numbers<'a>(
    kind: TransactionKind,
    documents: impl IntoIterator<Item = &'a Transaction>,
) -> HashSet<u32> {
    documents
        .into_iter()
        .filter_map(|doc| numeric_suffix(kind, &doc.document_number))
        .collect()
}

fn numeric_suffix(kind: TransactionKind, document_number: &str) -> Option<u32> {
    let digits = document_number
        .strip_prefix(kind.document_prefix())?
        .strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Draw a fresh document number for `kind`.
///
/// Candidates are drawn uniformly from
/// [`MIN_DOCUMENT_NUMBER`, `MAX_DOCUMENT_NUMBER`] and redrawn while taken,
/// up to [`MAX_RANDOM_ATTEMPTS`]. On exhaustion the last five digits of
/// `now` (bumped into range if below the minimum) are used **without** a
/// uniqueness re-check, an accepted residual collision risk surfaced
/// nowhere to the caller.
///
/// The taken set and the random source are explicit inputs so the retry
/// and fallback paths are deterministically testable. Uniqueness holds for
/// a single writer per store; concurrent writers degrade this to
/// collision-resistant, not collision-proof.
pub fn generate(
    kind: TransactionKind,
    taken: &HashSet<u32>,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> String {
    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let candidate = rng.random_range(MIN_DOCUMENT_NUMBER..=MAX_DOCUMENT_NUMBER);
        if !taken.contains(&candidate) {
            return format_number(kind, candidate);
        }
    }

    debug!(kind = ?kind, "random draws exhausted, deriving document number from timestamp");
    let mut fallback = now.timestamp_millis().rem_euclid(100_000) as u32;
    if fallback < MIN_DOCUMENT_NUMBER {
        fallback += MIN_DOCUMENT_NUMBER;
    }
    format_number(kind, fallback)
}

/// Generate against the current state of the store.
///
/// Re-reads the kind's collection on every call, so a number handed out
/// right after a save cannot re-collide with it.
pub fn next_document_number<S: TransactionStore>(store: &S, kind: TransactionKind) -> String {
    let documents = store.transactions(kind);
    let taken = taken_numbers(kind, documents.iter());
    generate(kind, &taken, &mut rand::rng(), Utc::now())
}

fn format_number(kind: TransactionKind, number: u32) -> String {
    format!("{}-{:05}", kind.document_prefix(), number)
}
