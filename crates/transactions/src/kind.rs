use serde::{Deserialize, Serialize};

/// The four transaction kinds, each backing one store collection.
///
/// [`TransactionKind::ALL`] fixes the scan order used by every full-history
/// derivation; movement entries with equal dates keep this order as their
/// tie-break, so it must not be rearranged.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    Purchase,
    StockReturn,
    Sale,
    SaleReturn,
}

impl TransactionKind {
    /// Fixed scan order for full-history derivations.
    pub const ALL: [TransactionKind; 4] = [
        TransactionKind::Purchase,
        TransactionKind::StockReturn,
        TransactionKind::Sale,
        TransactionKind::SaleReturn,
    ];

    /// Stock impact sign: purchases and sale returns add stock, stock
    /// returns and sales remove it. The aggregator and the movement
    /// reconstructor both read this table, never their own copy.
    pub fn sign(self) -> i64 {
        match self {
            TransactionKind::Purchase | TransactionKind::SaleReturn => 1,
            TransactionKind::StockReturn | TransactionKind::Sale => -1,
        }
    }

    /// Document-number prefix. Prefixes keep the per-kind number namespaces
    /// disjoint even when the numeric suffixes collide.
    pub fn document_prefix(self) -> &'static str {
        match self {
            TransactionKind::Purchase => "PRC",
            TransactionKind::StockReturn => "PRV",
            TransactionKind::Sale => "SV",
            TransactionKind::SaleReturn => "SRV",
        }
    }

    /// Human label, passed through to presentation unchanged.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Purchase => "Purchase",
            TransactionKind::StockReturn => "Purchase Return",
            TransactionKind::Sale => "Sale",
            TransactionKind::SaleReturn => "Sale Return",
        }
    }

    /// Display icon, passed through to presentation unchanged.
    pub fn icon(self) -> &'static str {
        match self {
            TransactionKind::Purchase => "🛒",
            TransactionKind::StockReturn => "↩️",
            TransactionKind::Sale => "💰",
            TransactionKind::SaleReturn => "🔄",
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
