use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use tillbook_catalog::Item;
use tillbook_core::{DomainError, DomainResult, Entity, ItemId, Numeric, TransactionId, ValueObject};

/// One item/quantity/price entry embedded in a transaction document.
///
/// `item_name` and `item_code` are snapshots taken from the catalog at
/// transaction time. They are value copies, never re-resolved: editing or
/// deleting the catalog item later must not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub item_id: ItemId,
    pub item_name: String,
    pub item_code: String,
    pub quantity: Numeric,
    pub price: Numeric,
}

impl LineItem {
    /// Snapshot a catalog item into a line at transaction-creation time.
    pub fn snapshot(item: &Item, quantity: impl Into<Numeric>, price: impl Into<Numeric>) -> Self {
        Self {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            item_code: item.code.clone(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Line total, always recomputed as `quantity × price`.
    pub fn total(&self) -> f64 {
        self.quantity.quantity() as f64 * self.price.amount()
    }
}

impl ValueObject for LineItem {}

/// A transaction document: one purchase, stock return, sale or sale return.
///
/// The kind is not stored on the document; the collection it lives in
/// carries it. `document_number` is unique within that kind's namespace
/// only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub document_number: String,
    pub counterparty: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    pub items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        document_number: impl Into<String>,
        counterparty: impl Into<String>,
        date: NaiveDate,
        items: Vec<LineItem>,
    ) -> DomainResult<Self> {
        let document_number = document_number.into();
        let counterparty = counterparty.into();
        if document_number.trim().is_empty() {
            return Err(DomainError::validation("document number cannot be empty"));
        }
        if counterparty.trim().is_empty() {
            return Err(DomainError::validation("counterparty name cannot be empty"));
        }
        if items.is_empty() {
            return Err(DomainError::validation(
                "transaction must contain at least one line item",
            ));
        }
        Ok(Self {
            id: TransactionId::new(),
            document_number,
            counterparty,
            date,
            narration: None,
            items,
            created_at: Utc::now(),
        })
    }

    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    /// Document total, always recomputed as the sum of line totals.
    /// Never stored, never independently edited.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(LineItem::total).sum()
    }

    /// Case-insensitive containment match over document number and
    /// counterparty.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.document_number.to_lowercase().contains(&term)
            || self.counterparty.to_lowercase().contains(&term)
    }
}

impl Entity for Transaction {
    type Id = TransactionId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
