use serde::{Deserialize, Serialize};

use tillbook_core::{DomainError, DomainResult, Entity, ItemId, Numeric};

/// First item code handed out to an empty catalog.
const FIRST_ITEM_CODE: u64 = 10_001;

/// Catalog item.
///
/// `code` is a display identifier; the core does not guarantee its
/// uniqueness (the presentation layer assigns codes via [`next_item_code`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub code: String,
    pub name: String,
    pub category: String,
    pub purchase_price: Numeric,
    pub sale_price: Numeric,
}

impl Item {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        purchase_price: impl Into<Numeric>,
        sale_price: impl Into<Numeric>,
    ) -> DomainResult<Self> {
        let code = code.into();
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if code.trim().is_empty() {
            return Err(DomainError::validation("item code cannot be empty"));
        }
        Ok(Self {
            id: ItemId::new(),
            code,
            name,
            category: category.into(),
            purchase_price: purchase_price.into(),
            sale_price: sale_price.into(),
        })
    }

    /// Case-insensitive containment match over code, name and category.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.code.to_lowercase().contains(&term)
            || self.name.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Next sequential item code: `max(numeric codes >= 10001) + 1`.
///
/// Deliberately deterministic, unlike document numbers: item codes are a
/// display sequence, document numbers are a per-kind uniqueness namespace.
/// Non-numeric and pre-range codes are ignored.
pub fn next_item_code(items: &[Item]) -> String {
    let max = items
        .iter()
        .filter_map(|item| item.code.trim().parse::<u64>().ok())
        .filter(|code| *code >= FIRST_ITEM_CODE)
        .max();

    match max {
        Some(code) => (code + 1).to_string(),
        None => FIRST_ITEM_CODE.to_string(),
    }
}
