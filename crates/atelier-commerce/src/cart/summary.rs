//! Cart totals for the drawer footer.

use crate::cart::LineItem;
use crate::ids::LineItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals for the whole cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LineItemSummary>,
    /// Sum of all quantities.
    pub item_count: i64,
    /// Sum of all line totals.
    pub total: Money,
}

impl CartSummary {
    /// Summarize a slice of line items.
    pub fn from_items(items: &[LineItem]) -> Self {
        let line_items: Vec<LineItemSummary> = items.iter().map(LineItemSummary::from).collect();
        let total: Money = line_items.iter().map(|l| l.total).sum();
        let item_count = items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.quantity));

        Self {
            line_items,
            item_count,
            total,
        }
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Pricing for a single line item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemSummary {
    /// Line item ID.
    pub line_item_id: LineItemId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// Unit price times quantity.
    pub total: Money,
}

impl From<&LineItem> for LineItemSummary {
    fn from(item: &LineItem) -> Self {
        Self {
            line_item_id: item.id.clone(),
            unit_price: item.price,
            quantity: item.quantity,
            total: item.line_total(),
        }
    }
}
