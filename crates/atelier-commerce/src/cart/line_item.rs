//! Cart line item type.

use crate::catalog::Product;
use crate::ids::{LineItemId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One (product, size, color) selection in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Composite key of product id, size and color.
    pub id: LineItemId,
    /// Product the item was added from.
    pub product_id: ProductId,
    /// Product name at the time of adding.
    pub name: String,
    /// Unit price at the time of adding.
    pub price: Money,
    /// Image URI at the time of adding.
    pub image: String,
    /// Chosen size.
    pub size: String,
    /// Chosen color token.
    pub color: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Snapshot a product variant into a new line item with quantity 1.
    pub fn from_product(product: &Product, size: impl Into<String>, color: impl Into<String>) -> Self {
        let size = size.into();
        let color = color.into();
        Self {
            id: LineItemId::for_variant(&product.id, &size, &color),
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            size,
            color,
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.max(1);
    }
}
