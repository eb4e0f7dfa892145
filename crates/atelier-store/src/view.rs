//! Read-only snapshots handed to the presentation layer.
//!
//! Every view is owned data and serializes to JSON, so a renderer never
//! holds a borrow into the storefront.

use atelier_commerce::cart::LineItem;
use atelier_commerce::catalog::{Catalog, Product};
use atelier_commerce::ids::{LineItemId, ProductId};
use atelier_commerce::money::Money;
use atelier_commerce::search::{Facet, FilterDimension};
use serde::Serialize;

/// The product grid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CatalogView {
    /// Visible products, in catalog order.
    pub products: Vec<ProductCard>,
    /// Number of visible products.
    pub count: usize,
}

/// One card of the product grid.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub price_display: String,
    pub image: String,
    pub category: String,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            price_display: product.price.display(),
            image: product.image.clone(),
            category: product.category.clone(),
            colors: product.colors.clone(),
            sizes: product.sizes.clone(),
        }
    }
}

/// The filter sidebar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterView {
    /// Category, size and color facets.
    pub facets: Vec<Facet>,
    /// Selected values as removable badges, in selection order.
    pub active: Vec<ActiveFilter>,
    /// Total number of selected values.
    pub active_count: usize,
}

impl FilterView {
    /// The "reset" control is shown only while something is selected.
    pub fn can_reset(&self) -> bool {
        self.active_count > 0
    }
}

/// A selected filter value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActiveFilter {
    pub dimension: FilterDimension,
    pub value: String,
    pub label: String,
}

/// The cart drawer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartView {
    /// Whether the drawer is showing.
    pub open: bool,
    /// Lines in the order they were added.
    pub lines: Vec<CartLineView>,
    /// Sum of quantities (header badge).
    pub item_count: i64,
    pub total: Money,
    pub total_display: String,
}

impl CartView {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// One line of the cart drawer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartLineView {
    pub id: LineItemId,
    pub name: String,
    pub image: String,
    pub size: String,
    pub color: String,
    /// Palette name of the color, falling back to the raw token.
    pub color_label: String,
    pub quantity: i64,
    pub line_total: Money,
    pub line_total_display: String,
}

impl CartLineView {
    pub(crate) fn new(item: &LineItem, catalog: &Catalog) -> Self {
        let line_total = item.line_total();
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            size: item.size.clone(),
            color: item.color.clone(),
            color_label: catalog
                .color_name(&item.color)
                .unwrap_or(&item.color)
                .to_string(),
            quantity: item.quantity,
            line_total,
            line_total_display: line_total.display(),
        }
    }
}
