//! The storefront: single owner of catalog, filters, cart and drawer state.

use std::sync::Arc;

use atelier_commerce::cart::{CartAddition, CartLedger, LineItem};
use atelier_commerce::catalog::{Catalog, Product};
use atelier_commerce::ids::{LineItemId, ProductId};
use atelier_commerce::money::Money;
use atelier_commerce::search::{CatalogFilter, FilterDimension, FilterSelection};
use atelier_commerce::CommerceError;
use tracing::{debug, info};

use crate::config::{StoreConfig, StoreInfo};
use crate::view::{ActiveFilter, CartLineView, CartView, CatalogView, FilterView, ProductCard};

/// Session state behind the storefront UI.
///
/// All event sinks take `&mut self` and finish before returning; views are
/// recomputed from scratch on every call.
#[derive(Debug, Clone)]
pub struct Storefront {
    info: StoreInfo,
    filters: CatalogFilter,
    cart: CartLedger,
    cart_open: bool,
}

impl Storefront {
    /// Create a storefront over an already validated catalog.
    pub fn new(info: StoreInfo, catalog: Arc<Catalog>) -> Self {
        info!(store = %info.name, products = catalog.len(), "Storefront ready");
        Self {
            info,
            filters: CatalogFilter::new(catalog),
            cart: CartLedger::new(),
            cart_open: false,
        }
    }

    /// Build the catalog from config and start a session.
    pub fn from_config(config: StoreConfig) -> Result<Self, CommerceError> {
        let info = config.store.clone();
        let catalog = config.into_catalog()?;
        Ok(Self::new(info, Arc::new(catalog)))
    }

    /// Start a session over the built-in catalog.
    pub fn builtin() -> anyhow::Result<Self> {
        Ok(Self::from_config(StoreConfig::builtin()?)?)
    }

    pub fn info(&self) -> &StoreInfo {
        &self.info
    }

    pub fn catalog(&self) -> &Catalog {
        self.filters.catalog()
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.filters.toggle_category(category)
    }

    pub fn toggle_color(&mut self, color: &str) -> bool {
        self.filters.toggle_color(color)
    }

    pub fn toggle_size(&mut self, size: &str) -> bool {
        self.filters.toggle_size(size)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
    }

    pub fn filter_selection(&self) -> &FilterSelection {
        self.filters.selection()
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.filters.visible_products()
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add a variant of `product` and open the cart drawer.
    pub fn add_to_cart(&mut self, product: &Product, size: &str, color: &str) -> CartAddition {
        let added = self.cart.add_to_cart(product, size, color);
        self.apply_addition(&added);
        added
    }

    /// Add a variant of a catalog product by id.
    pub fn add_product(
        &mut self,
        product_id: &ProductId,
        size: &str,
        color: &str,
    ) -> Result<CartAddition, CommerceError> {
        let product = self.filters.catalog().require_product(product_id)?;
        let added = self.cart.add_to_cart(product, size, color);
        self.apply_addition(&added);
        Ok(added)
    }

    /// One-click add from a product card: first size, first color.
    pub fn quick_add(&mut self, product_id: &ProductId) -> Result<CartAddition, CommerceError> {
        let product = self.filters.catalog().require_product(product_id)?;
        let (size, color) = product
            .default_variant()
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
        let added = self.cart.add_to_cart(product, size, color);
        self.apply_addition(&added);
        Ok(added)
    }

    fn apply_addition(&mut self, added: &CartAddition) {
        if added.opens_cart() && !self.cart_open {
            self.cart_open = true;
            debug!(line_item_id = %added.line_item_id, "Opened cart after add");
        }
    }

    pub fn update_quantity(&mut self, line_item_id: &LineItemId, quantity: i64) -> bool {
        self.cart.update_quantity(line_item_id, quantity)
    }

    pub fn increment(&mut self, line_item_id: &LineItemId) -> bool {
        self.cart.increment(line_item_id)
    }

    pub fn decrement(&mut self, line_item_id: &LineItemId) -> bool {
        self.cart.decrement(line_item_id)
    }

    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        self.cart.remove_item(line_item_id)
    }

    pub fn cart_items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart_item_count(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    // ------------------------------------------------------------------
    // Drawer
    // ------------------------------------------------------------------

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Checkout is not part of this storefront; the button only logs.
    pub fn place_order(&self) {
        info!(
            lines = self.cart.line_count(),
            total = self.cart.total().amount_minor,
            "Place order requested; checkout is not available"
        );
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    pub fn catalog_view(&self) -> CatalogView {
        let products: Vec<ProductCard> = self
            .filters
            .visible_products()
            .into_iter()
            .map(ProductCard::from)
            .collect();
        CatalogView {
            count: products.len(),
            products,
        }
    }

    pub fn filter_view(&self) -> FilterView {
        let selection = self.filters.selection();
        let catalog = self.filters.catalog();

        let mut active = Vec::with_capacity(selection.active_count());
        for dimension in [
            FilterDimension::Category,
            FilterDimension::Size,
            FilterDimension::Color,
        ] {
            for value in selection.get(dimension).iter() {
                let label = match dimension {
                    FilterDimension::Color => catalog.color_name(value).unwrap_or(value),
                    _ => value,
                };
                active.push(ActiveFilter {
                    dimension,
                    value: value.to_string(),
                    label: label.to_string(),
                });
            }
        }

        FilterView {
            facets: self.filters.facets(),
            active_count: selection.active_count(),
            active,
        }
    }

    pub fn cart_view(&self) -> CartView {
        let catalog = self.filters.catalog();
        let total = self.cart.total();
        CartView {
            open: self.cart_open,
            lines: self
                .cart
                .items()
                .iter()
                .map(|item| CartLineView::new(item, catalog))
                .collect(),
            item_count: self.cart.item_count(),
            total,
            total_display: total.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Storefront {
        Storefront::builtin().unwrap()
    }

    #[test]
    fn test_starts_closed_and_empty() {
        let store = storefront();
        assert!(!store.is_cart_open());
        assert_eq!(store.cart_item_count(), 0);
        assert_eq!(store.visible_products().len(), 6);
        assert_eq!(store.info().name, "FASHION");
    }

    #[test]
    fn test_add_opens_cart() {
        let mut store = storefront();
        let added = store.quick_add(&ProductId::new("2")).unwrap();

        assert!(store.is_cart_open());
        assert_eq!(added.line_item_id.as_str(), "2-S-#000000");
    }

    #[test]
    fn test_add_reopens_after_close() {
        let mut store = storefront();
        store.quick_add(&ProductId::new("1")).unwrap();
        store.close_cart();
        assert!(!store.is_cart_open());

        store.quick_add(&ProductId::new("1")).unwrap();
        assert!(store.is_cart_open());
        assert_eq!(store.cart_item_count(), 2);
    }

    #[test]
    fn test_add_with_product_reference() {
        let mut store = storefront();
        let hoodie = store.catalog().product(&ProductId::new("3")).unwrap().clone();

        store.add_to_cart(&hoodie, "L", "#D4C5B9");
        assert_eq!(store.cart_total(), Money::new(3490));
        assert!(store.is_cart_open());
    }

    #[test]
    fn test_unknown_product() {
        let mut store = storefront();
        let err = store.add_product(&ProductId::new("99"), "M", "#000000").unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("99".to_string()));
        assert!(!store.is_cart_open());
        assert!(store.quick_add(&ProductId::new("99")).is_err());
    }

    #[test]
    fn test_place_order_is_noop() {
        let mut store = storefront();
        store.quick_add(&ProductId::new("1")).unwrap();
        let before = store.cart().clone();

        store.place_order();
        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn test_filter_view_labels_colors() {
        let mut store = storefront();
        store.toggle_color("#3B82F6");
        store.toggle_category("Джинсы");

        let view = store.filter_view();
        assert!(view.can_reset());
        assert_eq!(view.active_count, 2);
        assert_eq!(view.active[0].dimension, FilterDimension::Category);
        assert_eq!(view.active[1].label, "Синий");
    }

    #[test]
    fn test_cart_view_formats_totals() {
        let mut store = storefront();
        let id = store.quick_add(&ProductId::new("4")).unwrap().line_item_id;
        store.update_quantity(&id, 2);

        let view = store.cart_view();
        assert!(view.open);
        assert_eq!(view.lines[0].color_label, "Черный");
        assert_eq!(view.lines[0].line_total, Money::new(25980));
        assert_eq!(view.total_display, "25\u{a0}980 \u{20bd}");
    }
}
