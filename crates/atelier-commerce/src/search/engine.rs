//! The catalog filter engine.

use std::sync::Arc;

use crate::catalog::{Catalog, Product};
use crate::search::{Facet, FilterDimension, FilterSelection};
use tracing::debug;

/// Holds the catalog and the current filter selection.
///
/// The visible product list is derived on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    catalog: Arc<Catalog>,
    selection: FilterSelection,
}

impl CatalogFilter {
    /// Create an engine with an empty selection.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selection: FilterSelection::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Toggle a category. Returns whether it is selected afterwards.
    pub fn toggle_category(&mut self, category: &str) -> bool {
        self.toggle(FilterDimension::Category, category)
    }

    /// Toggle a color token. Returns whether it is selected afterwards.
    pub fn toggle_color(&mut self, color: &str) -> bool {
        self.toggle(FilterDimension::Color, color)
    }

    /// Toggle a size label. Returns whether it is selected afterwards.
    pub fn toggle_size(&mut self, size: &str) -> bool {
        self.toggle(FilterDimension::Size, size)
    }

    /// Toggle a value in any dimension.
    ///
    /// Values the catalog does not offer are accepted; they simply match
    /// nothing.
    pub fn toggle(&mut self, dimension: FilterDimension, value: &str) -> bool {
        let selected = self.selection.get_mut(dimension).toggle(value);
        debug!(%dimension, value, selected, "Toggled filter");
        selected
    }

    /// Reset every dimension to empty.
    pub fn clear_all(&mut self) {
        self.selection.clear();
        debug!("Cleared all filters");
    }

    /// Number of selected values across all dimensions.
    pub fn active_filter_count(&self) -> usize {
        self.selection.active_count()
    }

    /// Products passing every active dimension, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog
            .products()
            .iter()
            .filter(|p| matches_selection(p, &self.selection, None))
            .collect()
    }

    /// Number of visible products.
    pub fn visible_count(&self) -> usize {
        self.catalog
            .products()
            .iter()
            .filter(|p| matches_selection(p, &self.selection, None))
            .count()
    }

    /// Sidebar facets for category, size and color, in that order.
    ///
    /// Each value's count applies the selections of the other two
    /// dimensions only, so it tells how many products selecting that value
    /// would bring in.
    pub fn facets(&self) -> Vec<Facet> {
        let catalog = &self.catalog;

        let mut categories = Facet::new(FilterDimension::Category);
        for category in catalog.categories() {
            categories.add_value(
                category.as_str(),
                category.as_str(),
                self.count_with(FilterDimension::Category, |p| &p.category == category),
                self.selection.categories.contains(category),
            );
        }

        let mut sizes = Facet::new(FilterDimension::Size);
        for size in catalog.sizes() {
            sizes.add_value(
                size.as_str(),
                size.as_str(),
                self.count_with(FilterDimension::Size, |p| p.has_size(size)),
                self.selection.sizes.contains(size),
            );
        }

        let mut colors = Facet::new(FilterDimension::Color);
        for color in catalog.colors() {
            colors.add_value(
                color.value.as_str(),
                color.name.as_str(),
                self.count_with(FilterDimension::Color, |p| p.has_color(&color.value)),
                self.selection.colors.contains(&color.value),
            );
        }

        vec![categories, sizes, colors]
    }

    fn count_with(&self, dimension: FilterDimension, pred: impl Fn(&Product) -> bool) -> usize {
        self.catalog
            .products()
            .iter()
            .filter(|p| matches_selection(p, &self.selection, Some(dimension)) && pred(p))
            .count()
    }
}

/// Category must be selected (single-valued); colors and sizes need at least
/// one overlap (multi-valued). Empty dimensions and `skip` always pass.
fn matches_selection(
    product: &Product,
    selection: &FilterSelection,
    skip: Option<FilterDimension>,
) -> bool {
    let active = |dim: FilterDimension| skip != Some(dim) && !selection.get(dim).is_empty();

    if active(FilterDimension::Category) && !selection.categories.contains(&product.category) {
        return false;
    }
    if active(FilterDimension::Color) && !selection.colors.contains_any(&product.colors) {
        return false;
    }
    if active(FilterDimension::Size) && !selection.sizes.contains_any(&product.sizes) {
        return false;
    }
    true
}
