//! Product catalog module.
//!
//! Contains the product type, the color palette and the validated catalog
//! that the filter engine and the storefront share.

mod product;

pub use product::{ColorOption, Product};

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Serialize;
use std::collections::HashSet;

/// The static catalog: products plus the filter values offered to shoppers.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    colors: Vec<ColorOption>,
    sizes: Vec<String>,
}

impl Catalog {
    /// Build a catalog, validating every product and rejecting duplicate ids.
    pub fn new(
        products: Vec<Product>,
        categories: Vec<String>,
        colors: Vec<ColorOption>,
        sizes: Vec<String>,
    ) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.as_str()) {
                return Err(CommerceError::DuplicateProduct(product.id.to_string()));
            }
        }

        Ok(Self {
            products,
            categories,
            colors,
            sizes,
        })
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category list offered by the sidebar.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Color palette offered by the sidebar.
    pub fn colors(&self) -> &[ColorOption] {
        &self.colors
    }

    /// Size list offered by the sidebar.
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, failing with `ProductNotFound`.
    pub fn require_product(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.product(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Human label for a color token, if the palette has one.
    pub fn color_name(&self, value: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| c.value == value)
            .map(|c| c.name.as_str())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn tee(id: &str) -> Product {
        Product::new(id, "Базовая футболка", Money::new(1990), "Футболки")
            .with_colors(["#000000"])
            .with_sizes(["M"])
    }

    fn catalog(products: Vec<Product>) -> Result<Catalog, CommerceError> {
        Catalog::new(
            products,
            vec!["Футболки".to_string()],
            vec![ColorOption::new("Черный", "#000000")],
            vec!["M".to_string()],
        )
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = catalog(vec![tee("1"), tee("2")]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.product(&ProductId::new("2")).is_some());
        assert!(catalog.product(&ProductId::new("3")).is_none());
    }

    #[test]
    fn test_require_product() {
        let catalog = catalog(vec![tee("1")]).unwrap();
        let err = catalog.require_product(&ProductId::new("9")).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("9".to_string()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = catalog(vec![tee("1"), tee("1")]).unwrap_err();
        assert_eq!(err, CommerceError::DuplicateProduct("1".to_string()));
    }

    #[test]
    fn test_invalid_product_rejected() {
        let broken = tee("1").with_sizes(Vec::<String>::new());
        assert!(catalog(vec![broken]).is_err());
    }

    #[test]
    fn test_color_name() {
        let catalog = catalog(vec![tee("1")]).unwrap();
        assert_eq!(catalog.color_name("#000000"), Some("Черный"));
        assert_eq!(catalog.color_name("#123456"), None);
    }
}
