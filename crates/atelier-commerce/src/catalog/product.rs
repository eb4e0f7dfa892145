//! Product and color palette types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is built. Cart line items copy
/// the fields they display instead of pointing back here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URI.
    #[serde(default)]
    pub image: String,
    /// Single category tag.
    pub category: String,
    /// Color tokens the product comes in, in display order.
    pub colors: Vec<String>,
    /// Size labels the product comes in, in display order.
    pub sizes: Vec<String>,
}

impl Product {
    /// Create a product with no image, colors or sizes yet.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            category: category.into(),
            colors: Vec::new(),
            sizes: Vec::new(),
        }
    }

    /// Set the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the available colors.
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the available sizes.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Check the product against catalog rules.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().is_empty() {
            return Err(CommerceError::invalid("", "empty id"));
        }
        if self.name.trim().is_empty() {
            return Err(CommerceError::invalid(self.id.as_str(), "empty name"));
        }
        if !self.price.is_positive() {
            return Err(CommerceError::invalid(
                self.id.as_str(),
                format!("price must be positive, got {}", self.price.amount_minor),
            ));
        }
        if self.colors.is_empty() {
            return Err(CommerceError::invalid(self.id.as_str(), "no colors"));
        }
        if self.sizes.is_empty() {
            return Err(CommerceError::invalid(self.id.as_str(), "no sizes"));
        }
        Ok(())
    }

    /// The variant picked by a one-click "add to cart": first size, first color.
    ///
    /// Returns `None` only for products that would fail validation.
    pub fn default_variant(&self) -> Option<(&str, &str)> {
        let size = self.sizes.first()?;
        let color = self.colors.first()?;
        Some((size.as_str(), color.as_str()))
    }

    /// Check if the product comes in the given color.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Check if the product comes in the given size.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// A labelled color swatch offered by the filter sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorOption {
    /// Human-readable label.
    pub name: String,
    /// Color token matched against `Product::colors`.
    pub value: String,
}

impl ColorOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
