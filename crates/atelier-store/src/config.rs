//! Store configuration: the static catalog supplied at startup.

use std::path::Path;

use anyhow::{Context, Result};
use atelier_commerce::catalog::{Catalog, ColorOption, Product};
use atelier_commerce::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../catalog.toml");

/// Store configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store metadata.
    #[serde(default)]
    pub store: StoreInfo,

    /// Categories offered by the filter sidebar, in display order.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Color palette offered by the filter sidebar.
    #[serde(default)]
    pub colors: Vec<ColorOption>,

    /// Sizes offered by the filter sidebar, in display order.
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Products, in catalog order.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl StoreConfig {
    /// Load config from a file.
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read store config: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The catalog embedded in this crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG).context("Built-in catalog is malformed")
    }

    /// Save config to a file, picking the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write store config: {}", path.display()))
    }

    /// Validate the products and build the catalog.
    ///
    /// Products whose category or colors the sidebar does not offer are
    /// kept, but logged, since no filter can select them by that value.
    pub fn into_catalog(self) -> Result<Catalog, CommerceError> {
        for product in &self.products {
            if !self.categories.is_empty() && !self.categories.contains(&product.category) {
                warn!(product_id = %product.id, category = %product.category, "Product category not offered by filters");
            }
            for color in &product.colors {
                if !self.colors.is_empty() && !self.colors.iter().any(|c| &c.value == color) {
                    warn!(product_id = %product.id, color = %color, "Product color not in palette");
                }
            }
        }

        Catalog::new(self.products, self.categories, self.colors, self.sizes)
    }
}

/// Store metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreInfo {
    /// Brand name shown in the header.
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

fn default_name() -> String {
    "Atelier".to_string()
}
