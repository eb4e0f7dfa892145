//! Storefront domain types and state managers for Atelier.
//!
//! This crate holds the in-memory logic behind the storefront UI:
//!
//! - **Catalog**: Products, color palette, validated catalog
//! - **Search**: Filter selection and the catalog filter engine
//! - **Cart**: Line items keyed by product/size/color, totals
//!
//! # Example
//!
//! ```rust
//! use atelier_commerce::prelude::*;
//!
//! let tee = Product::new("1", "Базовая футболка", Money::new(1990), "Футболки")
//!     .with_colors(["#000000", "#FFFFFF"])
//!     .with_sizes(["S", "M"]);
//!
//! let mut cart = CartLedger::new();
//! let added = cart.add_to_cart(&tee, "M", "#000000");
//! assert!(added.opens_cart());
//!
//! cart.add_to_cart(&tee, "M", "#000000");
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), Money::new(3980));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, ColorOption, Product};

    // Cart
    pub use crate::cart::{CartAddition, CartLedger, CartSummary, LineItem, LineItemSummary};

    // Search
    pub use crate::search::{
        CatalogFilter, Facet, FacetValue, FilterDimension, FilterSelection, SelectionSet,
    };
}
