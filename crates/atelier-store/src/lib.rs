//! Atelier storefront composition root.
//!
//! Owns one session's state (catalog, filter selection, cart, cart drawer)
//! and hands the presentation layer owned, serializable views.
//!
//! ```rust
//! use atelier_store::Storefront;
//! use atelier_commerce::ProductId;
//!
//! let mut store = Storefront::builtin()?;
//! store.toggle_size("XS");
//! assert_eq!(store.catalog_view().count, 2);
//!
//! store.quick_add(&ProductId::new("5"))?;
//! assert!(store.cart_view().open);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod storefront;
pub mod view;

pub use config::{StoreConfig, StoreInfo};
pub use storefront::Storefront;
pub use view::{ActiveFilter, CartLineView, CartView, CatalogView, FilterView, ProductCard};
