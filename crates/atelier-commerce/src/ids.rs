//! Newtype IDs for type-safe identifiers.
//!
//! A `LineItemId` is derived from a product and its chosen variant, so it
//! must never be confused with the `ProductId` it was built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Catalog product identifier.
    ProductId
);
define_id!(
    /// Cart line item identifier (product, size and color combined).
    LineItemId
);

impl LineItemId {
    /// Build the composite key for a product variant.
    ///
    /// The key is `"{product}-{size}-{color}"`. Two additions of the same
    /// variant always map to the same line item.
    pub fn for_variant(product_id: &ProductId, size: &str, color: &str) -> Self {
        Self(format!("{}-{}-{}", product_id.as_str(), size, color))
    }
}
