//! Search module.
//!
//! Contains the filter selection, the catalog filter engine and sidebar
//! facets.

mod engine;
mod facet;
mod selection;

pub use engine::CatalogFilter;
pub use facet::{Facet, FacetValue};
pub use selection::{FilterDimension, FilterSelection, SelectionSet};
